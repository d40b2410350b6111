//--------------------------------------------------------------------------------------------------
// FUNCTIONS
//--------------------------------------------------------------------------------------------------
// | Name                  | Description                            | Return Type         |
// |-----------------------|----------------------------------------|---------------------|
// | health                | Health check endpoint                  | Response            |
// | create_event          | Create an event (admin only)           | ApiResult<Response> |
// | get_event             | Public view of an event                | ApiResult<Response> |
// | register              | Register an attendee, issue a ticket   | ApiResult<Response> |
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};

use super::{
    ApiError, ApiResult, AppState, CreateEventRequest, CreateEventResponse, EventResponse, RegisterRequest,
    RegisterResponse,
};
use crate::domain::models::context::RequestContext;
use crate::domain::services::event_service::registration_link;

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok"
    }))
}

/// Create a new event
///
/// The admin session is resolved before the body is looked at, so an unauthenticated caller
/// gets 401 even when the body is malformed.
pub async fn create_event(
    Extension(state): Extension<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<CreateEventRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let ctx = RequestContext::from(state.authenticator.authenticate(&headers));
    if ctx.admin.is_none() {
        return Err(ApiError::Unauthorized);
    }

    let Json(req) = payload?;
    let event = state
        .event_service
        .create_event(&ctx, req.into_new_event())
        .await?;

    let response = CreateEventResponse {
        success: true,
        registration_url: state
            .public_origin
            .as_deref()
            .map(|origin| registration_link(origin, &event.event_id)),
        event_id: event.event_id,
    };

    Ok((StatusCode::OK, Json(response)).into_response())
}

/// Get the public details of an event
pub async fn get_event(
    Extension(state): Extension<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> ApiResult<Response> {
    let ctx = RequestContext::anonymous();
    let event = state.event_service.get_event(&ctx, &event_id).await?;

    Ok((StatusCode::OK, Json(EventResponse::from(event))).into_response())
}

/// Register an attendee for an event
pub async fn register(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(req) = payload?;
    let ctx = RequestContext::anonymous();

    let ticket = state
        .ticket_service
        .register_ticket(&ctx, req.into_new_registration())
        .await?;

    Ok((StatusCode::OK, Json(RegisterResponse::from(ticket))).into_response())
}
