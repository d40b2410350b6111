//--------------------------------------------------------------------------------------------------
// MODULE OVERVIEW
//--------------------------------------------------------------------------------------------------
// This module implements the REST API of the ticketing service using Axum.
// It exposes event creation, public event lookup and attendee registration.
//
// | Component      | Description                                                |
// |----------------|------------------------------------------------------------|
// | API            | Main API structure coordinating routes and services        |
// | Routes         | Handler functions for API endpoints                        |
// | States         | Shared application state                                   |
// | DTOs           | Data transfer objects for API requests/responses           |
// | Auth           | Admin authenticator seam                                   |
// | Client         | Typed HTTP client for the endpoints                        |
//
//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name           | Description                                       | Key Methods       |
// |----------------|---------------------------------------------------|-------------------|
// | AppState       | Shared application state                          | new, from_parts   |
// | Api            | Main API structure                                | routes, serve     |
//--------------------------------------------------------------------------------------------------

mod routes;
mod dto;
mod error;
pub mod auth;
pub mod client;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::domain::services::event_service::{EventService, EventServiceImpl};
use crate::domain::services::id_generator::IdGenerator;
use crate::domain::services::persistence::PersistenceGateway;
use crate::domain::services::ticket_service::{TicketService, TicketServiceImpl};

use self::auth::AdminAuthenticator;

pub use dto::*;
pub use error::{ApiError, ApiResult, STORAGE_FAILURE_MESSAGE};

/// Prefix under which the ticket endpoints are mounted
pub const API_PREFIX: &str = "/api/tickets";

/// Shared application state accessible by all handlers
pub struct AppState {
    pub event_service: Arc<dyn EventService>,
    pub ticket_service: Arc<dyn TicketService>,
    pub authenticator: Arc<dyn AdminAuthenticator>,
    /// Origin used to build public registration links, e.g. `https://tickets.example.org`
    pub public_origin: Option<String>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(
        event_service: Arc<dyn EventService>,
        ticket_service: Arc<dyn TicketService>,
        authenticator: Arc<dyn AdminAuthenticator>,
        public_origin: Option<String>,
    ) -> Self {
        Self {
            event_service,
            ticket_service,
            authenticator,
            public_origin,
        }
    }

    /// Wires the default services over one gateway and id generator
    pub fn from_parts(
        gateway: Arc<dyn PersistenceGateway>,
        ids: Arc<dyn IdGenerator>,
        authenticator: Arc<dyn AdminAuthenticator>,
        public_origin: Option<String>,
    ) -> Self {
        let event_service = Arc::new(EventServiceImpl::new(gateway.clone(), ids.clone()));
        let ticket_service = Arc::new(TicketServiceImpl::new(gateway, ids));
        Self::new(event_service, ticket_service, authenticator, public_origin)
    }
}

/// Main API structure
pub struct Api {
    /// API address
    addr: SocketAddr,
    /// Shared application state
    state: Arc<AppState>,
    /// Origins allowed by CORS
    cors_origins: Vec<String>,
}

impl Api {
    /// Creates a new API instance
    pub fn new(addr: SocketAddr, state: AppState, cors_origins: Vec<String>) -> Self {
        Self {
            addr,
            state: Arc::new(state),
            cors_origins,
        }
    }

    fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) if origin != "*" => Some(value),
                _ => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_credentials(true)
    }

    /// Creates all routes for the API
    pub fn routes(&self) -> Router {
        let tickets = Router::new()
            .route("/create-event", post(routes::create_event))
            .route("/event/:event_id", get(routes::get_event))
            .route("/register", post(routes::register));

        Router::new()
            .route("/health", get(routes::health))
            .nest(API_PREFIX, tickets)
            .layer(Extension(self.state.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(self.cors_layer())
    }

    /// Starts the API server and runs until ctrl-c
    pub async fn serve(self) -> Result<(), std::io::Error> {
        let app = self.routes();

        let listener = TcpListener::bind(self.addr).await?;
        info!("API listening on {}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down API server");
}
