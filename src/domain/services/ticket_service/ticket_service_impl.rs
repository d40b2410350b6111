use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info, warn};

use crate::domain::models::context::RequestContext;
use crate::domain::models::types::{NewRegistration, RegisteredTicket, Ticket};
use crate::domain::services::event_service::event_service_impl::EVENT_NOT_FOUND;
use crate::domain::services::id_generator::IdGenerator;
use crate::domain::services::persistence::PersistenceGateway;
use crate::domain::services::validation::required;
use crate::domain::services::{ServiceError, ServiceResult};

use super::TicketService;

pub const MISSING_REGISTRATION_FIELDS: &str = "EventId, name, and email are required";

/// Default implementation of [`TicketService`].
///
/// The event's existence is checked explicitly before the ticket is written; the storage layer
/// is not relied upon to enforce the reference.
pub struct TicketServiceImpl {
    gateway: Arc<dyn PersistenceGateway>,
    ids: Arc<dyn IdGenerator>,
}

impl TicketServiceImpl {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { gateway, ids }
    }
}

#[async_trait]
impl TicketService for TicketServiceImpl {
    async fn register_ticket(
        &self,
        ctx: &RequestContext,
        input: NewRegistration,
    ) -> ServiceResult<RegisteredTicket> {
        let (Some(event_id), Some(name), Some(email)) = (
            required(input.event_id.as_deref()),
            required(input.name.as_deref()),
            required(input.email.as_deref()),
        ) else {
            warn!(request_id = %ctx.request_id, "Rejected registration with missing fields");
            return Err(ServiceError::Validation(
                MISSING_REGISTRATION_FIELDS.to_string(),
            ));
        };

        let event = self
            .gateway
            .find_event(&event_id)
            .await
            .map_err(|e| {
                error!(request_id = %ctx.request_id, "Error registering for event: {e}");
                ServiceError::from(e)
            })?
            .ok_or_else(|| {
                warn!(request_id = %ctx.request_id, "Registration for unknown event {}", event_id);
                ServiceError::NotFound(EVENT_NOT_FOUND.to_string())
            })?;

        let ticket = Ticket {
            ticket_id: self.ids.next_id(),
            event_id,
            name,
            email,
            created_at: Utc::now(),
        };

        self.gateway
            .insert_ticket(ticket.clone())
            .await
            .map_err(|e| {
                error!(request_id = %ctx.request_id, "Error registering for event: {e}");
                ServiceError::from(e)
            })?;

        info!(
            request_id = %ctx.request_id,
            "Issued ticket {} for event {}",
            ticket.ticket_id,
            ticket.event_id
        );
        Ok(RegisteredTicket::new(ticket, event.summary()))
    }
}
