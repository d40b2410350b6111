use async_trait::async_trait;

use crate::domain::models::context::RequestContext;
use crate::domain::models::types::{NewRegistration, RegisteredTicket};

use super::ServiceResult;

pub mod ticket_service_impl;

pub use self::ticket_service_impl::TicketServiceImpl;

/// Service for registering attendees to existing events.
///
/// Duplicate registrations are allowed and no capacity limit is applied: every accepted call
/// issues a new ticket.
#[async_trait]
pub trait TicketService: Send + Sync {
    /// Validates a registration and issues a ticket for it.
    ///
    /// # Returns
    /// * `Ok(RegisteredTicket)` - The new ticket joined with its event's title, venue and date
    /// * `Err(ServiceError::Validation)` - If event id, name or email is missing or blank
    /// * `Err(ServiceError::NotFound)` - If the event does not exist
    /// * `Err(ServiceError::Storage)` - If the read or write failed
    async fn register_ticket(
        &self,
        ctx: &RequestContext,
        input: NewRegistration,
    ) -> ServiceResult<RegisteredTicket>;
}
