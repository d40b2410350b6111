use async_trait::async_trait;

use crate::domain::models::context::RequestContext;
use crate::domain::models::types::{Event, NewEvent};

use super::ServiceResult;

pub mod event_service_impl;

pub use self::event_service_impl::EventServiceImpl;

/// Path segment under which public registration pages live.
pub const REGISTRATION_PATH: &str = "tickets";

/// Service for creating events and reading them back by public identifier.
#[async_trait]
pub trait EventService: Send + Sync {
    /// Validates and stores a new event.
    ///
    /// # Arguments
    /// * `ctx` - Caller context; must carry an admin session
    /// * `input` - Raw title, venue and date
    ///
    /// # Returns
    /// * `Ok(Event)` - The stored event with its generated `event_id`
    /// * `Err(ServiceError::Unauthorized)` - If `ctx` has no admin session
    /// * `Err(ServiceError::Validation)` - If a field is missing, blank, or the date is invalid
    /// * `Err(ServiceError::Storage)` - If the write failed
    async fn create_event(&self, ctx: &RequestContext, input: NewEvent) -> ServiceResult<Event>;

    /// Looks up an event by its public identifier.
    ///
    /// # Returns
    /// * `Ok(Event)` - If found
    /// * `Err(ServiceError::NotFound)` - If no event has that identifier
    /// * `Err(ServiceError::Storage)` - If the read failed
    async fn get_event(&self, ctx: &RequestContext, event_id: &str) -> ServiceResult<Event>;
}

/// Builds the public registration link for an event: `{origin}/tickets/{event_id}`.
pub fn registration_link(origin: &str, event_id: &str) -> String {
    format!(
        "{}/{}/{}",
        origin.trim_end_matches('/'),
        REGISTRATION_PATH,
        event_id
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_link() {
        assert_eq!(
            registration_link("https://tickets.example.org", "E1"),
            "https://tickets.example.org/tickets/E1"
        );
        assert_eq!(
            registration_link("http://localhost:3000/", "abc"),
            "http://localhost:3000/tickets/abc"
        );
    }
}
