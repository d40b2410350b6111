//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name              | Description                                       | Key Methods       |
// |-------------------|---------------------------------------------------|-------------------|
// | EventServiceImpl  | Validates and persists events                     | create_event      |
// |                   |                                                   | get_event         |
//--------------------------------------------------------------------------------------------------

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::domain::models::context::RequestContext;
use crate::domain::models::types::{Event, NewEvent};
use crate::domain::services::id_generator::IdGenerator;
use crate::domain::services::persistence::PersistenceGateway;
use crate::domain::services::validation::{parse_event_date, required};
use crate::domain::services::{ServiceError, ServiceResult};

use super::EventService;

pub const MISSING_EVENT_FIELDS: &str = "Title, venue, and date are required";
pub const EVENT_NOT_FOUND: &str = "Event not found";

/// Default implementation of [`EventService`] over a persistence gateway.
pub struct EventServiceImpl {
    gateway: Arc<dyn PersistenceGateway>,
    ids: Arc<dyn IdGenerator>,
}

impl EventServiceImpl {
    pub fn new(gateway: Arc<dyn PersistenceGateway>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { gateway, ids }
    }
}

#[async_trait]
impl EventService for EventServiceImpl {
    async fn create_event(&self, ctx: &RequestContext, input: NewEvent) -> ServiceResult<Event> {
        let Some(admin) = ctx.admin.as_ref() else {
            warn!(request_id = %ctx.request_id, "Rejected event creation without admin session");
            return Err(ServiceError::Unauthorized);
        };

        let (Some(title), Some(venue), Some(raw_date)) = (
            required(input.title.as_deref()),
            required(input.venue.as_deref()),
            required(input.date.as_deref()),
        ) else {
            warn!(request_id = %ctx.request_id, "Rejected event with missing fields");
            return Err(ServiceError::Validation(MISSING_EVENT_FIELDS.to_string()));
        };

        let date = parse_event_date(&raw_date).ok_or_else(|| {
            warn!(request_id = %ctx.request_id, "Rejected event with invalid date {:?}", raw_date);
            ServiceError::Validation(format!("Invalid date: {}", raw_date))
        })?;

        let event = Event {
            event_id: self.ids.next_id(),
            title,
            venue,
            date,
            created_at: Utc::now(),
        };

        self.gateway
            .insert_event(event.clone())
            .await
            .map_err(|e| {
                error!(request_id = %ctx.request_id, "Error creating event: {e}");
                ServiceError::from(e)
            })?;

        info!(
            request_id = %ctx.request_id,
            admin = %admin.subject,
            "Created event {} ({})",
            event.event_id,
            event.title
        );
        Ok(event)
    }

    async fn get_event(&self, ctx: &RequestContext, event_id: &str) -> ServiceResult<Event> {
        let Some(event_id) = required(Some(event_id)) else {
            return Err(ServiceError::NotFound(EVENT_NOT_FOUND.to_string()));
        };

        debug!(request_id = %ctx.request_id, "Fetching event {}", event_id);

        self.gateway
            .find_event(&event_id)
            .await
            .map_err(|e| {
                error!(request_id = %ctx.request_id, "Error fetching event: {e}");
                ServiceError::from(e)
            })?
            .ok_or_else(|| ServiceError::NotFound(EVENT_NOT_FOUND.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::context::AdminSession;
    use crate::domain::services::id_generator::{SequentialIdGenerator, UuidIdGenerator};
    use crate::domain::services::persistence::{InMemoryGateway, MockPersistenceGateway, StorageError};
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn admin_ctx() -> RequestContext {
        RequestContext::admin(AdminSession::new("admin"))
    }

    fn gala() -> NewEvent {
        NewEvent {
            title: Some("Gala".to_string()),
            venue: Some("Hall A".to_string()),
            date: Some("2025-05-01T18:00".to_string()),
        }
    }

    fn service_with(gateway: Arc<dyn PersistenceGateway>) -> EventServiceImpl {
        EventServiceImpl::new(gateway, Arc::new(SequentialIdGenerator::new("E")))
    }

    #[tokio::test]
    async fn test_create_event_persists_and_returns_generated_id() {
        let gateway = Arc::new(InMemoryGateway::new());
        let service = service_with(gateway.clone());

        let event = service.create_event(&admin_ctx(), gala()).await.unwrap();

        assert_eq!(event.event_id, "E1");
        assert_eq!(event.title, "Gala");
        assert_eq!(event.venue, "Hall A");
        assert_eq!(event.date, Utc.with_ymd_and_hms(2025, 5, 1, 18, 0, 0).unwrap());
        assert_eq!(gateway.find_event("E1").await.unwrap(), Some(event));
    }

    #[tokio::test]
    async fn test_create_event_ids_are_unique() {
        let service = EventServiceImpl::new(
            Arc::new(InMemoryGateway::new()),
            Arc::new(UuidIdGenerator),
        );

        let mut ids = HashSet::new();
        for _ in 0..50 {
            let event = service.create_event(&admin_ctx(), gala()).await.unwrap();
            assert!(!event.event_id.is_empty());
            ids.insert(event.event_id);
        }
        assert_eq!(ids.len(), 50);
    }

    #[tokio::test]
    async fn test_create_event_trims_fields() {
        let service = service_with(Arc::new(InMemoryGateway::new()));
        let input = NewEvent {
            title: Some("  Gala ".to_string()),
            venue: Some("\tHall A".to_string()),
            date: Some(" 2025-05-01T18:00 ".to_string()),
        };

        let event = service.create_event(&admin_ctx(), input).await.unwrap();
        assert_eq!(event.title, "Gala");
        assert_eq!(event.venue, "Hall A");
    }

    #[tokio::test]
    async fn test_create_event_with_blank_field_performs_no_write() {
        let blanks = [
            NewEvent { title: None, ..gala() },
            NewEvent { venue: Some("   ".to_string()), ..gala() },
            NewEvent { date: Some(String::new()), ..gala() },
        ];

        for input in blanks {
            let mut gateway = MockPersistenceGateway::new();
            gateway.expect_insert_event().times(0);
            let service = service_with(Arc::new(gateway));

            let err = service.create_event(&admin_ctx(), input).await.unwrap_err();
            match err {
                ServiceError::Validation(msg) => assert_eq!(msg, MISSING_EVENT_FIELDS),
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_create_event_with_bad_date_performs_no_write() {
        let mut gateway = MockPersistenceGateway::new();
        gateway.expect_insert_event().times(0);
        let service = service_with(Arc::new(gateway));

        let input = NewEvent { date: Some("next friday".to_string()), ..gala() };
        let err = service.create_event(&admin_ctx(), input).await.unwrap_err();
        match err {
            ServiceError::Validation(msg) => assert_eq!(msg, "Invalid date: next friday"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_event_requires_admin_session() {
        let mut gateway = MockPersistenceGateway::new();
        gateway.expect_insert_event().times(0);
        let service = service_with(Arc::new(gateway));

        let err = service
            .create_event(&RequestContext::anonymous(), gala())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized));
    }

    #[tokio::test]
    async fn test_create_event_surfaces_storage_failure() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_insert_event()
            .times(1)
            .returning(|_| Err(StorageError::Unavailable("disk full".to_string())));
        let service = service_with(Arc::new(gateway));

        let err = service.create_event(&admin_ctx(), gala()).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(StorageError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_get_event_round_trips_created_event() {
        let service = service_with(Arc::new(InMemoryGateway::new()));
        let created = service.create_event(&admin_ctx(), gala()).await.unwrap();

        let fetched = service
            .get_event(&RequestContext::anonymous(), &created.event_id)
            .await
            .unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_unknown_event_is_not_found() {
        let service = service_with(Arc::new(InMemoryGateway::new()));

        for id in ["missing", "", "  "] {
            let err = service
                .get_event(&RequestContext::anonymous(), id)
                .await
                .unwrap_err();
            match err {
                ServiceError::NotFound(msg) => assert_eq!(msg, EVENT_NOT_FOUND),
                other => panic!("expected not found, got {other:?}"),
            }
        }
    }

    #[tokio::test]
    async fn test_get_event_surfaces_storage_failure() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_find_event()
            .returning(|_| Err(StorageError::Unavailable("timeout".to_string())));
        let service = service_with(Arc::new(gateway));

        let err = service
            .get_event(&RequestContext::anonymous(), "E1")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
