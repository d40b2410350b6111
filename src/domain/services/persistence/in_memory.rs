//--------------------------------------------------------------------------------------------------
// STRUCTS
//--------------------------------------------------------------------------------------------------
// | Name             | Description                                       | Key Methods       |
// |------------------|---------------------------------------------------|-------------------|
// | InMemoryGateway  | Process-local store for events and tickets        | insert_event      |
// |                  |                                                   | find_event        |
// |                  |                                                   | insert_ticket     |
// |                  |                                                   | tickets_for_event |
//--------------------------------------------------------------------------------------------------

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::models::types::{Event, Ticket};

use super::{PersistenceGateway, StorageError};

/// Process-local persistence backed by hash maps.
///
/// Tickets are indexed by event so listing an event's tickets does not scan the whole store.
/// Locks are never held across an await point.
#[derive(Debug, Default)]
pub struct InMemoryGateway {
    /// Events keyed by public identifier
    events: RwLock<HashMap<String, Event>>,

    /// Tickets keyed by ticket identifier
    tickets: RwLock<HashMap<String, Ticket>>,

    /// Ticket ids per event, in insertion order
    tickets_by_event: RwLock<HashMap<String, Vec<String>>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events.
    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    /// Number of stored tickets across all events.
    pub fn ticket_count(&self) -> usize {
        self.tickets.read().len()
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn insert_event(&self, event: Event) -> Result<(), StorageError> {
        let mut events = self.events.write();
        match events.entry(event.event_id.clone()) {
            Entry::Occupied(entry) => Err(StorageError::Duplicate {
                kind: "event",
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!("Stored event {}", event.event_id);
                entry.insert(event);
                Ok(())
            }
        }
    }

    async fn find_event(&self, event_id: &str) -> Result<Option<Event>, StorageError> {
        Ok(self.events.read().get(event_id).cloned())
    }

    async fn insert_ticket(&self, ticket: Ticket) -> Result<(), StorageError> {
        let mut tickets = self.tickets.write();
        if tickets.contains_key(&ticket.ticket_id) {
            return Err(StorageError::Duplicate {
                kind: "ticket",
                id: ticket.ticket_id,
            });
        }

        // Index update happens under the tickets write lock so listings never see a
        // half-inserted ticket.
        self.tickets_by_event
            .write()
            .entry(ticket.event_id.clone())
            .or_default()
            .push(ticket.ticket_id.clone());

        debug!("Stored ticket {} for event {}", ticket.ticket_id, ticket.event_id);
        tickets.insert(ticket.ticket_id.clone(), ticket);
        Ok(())
    }

    async fn tickets_for_event(&self, event_id: &str) -> Result<Vec<Ticket>, StorageError> {
        let tickets = self.tickets.read();
        let index = self.tickets_by_event.read();

        Ok(index
            .get(event_id)
            .map(|ids| ids.iter().filter_map(|id| tickets.get(id).cloned()).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(id: &str) -> Event {
        Event {
            event_id: id.to_string(),
            title: "Gala".to_string(),
            venue: "Hall A".to_string(),
            date: Utc::now(),
            created_at: Utc::now(),
        }
    }

    fn ticket(id: &str, event_id: &str) -> Ticket {
        Ticket {
            ticket_id: id.to_string(),
            event_id: event_id.to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find_event() {
        let gateway = InMemoryGateway::new();
        gateway.insert_event(event("E1")).await.unwrap();

        let found = gateway.find_event("E1").await.unwrap();
        assert_eq!(found.map(|e| e.event_id), Some("E1".to_string()));
        assert!(gateway.find_event("E2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_event_id_is_rejected() {
        let gateway = InMemoryGateway::new();
        gateway.insert_event(event("E1")).await.unwrap();

        let err = gateway.insert_event(event("E1")).await.unwrap_err();
        assert!(matches!(err, StorageError::Duplicate { kind: "event", .. }));
        assert_eq!(gateway.event_count(), 1);
    }

    #[tokio::test]
    async fn test_tickets_are_listed_per_event_in_order() {
        let gateway = InMemoryGateway::new();
        gateway.insert_ticket(ticket("T1", "E1")).await.unwrap();
        gateway.insert_ticket(ticket("T2", "E2")).await.unwrap();
        gateway.insert_ticket(ticket("T3", "E1")).await.unwrap();

        let ids: Vec<String> = gateway
            .tickets_for_event("E1")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.ticket_id)
            .collect();
        assert_eq!(ids, vec!["T1", "T3"]);
        assert!(gateway.tickets_for_event("E9").await.unwrap().is_empty());
        assert_eq!(gateway.ticket_count(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_ticket_id_is_rejected() {
        let gateway = InMemoryGateway::new();
        gateway.insert_ticket(ticket("T1", "E1")).await.unwrap();

        let err = gateway.insert_ticket(ticket("T1", "E1")).await.unwrap_err();
        assert!(matches!(err, StorageError::Duplicate { kind: "ticket", .. }));
        assert_eq!(gateway.tickets_for_event("E1").await.unwrap().len(), 1);
    }
}
