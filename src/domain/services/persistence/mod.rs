use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::types::{Event, Ticket};

pub mod in_memory;

pub use self::in_memory::InMemoryGateway;

/// Data-access facade over event and ticket records.
///
/// The storage engine behind it owns durability and concurrent-access isolation; callers add no
/// locking of their own. Implementations are shared across requests as
/// `Arc<dyn PersistenceGateway>`.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Stores a new event.
    ///
    /// # Returns
    /// * `Ok(())` - If the event was stored
    /// * `Err(StorageError::Duplicate)` - If an event with the same id already exists
    async fn insert_event(&self, event: Event) -> Result<(), StorageError>;

    /// Looks up an event by its public identifier.
    async fn find_event(&self, event_id: &str) -> Result<Option<Event>, StorageError>;

    /// Stores a new ticket. The referenced event is not checked here.
    async fn insert_ticket(&self, ticket: Ticket) -> Result<(), StorageError>;

    /// Returns every ticket issued for an event, oldest first.
    async fn tickets_for_event(&self, event_id: &str) -> Result<Vec<Ticket>, StorageError>;
}

/// Errors raised by a persistence backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record with the same identifier is already stored.
    #[error("Duplicate {kind} id: {id}")]
    Duplicate { kind: &'static str, id: String },

    /// The backend could not serve the request.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

//--------------------------------------------------------------------------------------------------
// MOCKS
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
use mockall::*;

#[cfg(test)]
mock! {
    pub PersistenceGateway {}

    #[async_trait]
    impl PersistenceGateway for PersistenceGateway {
        async fn insert_event(&self, event: Event) -> Result<(), StorageError>;

        async fn find_event(&self, event_id: &str) -> Result<Option<Event>, StorageError>;

        async fn insert_ticket(&self, ticket: Ticket) -> Result<(), StorageError>;

        async fn tickets_for_event(&self, event_id: &str) -> Result<Vec<Ticket>, StorageError>;
    }
}
