// Expose the modules
pub mod api;
pub mod config;
pub mod domain;

// Re-export key types for easier usage
pub use api::{Api, AppState};
pub use config::{Config, ConfigError};
pub use domain::models::context::{AdminSession, RequestContext};
pub use domain::models::types::{
    Event, EventSummary, NewEvent, NewRegistration, RegisteredTicket, Ticket,
};
pub use domain::services::event_service::{EventService, EventServiceImpl, registration_link};
pub use domain::services::id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
pub use domain::services::persistence::{InMemoryGateway, PersistenceGateway, StorageError};
pub use domain::services::ticket_service::{TicketService, TicketServiceImpl};
pub use domain::services::{ServiceError, ServiceResult};
