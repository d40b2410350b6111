use thiserror::Error;

use self::persistence::StorageError;

/// Event creation and lookup.
pub mod event_service;

/// Identifier generation for new records.
pub mod id_generator;

/// Storage facade for events and tickets.
pub mod persistence;

/// Attendee registration.
pub mod ticket_service;

/// Input checks shared by the services.
pub mod validation;

/// Type alias for Result with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors returned by the event and ticket services.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input was missing or malformed. The message is safe to show to the caller.
    #[error("{0}")]
    Validation(String),

    /// The referenced record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The operation requires an admin session and none was supplied.
    #[error("Unauthorized")]
    Unauthorized,

    /// The persistence layer failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
