/// Request-scoped context passed explicitly to services.
pub mod context;

/// Event and ticket records.
pub mod types;
