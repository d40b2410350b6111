/// Records and request context.
pub mod models;

/// Event and ticket services and the persistence seam beneath them.
pub mod services;
