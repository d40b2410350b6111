use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Source of opaque, collision-resistant identifiers for new records.
///
/// Injected into the services so storage keys never depend on a hard-coded generator.
pub trait IdGenerator: Send + Sync {
    /// Returns a fresh identifier. Must never return an empty string.
    fn next_id(&self) -> String;
}

/// Generates random UUID v4 identifiers in their 32-character simple form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic generator yielding `{prefix}1`, `{prefix}2`, ...
///
/// Useful in tests and fixtures where identifiers must be predictable.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_simple_and_unique() {
        let generator = UuidIdGenerator;
        let ids: HashSet<String> = (0..1_000).map(|_| generator.next_id()).collect();

        assert_eq!(ids.len(), 1_000);
        for id in &ids {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_sequential_ids() {
        let generator = SequentialIdGenerator::new("E");
        assert_eq!(generator.next_id(), "E1");
        assert_eq!(generator.next_id(), "E2");
        assert_eq!(generator.next_id(), "E3");
    }
}
