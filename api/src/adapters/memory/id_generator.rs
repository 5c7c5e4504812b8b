//! Id generator adapters

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::entities::MovieId;
use crate::domain::ports::IdGenerator;

/// Monotonic counter rendered as decimal text ("1", "2", ...)
///
/// The counter never goes back, so an id is handed out at most once. Start
/// it past any preloaded ids with `starting_at`.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> MovieId {
        MovieId(self.next.fetch_add(1, Ordering::Relaxed).to_string())
    }
}

/// Random v4 UUIDs
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&self) -> MovieId {
        MovieId(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_counts_up_from_start() {
        let ids = SequentialIdGenerator::starting_at(3);
        assert_eq!(ids.next_id().as_str(), "3");
        assert_eq!(ids.next_id().as_str(), "4");
        assert_eq!(ids.next_id().as_str(), "5");
    }

    #[test]
    fn sequential_defaults_to_one() {
        let ids = SequentialIdGenerator::default();
        assert_eq!(ids.next_id().as_str(), "1");
    }

    #[test]
    fn uuid_ids_parse_and_differ() {
        let ids = UuidIdGenerator;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }
}
