//! Id generation port

use crate::domain::entities::MovieId;

/// Source of identifiers for newly created movies
///
/// Implementations need not guarantee uniqueness on their own; the
/// repository draws again when a candidate is already taken.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> MovieId;
}
