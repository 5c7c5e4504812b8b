//! Repository port traits
//!
//! These traits define the interface for movie storage.
//! Implementations are provided by adapters (e.g., the in-memory store).

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieId, NewMovie};
use crate::error::DomainError;

/// Repository for Movie entities
///
/// Every method runs as a single critical section against the collection.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// List all movies in collection order
    async fn list(&self) -> Result<Vec<Movie>, DomainError>;

    /// Find a movie by ID
    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, DomainError>;

    /// Store a new movie under a freshly generated, unused id
    async fn create(&self, movie: &NewMovie) -> Result<Movie, DomainError>;

    /// Replace every field of an existing movie, keeping its id and position
    ///
    /// Returns `None` when no movie has this id.
    async fn replace(&self, id: &MovieId, movie: &NewMovie)
        -> Result<Option<Movie>, DomainError>;

    /// Remove a movie
    ///
    /// Returns the removed movie together with the remaining collection,
    /// or `None` when no movie has this id.
    async fn delete(&self, id: &MovieId) -> Result<Option<(Movie, Vec<Movie>)>, DomainError>;
}
