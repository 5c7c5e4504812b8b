//! Mock implementations of port traits

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::entities::{Movie, MovieId, NewMovie};
use crate::domain::ports::{IdGenerator, MovieRepository};
use crate::error::DomainError;

// ============================================================================
// Scripted Id Generator
// ============================================================================

/// Hands out a fixed sequence of ids, then repeats the fallback forever
pub struct FixedIdGenerator {
    queue: Mutex<VecDeque<String>>,
    fallback: String,
}

impl FixedIdGenerator {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: Mutex::new(ids.into_iter().map(Into::into).collect()),
            fallback: String::new(),
        }
    }

    /// Always returns the same id
    pub fn repeating(id: &str) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            fallback: id.to_string(),
        }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> MovieId {
        let next = self.queue.lock().unwrap().pop_front();
        MovieId(next.unwrap_or_else(|| self.fallback.clone()))
    }
}

// ============================================================================
// Failing Movie Repository
// ============================================================================

/// Repository whose every call fails with `DomainError::Internal`
pub struct FailingMovieRepository;

fn failure() -> DomainError {
    DomainError::Internal("movie store unavailable".to_string())
}

#[async_trait]
impl MovieRepository for FailingMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        Err(failure())
    }

    async fn find_by_id(&self, _id: &MovieId) -> Result<Option<Movie>, DomainError> {
        Err(failure())
    }

    async fn create(&self, _movie: &NewMovie) -> Result<Movie, DomainError> {
        Err(failure())
    }

    async fn replace(
        &self,
        _id: &MovieId,
        _movie: &NewMovie,
    ) -> Result<Option<Movie>, DomainError> {
        Err(failure())
    }

    async fn delete(&self, _id: &MovieId) -> Result<Option<(Movie, Vec<Movie>)>, DomainError> {
        Err(failure())
    }
}
