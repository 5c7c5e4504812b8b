//! In-memory adapter for MovieRepository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::seed::seed_movies;
use crate::domain::entities::{Movie, MovieId, NewMovie};
use crate::domain::ports::{IdGenerator, MovieRepository};
use crate::error::DomainError;

/// Upper bound on draws from the id generator for a single create
const MAX_ID_ATTEMPTS: usize = 64;

/// Ordered, lock-guarded collection of movies held in process memory
pub struct InMemoryMovieRepository {
    movies: RwLock<Vec<Movie>>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryMovieRepository {
    /// Empty collection
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            movies: RwLock::new(Vec::new()),
            ids,
        }
    }

    /// Collection holding the startup seed records
    pub fn seeded(ids: Arc<dyn IdGenerator>) -> Self {
        Self::new(ids).with_movies(seed_movies())
    }

    /// Pre-populate with movies, appended in order
    ///
    /// Callers are responsible for the ids being distinct.
    pub fn with_movies(mut self, movies: impl IntoIterator<Item = Movie>) -> Self {
        self.movies.get_mut().extend(movies);
        self
    }

    /// Draw ids until one is not already held by a movie in `movies`
    fn unused_id(&self, movies: &[Movie]) -> Result<MovieId, DomainError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = self.ids.next_id();
            if candidate.as_str().is_empty() {
                continue;
            }
            if movies.iter().any(|m| m.id == candidate) {
                tracing::debug!(id = %candidate, "Generated movie id already in use");
                continue;
            }
            return Ok(candidate);
        }

        Err(DomainError::Internal(format!(
            "No unused movie id after {} attempts",
            MAX_ID_ATTEMPTS
        )))
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        Ok(self.movies.read().await.clone())
    }

    async fn find_by_id(&self, id: &MovieId) -> Result<Option<Movie>, DomainError> {
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| &m.id == id).cloned())
    }

    async fn create(&self, new_movie: &NewMovie) -> Result<Movie, DomainError> {
        let mut movies = self.movies.write().await;
        let id = self.unused_id(&movies)?;
        let movie = Movie::from_new(id, new_movie);
        movies.push(movie.clone());
        Ok(movie)
    }

    async fn replace(
        &self,
        id: &MovieId,
        new_movie: &NewMovie,
    ) -> Result<Option<Movie>, DomainError> {
        let mut movies = self.movies.write().await;
        let Some(slot) = movies.iter_mut().find(|m| &m.id == id) else {
            return Ok(None);
        };

        *slot = Movie::from_new(id.clone(), new_movie);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &MovieId) -> Result<Option<(Movie, Vec<Movie>)>, DomainError> {
        let mut movies = self.movies.write().await;
        let Some(index) = movies.iter().position(|m| &m.id == id) else {
            return Ok(None);
        };

        let removed = movies.remove(index);
        Ok(Some((removed, movies.clone())))
    }
}
