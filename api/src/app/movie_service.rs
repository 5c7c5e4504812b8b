//! Movie service
//!
//! The five collection use cases: list, get, create, update, delete.

use std::sync::Arc;

use crate::domain::entities::{Movie, MovieId, NewMovie};
use crate::domain::ports::MovieRepository;
use crate::error::{AppError, DomainError};

/// Outcome of a successful delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedMovie {
    pub deleted: Movie,
    /// The collection as it stood right after the removal
    pub remaining: Vec<Movie>,
}

/// Service for managing the movie collection
pub struct MovieService<MR>
where
    MR: MovieRepository,
{
    movies: Arc<MR>,
}

impl<MR> MovieService<MR>
where
    MR: MovieRepository,
{
    pub fn new(movies: Arc<MR>) -> Self {
        Self { movies }
    }

    /// All movies in collection order
    pub async fn list(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.movies.list().await?)
    }

    /// Find a movie by ID
    pub async fn get(&self, id: &MovieId) -> Result<Movie, AppError> {
        self.movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Add a movie under a newly assigned id
    pub async fn create(&self, new_movie: &NewMovie) -> Result<Movie, AppError> {
        let movie = self.movies.create(new_movie).await?;
        tracing::info!(movie_id = %movie.id, title = %movie.title, "Created movie");
        Ok(movie)
    }

    /// Replace all client fields of an existing movie
    ///
    /// The id always comes from `id`; the movie keeps its place in the list.
    pub async fn update(&self, id: &MovieId, new_movie: &NewMovie) -> Result<Movie, AppError> {
        let movie = self
            .movies
            .replace(id, new_movie)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(movie_id = %movie.id, title = %movie.title, "Updated movie");
        Ok(movie)
    }

    /// Remove a movie, returning it with the remaining collection
    pub async fn delete(&self, id: &MovieId) -> Result<DeletedMovie, AppError> {
        let (deleted, remaining) = self
            .movies
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            movie_id = %deleted.id,
            remaining = remaining.len(),
            "Deleted movie"
        );
        Ok(DeletedMovie { deleted, remaining })
    }
}

fn not_found(id: &MovieId) -> AppError {
    tracing::debug!(movie_id = %id, "Movie not found");
    AppError::Domain(DomainError::NotFound(format!("Movie {} not found", id)))
}
