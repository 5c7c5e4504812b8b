//! Movie handlers
//!
//! CRUD endpoints for the movie collection.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::{Director, Movie, MovieId, NewMovie};
use crate::error::AppError;
use crate::AppState;

/// Request body for creating or replacing a movie
///
/// Missing text fields decode as empty strings and a missing or `null`
/// director as absent. Any `id` in the body is ignored. Bodies go through
/// `decode_movie`, which only accepts JSON objects.
#[derive(Debug, Default, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub isbn: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: Option<Director>,
}

impl From<MovieRequest> for NewMovie {
    fn from(request: MovieRequest) -> Self {
        NewMovie {
            isbn: request.isbn,
            title: request.title,
            director: request.director,
        }
    }
}

/// Decode a create or update body into the movie's client fields
///
/// The derived decoder also accepts a JSON array as a struct, so anything
/// other than an object is rejected first.
fn decode_movie(body: Value) -> Result<NewMovie, AppError> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "Expected a JSON object describing a movie".to_string(),
        ));
    }

    let request: MovieRequest =
        serde_json::from_value(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
    Ok(request.into())
}

/// Response body for a delete
#[derive(Debug, Serialize)]
pub struct DeleteMovieResponse {
    pub deleted_movie: Movie,
    pub movies: Vec<Movie>,
}

/// GET /movie
///
/// List every movie in collection order.
pub async fn list_movies(State(state): State<AppState>) -> Result<Json<Vec<Movie>>, AppError> {
    let movies = state.movie_service.list().await?;
    Ok(Json(movies))
}

/// GET /movie/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let movie = state.movie_service.get(&MovieId(id)).await?;
    Ok(Json(movie))
}

/// POST /movie
///
/// Create a movie. The server assigns its id.
pub async fn create_movie(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let Json(body) = payload?;
    let new_movie = decode_movie(body)?;
    let movie = state.movie_service.create(&new_movie).await?;
    Ok(Json(movie))
}

/// PUT /movie/:id
///
/// Replace every field of an existing movie. The path id wins over any id
/// in the body.
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Movie>, AppError> {
    let Json(body) = payload?;
    let new_movie = decode_movie(body)?;
    let movie = state.movie_service.update(&MovieId(id), &new_movie).await?;
    Ok(Json(movie))
}

/// DELETE /movie/:id
///
/// Remove a movie and return it along with what is left.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteMovieResponse>, AppError> {
    let outcome = state.movie_service.delete(&MovieId(id)).await?;

    Ok(Json(DeleteMovieResponse {
        deleted_movie: outcome.deleted,
        movies: outcome.remaining,
    }))
}
