//! Movies API Server
//!
//! An in-memory CRUD service for movies and their directors.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    next_sequential_id, InMemoryMovieRepository, SequentialIdGenerator, UuidIdGenerator,
};
use app::MovieService;
use config::{Config, IdStrategy};
use domain::ports::IdGenerator;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub movie_service: Arc<MovieService<InMemoryMovieRepository>>,
}

impl AppState {
    pub fn new(movies: InMemoryMovieRepository) -> Self {
        Self {
            movie_service: Arc::new(MovieService::new(Arc::new(movies))),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET / answers with a bare JSON string
async fn root() -> Json<&'static str> {
    Json("Movies API is running")
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route(
            "/movie",
            get(handlers::list_movies).post(handlers::create_movie),
        )
        .route(
            "/movie/:id",
            get(handlers::get_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Store wired the way `config` asks for
///
/// A seeded store counts on from past the seed ids, so deleting a seed
/// movie never frees its id for reuse.
fn movie_repository(config: &Config) -> InMemoryMovieRepository {
    let first_id = if config.seed_movies {
        next_sequential_id()
    } else {
        1
    };

    let ids: Arc<dyn IdGenerator> = match config.id_strategy {
        IdStrategy::Sequential => Arc::new(SequentialIdGenerator::starting_at(first_id)),
        IdStrategy::Uuid => Arc::new(UuidIdGenerator),
    };

    if config.seed_movies {
        InMemoryMovieRepository::seeded(ids)
    } else {
        InMemoryMovieRepository::new(ids)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,movies_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Movies API...");

    // Load configuration
    let config = Config::from_env();

    let state = AppState::new(movie_repository(&config));
    let app = build_router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(
        id_strategy = ?config.id_strategy,
        seeded = config.seed_movies,
        "Listening on {}",
        addr
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
