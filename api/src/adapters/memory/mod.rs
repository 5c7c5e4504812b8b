//! In-memory adapters
//!
//! The process-local movie store and the id generators it draws from.

pub mod id_generator;
pub mod movie_repo;
pub mod seed;

pub use id_generator::{SequentialIdGenerator, UuidIdGenerator};
pub use movie_repo::InMemoryMovieRepository;
pub use seed::next_sequential_id;
