//! Domain entities
//!
//! Pure domain models with no HTTP or storage concerns.

pub mod movie;

pub use movie::{Director, Movie, MovieId, NewMovie};
