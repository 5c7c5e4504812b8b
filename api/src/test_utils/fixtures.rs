//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{Director, Movie, MovieId, NewMovie};

/// Create a test director
pub fn test_director() -> Director {
    Director::new("Christopher", "Nolan")
}

/// Create a test movie with the given id
pub fn test_movie(id: &str) -> Movie {
    Movie {
        id: MovieId::new(id),
        isbn: format!("isbn-{}", id),
        title: format!("Test Movie {}", id),
        director: Some(test_director()),
    }
}

/// The create payload used by the delete-then-create walkthrough
pub fn dunkirk() -> NewMovie {
    NewMovie {
        isbn: "999".to_string(),
        title: "Dunkirk".to_string(),
        director: Some(test_director()),
    }
}
