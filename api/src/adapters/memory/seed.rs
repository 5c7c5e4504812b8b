//! Records the collection starts with

use crate::domain::entities::{Director, Movie, MovieId};

/// The two movies present at startup, ids `"1"` and `"2"`
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: MovieId::new("1"),
            isbn: "123456".to_string(),
            title: "Inception".to_string(),
            director: Some(Director::new("Christopher", "Nolan")),
        },
        Movie {
            id: MovieId::new("2"),
            isbn: "789012".to_string(),
            title: "Pulp Fiction".to_string(),
            director: Some(Director::new("Quentin", "Tarantino")),
        },
    ]
}

/// First counter value above every numeric seed id
///
/// A sequential generator starting here never hands out an id a seed
/// movie once held, even after that movie is deleted.
pub fn next_sequential_id() -> u64 {
    seed_movies()
        .iter()
        .filter_map(|m| m.id.as_str().parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
