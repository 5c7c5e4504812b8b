//! Movie domain entity
//!
//! A movie record as held in the collection. The director is embedded by
//! value and has no identity of its own.

use serde::{Deserialize, Serialize};

/// Unique identifier for a movie
///
/// Assigned by the store on create and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MovieId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MovieId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The director of a movie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Director {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

impl Director {
    pub fn new(firstname: impl Into<String>, lastname: impl Into<String>) -> Self {
        Self {
            firstname: firstname.into(),
            lastname: lastname.into(),
        }
    }
}

/// A movie in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub isbn: String,
    pub title: String,
    /// Serialized as `null` when absent
    pub director: Option<Director>,
}

impl Movie {
    /// Build a stored movie from client-supplied fields and an assigned id
    pub fn from_new(id: MovieId, new_movie: &NewMovie) -> Self {
        Self {
            id,
            isbn: new_movie.isbn.clone(),
            title: new_movie.title.clone(),
            director: new_movie.director.clone(),
        }
    }
}

/// Client-supplied fields of a movie, used by create and update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMovie {
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}
