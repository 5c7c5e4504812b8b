//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for movies and directors
//! - `ports`: Trait definitions for storage and id generation

pub mod entities;
pub mod ports;
