//! Adapters layer
//!
//! Implementations of port traits.

pub mod memory;

pub use memory::{
    next_sequential_id, InMemoryMovieRepository, SequentialIdGenerator, UuidIdGenerator,
};
