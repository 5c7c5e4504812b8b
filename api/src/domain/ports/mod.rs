//! Domain ports (traits)
//!
//! Port traits define interfaces that the application layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod id_generator;
pub mod repositories;

pub use id_generator::IdGenerator;
pub use repositories::MovieRepository;
