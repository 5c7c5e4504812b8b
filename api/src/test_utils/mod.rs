//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Manual mocks keep the scripted behavior explicit: a test states exactly
//! which ids a generator hands out or which error a repository returns.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
