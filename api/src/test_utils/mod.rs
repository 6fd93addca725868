//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit and router tests.
//!
//! Manual mocks instead of mockall: the ports take `&str` parameters and the
//! mocks only need to record or fail.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
