//! Mail adapters
//!
//! Two interchangeable implementations of the mail port, picked at startup
//! from configuration.

pub mod cloud;
pub mod local;

pub use cloud::CloudMailService;
pub use local::LocalMailService;
