//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod database;
pub mod mail;
pub mod memory;

pub use database::DatabaseCityInfoRepository;
pub use mail::{CloudMailService, LocalMailService};
pub use memory::InMemoryCityInfoRepository;
