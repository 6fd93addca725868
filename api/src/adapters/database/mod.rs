//! Database adapters
//!
//! Implementations of repository traits using SeaORM (SQLite or PostgreSQL).

pub mod city_repo;
pub mod schema;

pub use city_repo::DatabaseCityInfoRepository;
pub use schema::{connect, ensure_schema};
