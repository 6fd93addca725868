//! SeaORM entities
//!
//! Table mappings for the database-backed store.

pub mod cities;
pub mod points_of_interest;
