//! In-memory adapters
//!
//! Process-local implementation of the city repository. State resets on restart.

pub mod city_repo;

pub use city_repo::InMemoryCityInfoRepository;
