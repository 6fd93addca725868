//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod city_info_service;
pub mod file_service;

pub use city_info_service::{CityInfoService, DELETED_SUBJECT};
pub use file_service::FileService;
