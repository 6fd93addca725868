//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::adapters::InMemoryCityInfoRepository;
use crate::domain::entities::{
    City, CityId, PointOfInterest, PointOfInterestForCreation, PointOfInterestId,
};

/// In-memory store holding the three sample cities
pub fn seeded_repository() -> InMemoryCityInfoRepository {
    InMemoryCityInfoRepository::seeded()
}

/// Creation input with the given fields
pub fn creation(name: &str, description: Option<&str>) -> PointOfInterestForCreation {
    PointOfInterestForCreation {
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}

/// Create a test point of interest with default values
pub fn test_point_of_interest(city_id: i32, id: i32) -> PointOfInterest {
    PointOfInterest {
        id: PointOfInterestId(id),
        city_id: CityId(city_id),
        name: format!("Point {}", id),
        description: Some("A place worth a visit.".to_string()),
    }
}

/// Create a test city with the given points of interest
pub fn test_city(id: i32, name: &str, points_of_interest: Vec<PointOfInterest>) -> City {
    City {
        id: CityId(id),
        name: name.to_string(),
        description: Some(format!("The city of {}.", name)),
        points_of_interest,
    }
}
