//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (in-memory, SeaORM).

use async_trait::async_trait;

use crate::domain::entities::{
    City, CityId, PointOfInterest, PointOfInterestForCreation, PointOfInterestForUpdate,
    PointOfInterestId,
};
use crate::error::DomainError;

/// Repository for cities and the points of interest they own
///
/// Missing entities are reported as `Ok(None)` or `DomainError::NotFound`,
/// never as storage failures.
#[async_trait]
pub trait CityInfoRepository: Send + Sync {
    /// List all cities ordered by name, without their points of interest
    async fn list_cities(&self) -> Result<Vec<City>, DomainError>;

    /// Find a city, loading its points of interest only when asked to
    async fn get_city(
        &self,
        id: &CityId,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, DomainError>;

    /// Check whether a city exists
    async fn city_exists(&self, id: &CityId) -> Result<bool, DomainError>;

    /// List a city's points of interest in insertion order, `None` if the city is missing
    async fn list_points_of_interest(
        &self,
        city_id: &CityId,
    ) -> Result<Option<Vec<PointOfInterest>>, DomainError>;

    /// Find a point of interest, `None` if either the city or the point is missing
    async fn get_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<Option<PointOfInterest>, DomainError>;

    /// Add a point of interest with id = global max + 1
    async fn add_point_of_interest(
        &self,
        city_id: &CityId,
        point: &PointOfInterestForCreation,
    ) -> Result<PointOfInterest, DomainError>;

    /// Replace a point's name and description
    async fn update_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
        update: &PointOfInterestForUpdate,
    ) -> Result<(), DomainError>;

    /// Remove a point of interest, returning what was removed
    async fn remove_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<PointOfInterest, DomainError>;
}
