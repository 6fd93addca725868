//! In-memory adapter for CityInfoRepository

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{
    City, CityId, PointOfInterest, PointOfInterestForCreation, PointOfInterestForUpdate,
    PointOfInterestId,
};
use crate::domain::ports::CityInfoRepository;
use crate::domain::seed::sample_cities;
use crate::error::DomainError;

/// Cities held in process memory
///
/// Every operation takes the lock once, so computing the next point id and
/// inserting the point happen atomically with respect to other requests.
/// Concurrent full updates of the same point are still last-writer-wins.
pub struct InMemoryCityInfoRepository {
    cities: RwLock<Vec<City>>,
}

impl InMemoryCityInfoRepository {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities: RwLock::new(cities),
        }
    }

    /// Repository pre-populated with the sample dataset
    pub fn seeded() -> Self {
        Self::new(sample_cities())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<City>>, DomainError> {
        self.cities
            .read()
            .map_err(|_| DomainError::Internal("city store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<City>>, DomainError> {
        self.cities
            .write()
            .map_err(|_| DomainError::Internal("city store lock poisoned".to_string()))
    }
}

impl Default for InMemoryCityInfoRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

fn city_not_found(id: &CityId) -> DomainError {
    DomainError::NotFound(format!("City {} not found", id))
}

fn point_not_found(city_id: &CityId, id: &PointOfInterestId) -> DomainError {
    DomainError::NotFound(format!(
        "Point of interest {} not found in city {}",
        id, city_id
    ))
}

#[async_trait]
impl CityInfoRepository for InMemoryCityInfoRepository {
    async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        let cities = self.read()?;
        let mut result: Vec<City> = cities.iter().map(City::without_points_of_interest).collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn get_city(
        &self,
        id: &CityId,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, DomainError> {
        let cities = self.read()?;
        Ok(cities.iter().find(|c| c.id == *id).map(|c| {
            if include_points_of_interest {
                c.clone()
            } else {
                c.without_points_of_interest()
            }
        }))
    }

    async fn city_exists(&self, id: &CityId) -> Result<bool, DomainError> {
        let cities = self.read()?;
        Ok(cities.iter().any(|c| c.id == *id))
    }

    async fn list_points_of_interest(
        &self,
        city_id: &CityId,
    ) -> Result<Option<Vec<PointOfInterest>>, DomainError> {
        let cities = self.read()?;
        Ok(cities
            .iter()
            .find(|c| c.id == *city_id)
            .map(|c| c.points_of_interest.clone()))
    }

    async fn get_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<Option<PointOfInterest>, DomainError> {
        let cities = self.read()?;
        Ok(cities
            .iter()
            .find(|c| c.id == *city_id)
            .and_then(|c| c.points_of_interest.iter().find(|p| p.id == *id))
            .cloned())
    }

    async fn add_point_of_interest(
        &self,
        city_id: &CityId,
        point: &PointOfInterestForCreation,
    ) -> Result<PointOfInterest, DomainError> {
        let mut cities = self.write()?;

        let max_id = cities
            .iter()
            .flat_map(|c| c.points_of_interest.iter().map(|p| p.id))
            .max();

        let city = cities
            .iter_mut()
            .find(|c| c.id == *city_id)
            .ok_or_else(|| city_not_found(city_id))?;

        let created = PointOfInterest {
            id: PointOfInterestId::next_after(max_id)?,
            city_id: *city_id,
            name: point.name.clone(),
            description: point.description.clone(),
        };
        city.points_of_interest.push(created.clone());

        Ok(created)
    }

    async fn update_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
        update: &PointOfInterestForUpdate,
    ) -> Result<(), DomainError> {
        let mut cities = self.write()?;

        let city = cities
            .iter_mut()
            .find(|c| c.id == *city_id)
            .ok_or_else(|| city_not_found(city_id))?;
        let point = city
            .points_of_interest
            .iter_mut()
            .find(|p| p.id == *id)
            .ok_or_else(|| point_not_found(city_id, id))?;

        point.apply_update(update);
        Ok(())
    }

    async fn remove_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<PointOfInterest, DomainError> {
        let mut cities = self.write()?;

        let city = cities
            .iter_mut()
            .find(|c| c.id == *city_id)
            .ok_or_else(|| city_not_found(city_id))?;
        let index = city
            .points_of_interest
            .iter()
            .position(|p| p.id == *id)
            .ok_or_else(|| point_not_found(city_id, id))?;

        Ok(city.points_of_interest.remove(index))
    }
}
