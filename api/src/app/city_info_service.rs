//! City info service
//!
//! Orchestrates the city repository and the mail port: existence checks,
//! validation, patch staging and deletion notices.

use std::sync::Arc;

use crate::domain::entities::{
    City, CityId, PatchDocument, PointOfInterest, PointOfInterestForCreation,
    PointOfInterestForUpdate, PointOfInterestId,
};
use crate::domain::ports::{CityInfoRepository, MailService};
use crate::error::AppError;

pub const DELETED_SUBJECT: &str = "Point of interest deleted.";

/// Service for cities and their points of interest
///
/// Generic so tests can plug in concrete stores; the server uses trait objects.
pub struct CityInfoService<R, M>
where
    R: CityInfoRepository + ?Sized,
    M: MailService + ?Sized,
{
    cities: Arc<R>,
    mail: Arc<M>,
}

impl<R, M> CityInfoService<R, M>
where
    R: CityInfoRepository + ?Sized,
    M: MailService + ?Sized,
{
    pub fn new(cities: Arc<R>, mail: Arc<M>) -> Self {
        Self { cities, mail }
    }

    /// List all cities, without points of interest
    pub async fn list_cities(&self) -> Result<Vec<City>, AppError> {
        Ok(self.cities.list_cities().await?)
    }

    /// Get a city, optionally with its points of interest
    pub async fn get_city(
        &self,
        id: &CityId,
        include_points_of_interest: bool,
    ) -> Result<City, AppError> {
        self.cities
            .get_city(id, include_points_of_interest)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))
    }

    /// List the points of interest of a city
    pub async fn list_points_of_interest(
        &self,
        city_id: &CityId,
    ) -> Result<Vec<PointOfInterest>, AppError> {
        self.cities
            .list_points_of_interest(city_id)
            .await?
            .ok_or_else(|| {
                tracing::info!(
                    "City with id {} wasn't found when accessing points of interest.",
                    city_id
                );
                AppError::NotFound(format!("City {} not found", city_id))
            })
    }

    /// Get a single point of interest
    pub async fn get_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<PointOfInterest, AppError> {
        self.ensure_city(city_id).await?;

        self.cities
            .get_point_of_interest(city_id, id)
            .await?
            .ok_or_else(|| point_not_found(city_id, id))
    }

    /// Validate and create a point of interest
    pub async fn create_point_of_interest(
        &self,
        city_id: &CityId,
        point: PointOfInterestForCreation,
    ) -> Result<PointOfInterest, AppError> {
        point.validate()?;
        self.ensure_city(city_id).await?;

        let created = self.cities.add_point_of_interest(city_id, &point).await?;
        tracing::debug!(city_id = %city_id, id = %created.id, "Point of interest created");

        Ok(created)
    }

    /// Validate and fully replace a point of interest
    pub async fn update_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
        update: PointOfInterestForUpdate,
    ) -> Result<(), AppError> {
        update.validate()?;
        self.ensure_city(city_id).await?;

        self.cities
            .update_point_of_interest(city_id, id, &update)
            .await?;
        Ok(())
    }

    /// Apply a patch document to a point of interest
    ///
    /// The patch is applied to a staged copy and validated before anything is
    /// written. Any failure leaves the stored point unchanged.
    pub async fn apply_partial_update(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
        patch: &PatchDocument,
    ) -> Result<(), AppError> {
        let current = self.get_point_of_interest(city_id, id).await?;

        let mut staged = current.to_update();
        patch.apply_to(&mut staged)?;
        staged.validate()?;

        self.cities
            .update_point_of_interest(city_id, id, &staged)
            .await?;
        Ok(())
    }

    /// Delete a point of interest and send a notice about it
    ///
    /// A failed notice is logged; the deletion still counts as done.
    pub async fn delete_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<PointOfInterest, AppError> {
        self.ensure_city(city_id).await?;

        let removed = self.cities.remove_point_of_interest(city_id, id).await?;

        let message = format!(
            "Point of interest {} with id {} was deleted.",
            removed.name, removed.id
        );
        if let Err(e) = self.mail.send(DELETED_SUBJECT, &message).await {
            tracing::error!(
                error = %e,
                city_id = %city_id,
                id = %removed.id,
                "Failed to send deletion notice"
            );
        }

        Ok(removed)
    }

    async fn ensure_city(&self, city_id: &CityId) -> Result<(), AppError> {
        if self.cities.city_exists(city_id).await? {
            Ok(())
        } else {
            tracing::info!("City with id {} wasn't found.", city_id);
            Err(AppError::NotFound(format!("City {} not found", city_id)))
        }
    }
}

fn point_not_found(city_id: &CityId, id: &PointOfInterestId) -> AppError {
    AppError::NotFound(format!(
        "Point of interest {} not found in city {}",
        id, city_id
    ))
}
