//! SeaORM adapter for CityInfoRepository

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::domain::entities::{
    City, CityId, PointOfInterest, PointOfInterestForCreation, PointOfInterestForUpdate,
    PointOfInterestId,
};
use crate::domain::ports::CityInfoRepository;
use crate::entity::{cities, points_of_interest};
use crate::error::DomainError;

/// SeaORM implementation of CityInfoRepository
///
/// The next point id is read and the row inserted in two statements without
/// a transaction. Two concurrent creates can compute the same id; the
/// second insert then fails on the primary key and surfaces as a database
/// error.
pub struct DatabaseCityInfoRepository {
    db: DatabaseConnection,
}

impl DatabaseCityInfoRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_point(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<Option<points_of_interest::Model>, DomainError> {
        points_of_interest::Entity::find()
            .filter(points_of_interest::Column::CityId.eq(city_id.0))
            .filter(points_of_interest::Column::Id.eq(id.0))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))
    }

    async fn points_for_city(&self, city_id: &CityId) -> Result<Vec<PointOfInterest>, DomainError> {
        let results = points_of_interest::Entity::find()
            .filter(points_of_interest::Column::CityId.eq(city_id.0))
            .order_by_asc(points_of_interest::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn max_point_id(&self) -> Result<Option<PointOfInterestId>, DomainError> {
        let result: Option<Option<i32>> = points_of_interest::Entity::find()
            .select_only()
            .column_as(Expr::col(points_of_interest::Column::Id).max(), "max_id")
            .into_tuple()
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.flatten().map(PointOfInterestId))
    }
}

fn point_not_found(city_id: &CityId, id: &PointOfInterestId) -> DomainError {
    DomainError::NotFound(format!(
        "Point of interest {} not found in city {}",
        id, city_id
    ))
}

#[async_trait]
impl CityInfoRepository for DatabaseCityInfoRepository {
    async fn list_cities(&self) -> Result<Vec<City>, DomainError> {
        let results = cities::Entity::find()
            .order_by_asc(cities::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn get_city(
        &self,
        id: &CityId,
        include_points_of_interest: bool,
    ) -> Result<Option<City>, DomainError> {
        let result = cities::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut city: City = model.into();
        if include_points_of_interest {
            city.points_of_interest = self.points_for_city(id).await?;
        }
        Ok(Some(city))
    }

    async fn city_exists(&self, id: &CityId) -> Result<bool, DomainError> {
        let count = cities::Entity::find_by_id(id.0)
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn list_points_of_interest(
        &self,
        city_id: &CityId,
    ) -> Result<Option<Vec<PointOfInterest>>, DomainError> {
        if !self.city_exists(city_id).await? {
            return Ok(None);
        }
        Ok(Some(self.points_for_city(city_id).await?))
    }

    async fn get_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<Option<PointOfInterest>, DomainError> {
        Ok(self.find_point(city_id, id).await?.map(|m| m.into()))
    }

    async fn add_point_of_interest(
        &self,
        city_id: &CityId,
        point: &PointOfInterestForCreation,
    ) -> Result<PointOfInterest, DomainError> {
        if !self.city_exists(city_id).await? {
            return Err(DomainError::NotFound(format!("City {} not found", city_id)));
        }

        let id = PointOfInterestId::next_after(self.max_point_id().await?)?;

        let model = points_of_interest::ActiveModel {
            id: Set(id.0),
            city_id: Set(city_id.0),
            name: Set(point.name.clone()),
            description: Set(point.description.clone()),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
        update: &PointOfInterestForUpdate,
    ) -> Result<(), DomainError> {
        let model = self
            .find_point(city_id, id)
            .await?
            .ok_or_else(|| point_not_found(city_id, id))?;

        let mut active: points_of_interest::ActiveModel = model.into();
        active.name = Set(update.name.clone());
        active.description = Set(update.description.clone());

        active
            .update(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }

    async fn remove_point_of_interest(
        &self,
        city_id: &CityId,
        id: &PointOfInterestId,
    ) -> Result<PointOfInterest, DomainError> {
        let model = self
            .find_point(city_id, id)
            .await?
            .ok_or_else(|| point_not_found(city_id, id))?;

        points_of_interest::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(model.into())
    }
}

/// Convert SeaORM model to domain entity (points left unloaded)
impl From<cities::Model> for City {
    fn from(model: cities::Model) -> Self {
        City {
            id: CityId(model.id),
            name: model.name,
            description: model.description,
            points_of_interest: Vec::new(),
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<points_of_interest::Model> for PointOfInterest {
    fn from(model: points_of_interest::Model) -> Self {
        PointOfInterest {
            id: PointOfInterestId(model.id),
            city_id: CityId(model.city_id),
            name: model.name,
            description: model.description,
        }
    }
}
