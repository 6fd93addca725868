//! City handlers
//!
//! Read-only endpoints for cities.

use axum::extract::{
    rejection::{PathRejection, QueryRejection},
    Path, Query, State,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::points_of_interest::PointOfInterestDto;
use crate::domain::entities::{City, CityId};
use crate::error::AppError;
use crate::negotiation::{Negotiated, Representation};
use crate::AppState;

/// Query parameters for fetching a city
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetCityQuery {
    /// Embed the city's points of interest
    #[serde(
        default,
        rename = "includePointsOfInterest",
        alias = "include_points_of_interest"
    )]
    pub include_points_of_interest: bool,
}

/// City without its points of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityWithoutPointsOfInterestDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// City with its points of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub number_of_points_of_interest: usize,
    pub points_of_interest: Vec<PointOfInterestDto>,
}

impl From<City> for CityWithoutPointsOfInterestDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id.0,
            name: city.name,
            description: city.description,
        }
    }
}

impl From<City> for CityDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id.0,
            number_of_points_of_interest: city.number_of_points_of_interest(),
            name: city.name,
            description: city.description,
            points_of_interest: city
                .points_of_interest
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

/// Either city shape, picked by `includePointsOfInterest`
#[derive(Debug, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CityResponse {
    WithPointsOfInterest(CityDto),
    WithoutPointsOfInterest(CityWithoutPointsOfInterestDto),
}

/// GET /cities
#[utoipa::path(
    get,
    path = "/cities",
    tag = "cities",
    responses(
        (status = 200, description = "All cities, ordered by name", body = [CityWithoutPointsOfInterestDto]),
        (status = 406, description = "Neither JSON nor XML is acceptable")
    )
)]
pub async fn list_cities(
    State(state): State<AppState>,
    representation: Representation,
) -> Result<Negotiated<CityWithoutPointsOfInterestDto>, AppError> {
    let cities = state.city_service.list_cities().await?;

    Ok(Negotiated::many(
        representation,
        "cities",
        "city",
        cities.into_iter().map(Into::into).collect(),
    ))
}

/// GET /cities/:city_id?includePointsOfInterest=bool
#[utoipa::path(
    get,
    path = "/cities/{city_id}",
    tag = "cities",
    params(("city_id" = i32, Path, description = "City id"), GetCityQuery),
    responses(
        (status = 200, description = "The city, with points of interest when asked", body = CityResponse),
        (status = 400, description = "Malformed id or query"),
        (status = 404, description = "No such city")
    )
)]
pub async fn get_city(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<GetCityQuery>, QueryRejection>,
    representation: Representation,
) -> Result<Negotiated<CityResponse>, AppError> {
    let Path(id) = path?;
    let Query(query) = query?;

    let city = state
        .city_service
        .get_city(&CityId(id), query.include_points_of_interest)
        .await?;

    let response = if query.include_points_of_interest {
        CityResponse::WithPointsOfInterest(city.into())
    } else {
        CityResponse::WithoutPointsOfInterest(city.into())
    };

    Ok(Negotiated::one(representation, "city", response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::sample_cities;

    #[test]
    fn query_flag_defaults_to_false() {
        let query: GetCityQuery = serde_json::from_str("{}").unwrap();
        assert!(!query.include_points_of_interest);
    }

    #[test]
    fn city_dto_uses_camel_case_and_counts_points() {
        let nyc = sample_cities().remove(0);
        let json = serde_json::to_value(CityDto::from(nyc)).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["numberOfPointsOfInterest"], 2);
        assert_eq!(json["pointsOfInterest"][0]["name"], "Central Park");
    }

    #[test]
    fn city_without_points_has_no_collection() {
        let paris = sample_cities().remove(2);
        let json = serde_json::to_value(CityWithoutPointsOfInterestDto::from(paris)).unwrap();

        assert_eq!(json["name"], "Paris");
        assert!(json.get("pointsOfInterest").is_none());
        assert!(json.get("numberOfPointsOfInterest").is_none());
    }

    #[test]
    fn untagged_response_serializes_inner_shape() {
        let antwerp = sample_cities().remove(1);
        let json = serde_json::to_value(CityResponse::WithoutPointsOfInterest(antwerp.into()))
            .unwrap();
        assert_eq!(json["name"], "Antwerp");
    }
}
