//! Point of interest handlers
//!
//! CRUD endpoints for the points of interest nested under a city.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::{
    CityId, PatchDocument, PointOfInterest, PointOfInterestForCreation, PointOfInterestForUpdate,
    PointOfInterestId,
};
use crate::error::AppError;
use crate::negotiation::{Negotiated, Representation};
use crate::AppState;

/// Response body for a point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointOfInterestDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

impl From<PointOfInterest> for PointOfInterestDto {
    fn from(point: PointOfInterest) -> Self {
        Self {
            id: point.id.0,
            name: point.name,
            description: point.description,
        }
    }
}

/// Request body for creating a point of interest
///
/// Fields are optional here so a missing name is reported as a validation
/// error rather than a parse error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PointOfInterestForCreationDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<PointOfInterestForCreationDto> for PointOfInterestForCreation {
    fn from(dto: PointOfInterestForCreationDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
        }
    }
}

/// Request body for replacing a point of interest
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PointOfInterestForUpdateDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<PointOfInterestForUpdateDto> for PointOfInterestForUpdate {
    fn from(dto: PointOfInterestForUpdateDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            description: dto.description,
        }
    }
}

/// GET /cities/:city_id/pointsofinterest
#[utoipa::path(
    get,
    path = "/cities/{city_id}/pointsofinterest",
    tag = "points of interest",
    params(("city_id" = i32, Path, description = "City id")),
    responses(
        (status = 200, description = "Points of interest of the city", body = [PointOfInterestDto]),
        (status = 404, description = "No such city")
    )
)]
pub async fn list_points_of_interest(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    representation: Representation,
) -> Result<Negotiated<PointOfInterestDto>, AppError> {
    let Path(city_id) = path?;

    let points = state
        .city_service
        .list_points_of_interest(&CityId(city_id))
        .await?;

    Ok(Negotiated::many(
        representation,
        "pointsOfInterest",
        "pointOfInterest",
        points.into_iter().map(Into::into).collect(),
    ))
}

/// GET /cities/:city_id/pointsofinterest/:id
#[utoipa::path(
    get,
    path = "/cities/{city_id}/pointsofinterest/{id}",
    tag = "points of interest",
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("id" = i32, Path, description = "Point of interest id")
    ),
    responses(
        (status = 200, description = "The point of interest", body = PointOfInterestDto),
        (status = 404, description = "No such city or point of interest")
    )
)]
pub async fn get_point_of_interest(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    representation: Representation,
) -> Result<Negotiated<PointOfInterestDto>, AppError> {
    let Path((city_id, id)) = path?;

    let point = state
        .city_service
        .get_point_of_interest(&CityId(city_id), &PointOfInterestId(id))
        .await?;

    Ok(Negotiated::one(representation, "pointOfInterest", point.into()))
}

/// POST /cities/:city_id/pointsofinterest
///
/// Returns 201 with a Location header pointing at the new resource.
#[utoipa::path(
    post,
    path = "/cities/{city_id}/pointsofinterest",
    tag = "points of interest",
    params(("city_id" = i32, Path, description = "City id")),
    request_body = PointOfInterestForCreationDto,
    responses(
        (status = 201, description = "Created, Location names the new resource", body = PointOfInterestDto),
        (status = 400, description = "Malformed or invalid body"),
        (status = 404, description = "No such city")
    )
)]
pub async fn create_point_of_interest(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    representation: Representation,
    body: Result<Json<PointOfInterestForCreationDto>, JsonRejection>,
) -> Result<
    (
        StatusCode,
        [(header::HeaderName, String); 1],
        Negotiated<PointOfInterestDto>,
    ),
    AppError,
> {
    let Path(city_id) = path?;
    let Json(request) = body?;

    let created = state
        .city_service
        .create_point_of_interest(&CityId(city_id), request.into())
        .await?;

    let location = format!("/cities/{}/pointsofinterest/{}", city_id, created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Negotiated::one(representation, "pointOfInterest", created.into()),
    ))
}

/// PUT /cities/:city_id/pointsofinterest/:id
#[utoipa::path(
    put,
    path = "/cities/{city_id}/pointsofinterest/{id}",
    tag = "points of interest",
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("id" = i32, Path, description = "Point of interest id")
    ),
    request_body = PointOfInterestForUpdateDto,
    responses(
        (status = 204, description = "Replaced"),
        (status = 400, description = "Malformed or invalid body"),
        (status = 404, description = "No such city or point of interest")
    )
)]
pub async fn update_point_of_interest(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    body: Result<Json<PointOfInterestForUpdateDto>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path((city_id, id)) = path?;
    let Json(request) = body?;

    state
        .city_service
        .update_point_of_interest(&CityId(city_id), &PointOfInterestId(id), request.into())
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /cities/:city_id/pointsofinterest/:id
///
/// Body is an ordered list of `{op, path, value}` operations.
#[utoipa::path(
    patch,
    path = "/cities/{city_id}/pointsofinterest/{id}",
    tag = "points of interest",
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("id" = i32, Path, description = "Point of interest id")
    ),
    request_body(
        content = serde_json::Value,
        description = "JSON Patch operations on /name and /description"
    ),
    responses(
        (status = 204, description = "Patched"),
        (status = 400, description = "Malformed patch or invalid result"),
        (status = 404, description = "No such city or point of interest")
    )
)]
pub async fn partially_update_point_of_interest(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    body: Result<Json<PatchDocument>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path((city_id, id)) = path?;
    let Json(patch) = body?;

    state
        .city_service
        .apply_partial_update(&CityId(city_id), &PointOfInterestId(id), &patch)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /cities/:city_id/pointsofinterest/:id
#[utoipa::path(
    delete,
    path = "/cities/{city_id}/pointsofinterest/{id}",
    tag = "points of interest",
    params(
        ("city_id" = i32, Path, description = "City id"),
        ("id" = i32, Path, description = "Point of interest id")
    ),
    responses(
        (status = 204, description = "Deleted, a notice is mailed"),
        (status = 404, description = "No such city or point of interest")
    )
)]
pub async fn delete_point_of_interest(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path((city_id, id)) = path?;

    state
        .city_service
        .delete_point_of_interest(&CityId(city_id), &PointOfInterestId(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
