//! OpenAPI document for the HTTP surface

use axum::Json;
use utoipa::OpenApi;

use crate::handlers::{cities, files, points_of_interest};

/// Where the document is served in development
pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        cities::list_cities,
        cities::get_city,
        points_of_interest::list_points_of_interest,
        points_of_interest::get_point_of_interest,
        points_of_interest::create_point_of_interest,
        points_of_interest::update_point_of_interest,
        points_of_interest::partially_update_point_of_interest,
        points_of_interest::delete_point_of_interest,
        files::get_file,
        files::upload_file,
    ),
    components(schemas(
        cities::CityWithoutPointsOfInterestDto,
        cities::CityDto,
        cities::CityResponse,
        points_of_interest::PointOfInterestDto,
        points_of_interest::PointOfInterestForCreationDto,
        points_of_interest::PointOfInterestForUpdateDto,
    )),
    tags(
        (name = "cities", description = "Cities, JSON or XML"),
        (name = "points of interest", description = "Points of interest nested under a city"),
        (name = "files", description = "Sample download and PDF upload")
    ),
    info(
        title = "CityInfo API",
        description = "Cities, their points of interest, and a small file surface"
    )
)]
pub struct ApiDoc;

/// GET /swagger/v1/swagger.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
