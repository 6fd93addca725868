//! Unified error types for the CityInfo API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `MailError`: Notification delivery errors
//! - `FileError`: File serving and upload storage errors
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    extract::{
        multipart::MultipartError,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body returned for every 500
pub const GENERIC_FAILURE_MESSAGE: &str = "A problem happened while handling your request.";

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Mail delivery errors
#[derive(Debug, Error)]
pub enum MailError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
}

/// File serving and upload errors
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },

    #[error("{0} must be set")]
    Missing(&'static str),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("File error: {0}")]
    File(#[from] FileError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not acceptable: {0}")]
    NotAcceptable(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

fn internal(kind: &str, msg: &str) -> (StatusCode, &'static str, Option<String>) {
    tracing::error!("{}: {}", kind, msg);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        GENERIC_FAILURE_MESSAGE,
        None,
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => internal("Database error", msg),
            AppError::Domain(DomainError::Internal(msg)) => internal("Internal error", msg),
            AppError::File(FileError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::File(FileError::Io(e)) => internal("File I/O error", &e.to_string()),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
            AppError::NotAcceptable(msg) => (
                StatusCode::NOT_ACCEPTABLE,
                "Not acceptable",
                Some(msg.clone()),
            ),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_details() {
        let response =
            AppError::Domain(DomainError::NotFound("City 9".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Not found");
        assert_eq!(body["details"], "City 9");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let response =
            AppError::Domain(DomainError::Validation("bad name".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let response = AppError::Domain(DomainError::Database(
            "connection refused at 10.0.0.3".to_string(),
        ))
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], GENERIC_FAILURE_MESSAGE);
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn io_error_hides_details() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "/srv/uploads");
        let response = AppError::File(FileError::Io(io)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert!(!body.to_string().contains("/srv/uploads"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        use axum::extract::FromRequest;

        let request = axum::http::Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"name\": "))
            .unwrap();
        let rejection = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        let response = AppError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_path_id_is_json_bad_request() {
        use axum::{extract::Path, routing::get, Router};
        use tower::ServiceExt;

        async fn by_id(id: Result<Path<i32>, PathRejection>) -> Result<String, AppError> {
            let Path(id) = id?;
            Ok(id.to_string())
        }

        let response = Router::new()
            .route("/items/:id", get(by_id))
            .oneshot(
                axum::http::Request::builder()
                    .uri("/items/abc")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Bad request");
        assert!(body["details"].as_str().unwrap().contains("abc"));
    }

    #[test]
    fn not_acceptable_maps_to_406() {
        let response = AppError::NotAcceptable("application/yaml".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }
}
