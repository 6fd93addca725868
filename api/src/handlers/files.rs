//! File handlers
//!
//! Download of the sample document and PDF upload.

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;

/// Multipart field that carries the uploaded document
pub const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
}

/// GET /files/:file_id
#[utoipa::path(
    get,
    path = "/files/{file_id}",
    tag = "files",
    params(("file_id" = String, Path, description = "File id")),
    responses(
        (status = 200, description = "The document as an attachment"),
        (status = 404, description = "No such file")
    )
)]
pub async fn get_file(
    State(state): State<AppState>,
    Path(file_id): Path<String>,
) -> Result<Response, AppError> {
    let file = state.file_service.get_file(&file_id).await?;

    let disposition = format!("attachment; filename=\"{}\"", file.file_name);

    Ok((
        [
            (header::CONTENT_TYPE, file.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}

/// POST /files
///
/// Accepts a multipart form with a single `file` field holding a PDF.
#[utoipa::path(
    post,
    path = "/files",
    tag = "files",
    request_body(
        content = String,
        description = "Multipart form with a `file` field holding a PDF",
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Stored under a generated name"),
        (status = 400, description = "Missing, empty, oversized or non-PDF file")
    )
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        state
            .file_service
            .store_upload(content_type.as_deref(), &bytes)
            .await?;

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully!",
        }));
    }

    Err(AppError::BadRequest(format!(
        "Expected a multipart field named '{}'.",
        UPLOAD_FIELD
    )))
}
