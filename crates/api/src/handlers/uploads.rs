//! Photo upload endpoint.
//!
//! Files are written under the configured upload root as
//! `YYYY/MM/<random>.<ext>` and served back by the static `/uploads` service.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bellhop_core::upload::{sniff_image, ObjectKey};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Metadata of a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Value to store in `photo_url` / `photo_urls`.
    pub relative_url: String,
    pub file_name: String,
    pub size: usize,
    pub content_type: &'static str,
}

/// POST /api/v1/uploads
///
/// Accepts a multipart form with a required `file` field. Only JPEG, PNG and
/// WebP images are kept; the type is taken from the file contents, never from
/// the client-supplied name or header.
pub async fn upload_photo(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<UploadResponse>>)> {
    let mut data: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            data = Some(bytes.to_vec());
        }
    }

    let data = data.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;
    if data.is_empty() {
        return Err(AppError::BadRequest("Uploaded file is empty".into()));
    }
    if data.len() > state.config.upload_max_bytes {
        return Err(AppError::BadRequest(format!(
            "File exceeds the {} byte limit",
            state.config.upload_max_bytes
        )));
    }

    let kind = sniff_image(&data).ok_or_else(|| {
        AppError::BadRequest("Unsupported file type. Allowed: JPEG, PNG, WebP".into())
    })?;

    let key = ObjectKey::new(kind, chrono::Utc::now());
    let dir = state.config.upload_dir.join(&key.directory);
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    tokio::fs::write(dir.join(&key.file_name), &data)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    tracing::info!(
        hotel_id = auth.hotel_id,
        path = %key.relative_path(),
        size = data.len(),
        "Photo uploaded",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse {
                relative_url: key.public_url(),
                file_name: key.file_name,
                size: data.len(),
                content_type: kind.content_type(),
            },
        }),
    ))
}
