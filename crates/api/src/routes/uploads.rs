//! Route definitions for the `/uploads` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::uploads;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the file size limit.
const MULTIPART_SLACK_BYTES: usize = 64 * 1024;

/// Routes mounted at `/uploads`.
///
/// ```text
/// POST /    -> upload_photo (multipart `file`)
/// ```
pub fn router(max_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/", post(uploads::upload_photo))
        .layer(DefaultBodyLimit::max(max_bytes + MULTIPART_SLACK_BYTES))
}
