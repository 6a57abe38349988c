use axum::Json;
use axum::http::{StatusCode, Uri};
use axum::response::IntoResponse;

use crate::domain::Health;
use crate::error::{ErrorBody, NOT_FOUND_CODE};

/// `GET /api/health`
pub async fn health() -> Json<Health> {
    Json(Health { ok: true })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new(NOT_FOUND_CODE, format!("no route for {}", uri.path()))),
    )
}
