use crate::models::NotFoundResponse;
use axum::{Json, http::StatusCode, http::Uri};

/// Fallback handler for any unmatched path or method
///
/// Unmatched routes are not an error condition here but a designed response:
/// every request gets JSON back, including the ones that miss.
pub async fn not_found_handler(uri: Uri) -> (StatusCode, Json<NotFoundResponse>) {
    tracing::debug!("Unmatched route: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Endpoint not found".to_string(),
            path: uri.path().to_string(),
            suggestion: "Visit /api/info for available endpoints".to_string(),
        }),
    )
}
