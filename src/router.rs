//! HTTP route table.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health_handler, home_handler, info_handler, not_found_handler};
use crate::routes;
use crate::state::AppState;

/// Create the router: the three documented routes plus the 404 fallback.
///
/// The fallback also covers wrong methods on known paths, so every miss
/// gets the same JSON 404 shape.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(routes::HOME, get(home_handler))
        .route(routes::HEALTH, get(health_handler))
        .route(routes::API_INFO, get(info_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
