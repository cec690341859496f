use crate::handlers::rfc3339_now;
use crate::models::HomeResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};

/// Greeting shown on the home endpoint; proves the deployed build is live.
pub const HOME_MESSAGE: &str = "Hello! Automatically deployed with GitHub Actions!";

/// GET / handler - Home endpoint
///
/// Reports the deployed version, environment, and commit so a pipeline run
/// can be traced back from a live instance.
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Deployment information", body = HomeResponse)
    ),
    tag = "info"
)]
pub async fn home_handler(State(state): State<AppState>) -> Json<HomeResponse> {
    Json(HomeResponse {
        message: HOME_MESSAGE.to_string(),
        version: state.config.app_version.clone(),
        environment: state.config.environment.clone(),
        timestamp: rfc3339_now(),
        commit: state.config.commit.clone(),
    })
}
