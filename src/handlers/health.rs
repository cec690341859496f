use crate::handlers::rfc3339_now;
use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};

/// GET /health handler - Health check endpoint
///
/// There is no backing store to probe, so a reachable process is a healthy
/// process. Always returns 200 with the current uptime.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    tracing::debug!("Health check");
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime: state.uptime_secs(),
        timestamp: rfc3339_now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config {
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
            app_version: "1.0.0".to_string(),
            environment: "development".to_string(),
            commit: "local".to_string(),
        };
        Router::new()
            .route(crate::routes::HEALTH, get(health_handler))
            .with_state(AppState::new(config))
    }

    async fn get_health(app: Router) -> HealthResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = get_health(test_app()).await;
        assert_eq!(response.status, "healthy");
        assert!(response.uptime >= 0.0);
        assert!(chrono::DateTime::parse_from_rfc3339(&response.timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_uptime_non_decreasing() {
        let app = test_app();

        let first = get_health(app.clone()).await;
        let second = get_health(app).await;

        assert!(second.uptime >= first.uptime);
    }
}
