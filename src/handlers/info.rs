use crate::models::{EndpointInfo, InfoResponse};
use crate::routes;
use axum::Json;

pub const API_NAME: &str = "GitHub Actions Demo API";

// The info payload documents the API at a fixed version, independent of the
// APP_VERSION reported on the home endpoint.
const API_DOC_VERSION: &str = "1.0.0";

/// GET /api/info handler - API information endpoint
///
/// Returns the fixed list of documented routes, in table order. The 404
/// fallback is intentionally not listed.
#[utoipa::path(
    get,
    path = routes::API_INFO,
    responses(
        (status = 200, description = "API information", body = InfoResponse)
    ),
    tag = "info"
)]
pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: API_NAME.to_string(),
        version: API_DOC_VERSION.to_string(),
        endpoints: vec![
            EndpointInfo {
                path: routes::HOME.to_string(),
                method: "GET".to_string(),
                description: "Home page".to_string(),
            },
            EndpointInfo {
                path: routes::HEALTH.to_string(),
                method: "GET".to_string(),
                description: "Health check".to_string(),
            },
            EndpointInfo {
                path: routes::API_INFO.to_string(),
                method: "GET".to_string(),
                description: "API information".to_string(),
            },
        ],
    })
}
