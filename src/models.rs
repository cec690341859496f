use serde::{Deserialize, Serialize};

/// Response type for the home endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
    pub timestamp: String,
    pub commit: String,
}

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub uptime: f64,
    pub timestamp: String,
}

/// Response type for the API info endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub endpoints: Vec<EndpointInfo>,
}

/// Individual endpoint entry in the API info response
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Response type for unmatched routes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NotFoundResponse {
    pub error: String,
    pub path: String,
    pub suggestion: String,
}
