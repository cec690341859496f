use utoipa::OpenApi;

use crate::handlers;
use crate::models::{EndpointInfo, HealthResponse, HomeResponse, InfoResponse, NotFoundResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "actions-demo-api",
        version = "1.0.0",
        description = "A minimal JSON HTTP service for verifying a deployment pipeline end-to-end"
    ),
    paths(
        handlers::home::home_handler,
        handlers::health::health_handler,
        handlers::info::info_handler
    ),
    components(
        schemas(
            HomeResponse,
            HealthResponse,
            InfoResponse,
            EndpointInfo,
            NotFoundResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "info", description = "Deployment and API information")
    )
)]
pub struct ApiDoc;
