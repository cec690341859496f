//! Minimal demo HTTP service used to verify the deployment pipeline
//! end-to-end: three JSON endpoints plus a 404 fallback.
//!
//! The library exists so that both the service binary and the smoke-test
//! harness (`src/bin/smoke_test.rs`) can build the same router.

pub mod api_doc;
pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod routes;
pub mod state;

pub use config::Config;
pub use router::create_router;
pub use state::AppState;
