use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use actions_demo_api::config::Config;
use actions_demo_api::router::create_router;
use actions_demo_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("actions-demo-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let addr: SocketAddr = format!("{}:{}", config.service_host, config.service_port)
        .parse()
        .context("invalid listen address")?;

    let state = AppState::new(config);
    let router = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .await
        .context("server error")?;

    Ok(())
}
