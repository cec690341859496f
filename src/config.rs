use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub app_version: String,
    pub environment: String,
    pub commit: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let app_version = env::var("APP_VERSION")
            .unwrap_or_else(|_| "1.0.0".to_string());

        let environment = env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "development".to_string());

        // GITHUB_SHA is exported by the CI pipeline; local runs report "local"
        let commit = env::var("GITHUB_SHA")
            .unwrap_or_else(|_| "local".to_string());

        Ok(Config {
            service_port,
            service_host,
            app_version,
            environment,
            commit,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  App version: {}", self.app_version);
        tracing::info!("  Environment: {}", self.environment);
        tracing::info!("  Commit: {}", self.commit);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
