/// Launch dashboard service entry point
mod clients;
mod config;
mod controller;
mod domain;
mod errors;
mod filters;
mod handlers;
mod pagination;
mod routes;
mod services;
mod utils;

use crate::clients::LaunchClient;
use crate::config::{AppConfig, PAGE_SIZE};
use crate::controller::DashboardController;
use crate::handlers::AppState;
use crate::routes::build_router;
use crate::services::DashboardService;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    info!("Configuration loaded successfully");

    // Initialize launch client
    let client = LaunchClient::new(config.launches_api_url.clone(), config.http_timeout)?;
    info!("Launch source: {}", client.url());

    // Initialize dashboard and issue the single fetch
    let dashboard = Arc::new(DashboardService::new(
        DashboardController::new(PAGE_SIZE),
        Arc::new(client),
    ));
    dashboard.mount().await;

    let state = AppState { dashboard };

    // Build router
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("launch_dash listening on {}", config.bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
