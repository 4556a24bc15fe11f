//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use devflow_common::{AppConfig, AppError};
use devflow_service::{ServiceContextBuilder, StatusConfigService};
use devflow_store::{
    MemChangeLogRepository, MemStatusConfigurationRepository, MemStatusRepository,
};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware_with_config(
        router,
        &state.config().cors,
        state.config().app.env.is_production(),
    );
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create in-memory repositories
    let status_repo = Arc::new(MemStatusRepository::new());
    let status_config_repo = Arc::new(MemStatusConfigurationRepository::new());
    let change_log_repo = Arc::new(MemChangeLogRepository::new());

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .status_repo(status_repo)
        .status_config_repo(status_config_repo)
        .change_log_repo(change_log_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Seed the default status catalog up front so the first request
    // doesn't pay for it
    StatusConfigService::new(&service_context)
        .ensure_defaults()
        .await
        .map_err(|e| AppError::Config(e.to_string()))?;
    info!("Status catalog ready");

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
