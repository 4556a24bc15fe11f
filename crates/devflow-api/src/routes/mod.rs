//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{change_logs, health, statuses};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted outside /api/v1, bypassing API middleware concerns)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(change_log_routes())
        .merge(status_routes())
}

/// Change log routes
fn change_log_routes() -> Router<AppState> {
    Router::new()
        .route("/change-logs", post(change_logs::record_change))
        .route("/change-logs", get(change_logs::get_change_logs))
        .route(
            "/change-logs/entity/:entity_type/:entity_id",
            get(change_logs::get_entity_change_logs),
        )
        .route(
            "/change-logs/actor/:actor_id",
            get(change_logs::get_actor_change_logs),
        )
}

/// Status catalog and configuration routes
fn status_routes() -> Router<AppState> {
    Router::new()
        // Status CRUD
        .route("/statuses", get(statuses::list_statuses))
        .route("/statuses", post(statuses::create_status))
        .route("/statuses/:status_id", patch(statuses::update_status))
        .route("/statuses/:status_id", delete(statuses::delete_status))
        // Enablement table
        .route("/statuses/configurations", get(statuses::list_configurations))
        .route(
            "/statuses/:status_id/entity-types/:entity_type",
            put(statuses::set_enabled),
        )
        // Derived views per entity type
        .route("/statuses/entity/:entity_type", get(statuses::get_active_statuses))
        .route(
            "/statuses/entity/:entity_type/default",
            get(statuses::get_default_status),
        )
}
