//! Change log handlers
//!
//! Endpoints for recording and querying the audit trail.

use axum::{
    extract::{Path, State},
    Json,
};
use devflow_service::dto::{ChangeLogResponse, RecordChangeRequest};
use devflow_service::ChangeLogService;

use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Record a change-log entry
///
/// POST /change-logs
pub async fn record_change(
    State(state): State<AppState>,
    Json(request): Json<RecordChangeRequest>,
) -> ApiResult<Created<Json<ChangeLogResponse>>> {
    let service = ChangeLogService::new(state.service_context());
    let response = service.record(request).await?;
    Ok(Created(Json(response)))
}

/// Get all change-log entries, newest first
///
/// GET /change-logs
pub async fn get_change_logs(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ChangeLogResponse>>> {
    let service = ChangeLogService::new(state.service_context());
    let entries = service.get_all().await?;
    Ok(Json(entries))
}

/// Get change-log entries for one entity
///
/// GET /change-logs/entity/{entity_type}/{entity_id}
pub async fn get_entity_change_logs(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, String)>,
) -> ApiResult<Json<Vec<ChangeLogResponse>>> {
    let entity_type = entity_type
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown entity type"))?;
    let entity_id = entity_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid entity_id format"))?;

    let service = ChangeLogService::new(state.service_context());
    let entries = service.get_by_entity(entity_type, entity_id).await?;
    Ok(Json(entries))
}

/// Get change-log entries recorded by one actor
///
/// GET /change-logs/actor/{actor_id}
pub async fn get_actor_change_logs(
    State(state): State<AppState>,
    Path(actor_id): Path<String>,
) -> ApiResult<Json<Vec<ChangeLogResponse>>> {
    let actor_id = actor_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid actor_id format"))?;

    let service = ChangeLogService::new(state.service_context());
    let entries = service.get_by_actor(actor_id).await?;
    Ok(Json(entries))
}
