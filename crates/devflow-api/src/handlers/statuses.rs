//! Status handlers
//!
//! Endpoints for the status catalog and per-entity-type enablement.

use axum::{
    extract::{Path, State},
    Json,
};
use devflow_service::dto::{
    CreateStatusRequest, SetEnabledRequest, StatusConfigurationResponse, StatusResponse,
    UpdateStatusRequest,
};
use devflow_service::{ServiceError, StatusConfigService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all statuses
///
/// GET /statuses
pub async fn list_statuses(State(state): State<AppState>) -> ApiResult<Json<Vec<StatusResponse>>> {
    let service = StatusConfigService::new(state.service_context());
    let statuses = service.list_statuses().await?;
    Ok(Json(statuses))
}

/// Create a new status
///
/// POST /statuses
pub async fn create_status(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateStatusRequest>,
) -> ApiResult<Created<Json<StatusResponse>>> {
    let service = StatusConfigService::new(state.service_context());
    let response = service.create_status(request).await?;
    Ok(Created(Json(response)))
}

/// Update a status
///
/// PATCH /statuses/{status_id}
pub async fn update_status(
    State(state): State<AppState>,
    Path(status_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateStatusRequest>,
) -> ApiResult<Json<StatusResponse>> {
    let status_id = status_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid status_id format"))?;

    let service = StatusConfigService::new(state.service_context());
    let response = service.update_status(status_id, request).await?;
    Ok(Json(response))
}

/// Delete a status and its enablement rows
///
/// DELETE /statuses/{status_id}
pub async fn delete_status(
    State(state): State<AppState>,
    Path(status_id): Path<String>,
) -> ApiResult<NoContent> {
    let status_id: uuid::Uuid = status_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid status_id format"))?;

    let service = StatusConfigService::new(state.service_context());
    if !service.delete_status(status_id).await? {
        return Err(ApiError::Service(ServiceError::not_found(
            "Status",
            status_id.to_string(),
        )));
    }
    Ok(NoContent)
}

/// List all status configurations
///
/// GET /statuses/configurations
pub async fn list_configurations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StatusConfigurationResponse>>> {
    let service = StatusConfigService::new(state.service_context());
    let configs = service.list_configurations().await?;
    Ok(Json(configs))
}

/// Statuses enabled for an entity type, in display order
///
/// GET /statuses/entity/{entity_type}
pub async fn get_active_statuses(
    State(state): State<AppState>,
    Path(entity_type): Path<String>,
) -> ApiResult<Json<Vec<StatusResponse>>> {
    let entity_type = entity_type
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown entity type"))?;

    let service = StatusConfigService::new(state.service_context());
    let statuses = service.active_statuses_for(entity_type).await?;
    Ok(Json(statuses))
}

/// Default status for an entity type
///
/// GET /statuses/entity/{entity_type}/default
pub async fn get_default_status(
    State(state): State<AppState>,
    Path(entity_type): Path<String>,
) -> ApiResult<Json<StatusResponse>> {
    let entity_type: devflow_core::StatusEntityType = entity_type
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown entity type"))?;

    let service = StatusConfigService::new(state.service_context());
    let response = service
        .default_status_for(entity_type)
        .await?
        .ok_or_else(|| {
            ApiError::Service(ServiceError::not_found(
                "Default status",
                entity_type.to_string(),
            ))
        })?;
    Ok(Json(response))
}

/// Enable or disable a status for an entity type
///
/// PUT /statuses/{status_id}/entity-types/{entity_type}
pub async fn set_enabled(
    State(state): State<AppState>,
    Path((status_id, entity_type)): Path<(String, String)>,
    Json(request): Json<SetEnabledRequest>,
) -> ApiResult<Json<StatusConfigurationResponse>> {
    let status_id = status_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid status_id format"))?;
    let entity_type = entity_type
        .parse()
        .map_err(|_| ApiError::invalid_path("Unknown entity type"))?;

    let service = StatusConfigService::new(state.service_context());
    let response = service.set_enabled(status_id, entity_type, request).await?;
    Ok(Json(response))
}
