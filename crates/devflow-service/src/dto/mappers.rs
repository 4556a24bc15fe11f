//! Entity to DTO mappers

use devflow_core::{ChangeLogEntry, Status, StatusConfiguration};

use super::responses::{ChangeLogResponse, StatusConfigurationResponse, StatusResponse};

impl From<&Status> for StatusResponse {
    fn from(status: &Status) -> Self {
        Self {
            id: status.id.to_string(),
            name: status.name.clone(),
            description: status.description.clone(),
            color: status.color.clone(),
            order: status.order,
            is_default: status.is_default,
            is_completed: status.is_completed,
            is_archived: status.is_archived,
            created_at: status.created_at,
            updated_at: status.updated_at,
        }
    }
}

impl From<&StatusConfiguration> for StatusConfigurationResponse {
    fn from(config: &StatusConfiguration) -> Self {
        Self {
            id: config.id.to_string(),
            entity_type: config.entity_type.to_string(),
            status_id: config.status_id.to_string(),
            enabled: config.enabled,
            created_at: config.created_at,
            updated_at: config.updated_at,
        }
    }
}

impl From<&ChangeLogEntry> for ChangeLogResponse {
    fn from(entry: &ChangeLogEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            entity_type: entry.entity_type.to_string(),
            entity_id: entry.entity_id.to_string(),
            operation: entry.operation.to_string(),
            actor_id: entry.actor_id.to_string(),
            changes: entry.changes.clone(),
            created_at: entry.created_at,
        }
    }
}
