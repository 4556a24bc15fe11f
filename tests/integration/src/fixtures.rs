//! Test fixtures and data generators
//!
//! Provides reusable request payloads and response shapes for the API tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Change Log Fixtures
// ============================================================================

/// Record-change request payload
#[derive(Debug, Serialize)]
pub struct RecordChangePayload {
    pub entity_type: String,
    pub entity_id: Uuid,
    pub operation: String,
    pub actor_id: Uuid,
    pub changes: Vec<FieldChangePayload>,
}

impl RecordChangePayload {
    /// A single-field task update
    pub fn task_update(entity_id: Uuid, actor_id: Uuid) -> Self {
        let suffix = unique_suffix();
        Self {
            entity_type: "task".to_string(),
            entity_id,
            operation: "update".to_string(),
            actor_id,
            changes: vec![FieldChangePayload {
                field: "title".to_string(),
                old_value: Some(Value::from(format!("Task {suffix}"))),
                new_value: Value::from(format!("Task {suffix} renamed")),
            }],
        }
    }

    /// A creation entry with no field changes
    pub fn creation(entity_type: &str, entity_id: Uuid, actor_id: Uuid) -> Self {
        Self {
            entity_type: entity_type.to_string(),
            entity_id,
            operation: "create".to_string(),
            actor_id,
            changes: vec![],
        }
    }
}

/// One field change in a request payload
#[derive(Debug, Serialize)]
pub struct FieldChangePayload {
    pub field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    pub new_value: Value,
}

/// Change-log entry as returned by the API
#[derive(Debug, Deserialize)]
pub struct ChangeLogEntryBody {
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub operation: String,
    pub actor_id: String,
    pub changes: Vec<Value>,
    pub created_at: String,
}

// ============================================================================
// Status Fixtures
// ============================================================================

/// Create-status request payload
#[derive(Debug, Serialize)]
pub struct CreateStatusPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub order: i32,
}

impl CreateStatusPayload {
    pub fn unique(order: i32) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Status {suffix}"),
            description: Some("Created by integration tests".to_string()),
            color: Some("#123456".to_string()),
            order,
        }
    }
}

/// Status as returned by the API
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub order: i32,
    pub is_default: bool,
    pub is_completed: bool,
    pub is_archived: bool,
}

/// Status configuration row as returned by the API
#[derive(Debug, Deserialize)]
pub struct StatusConfigurationBody {
    pub id: String,
    pub entity_type: String,
    pub status_id: String,
    pub enabled: bool,
}

/// Error envelope as returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetailBody,
}

/// Error detail as returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorDetailBody {
    pub code: String,
    pub message: String,
}
