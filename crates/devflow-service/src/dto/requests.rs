//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with input rules also
//! implement `Validate`.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use devflow_core::{ChangeOperation, EntityType, FieldChange};

// ============================================================================
// Change Log Requests
// ============================================================================

/// Record a change-log entry
///
/// `changes` may be empty only for `create` operations; the service rejects
/// empty change sets for everything else.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordChangeRequest {
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub operation: ChangeOperation,
    pub actor_id: Uuid,
    #[serde(default)]
    pub changes: Vec<FieldChange>,
}

// ============================================================================
// Status Requests
// ============================================================================

/// Create a new status in the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusRequest {
    #[validate(length(min = 1, max = 50, message = "Status name must be 1-50 characters"))]
    pub name: String,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    /// Hex color for UI display (e.g., "#6366F1")
    #[validate(length(max = 20, message = "Color must be at most 20 characters"))]
    pub color: Option<String>,

    pub order: i32,

    #[serde(default)]
    pub is_default: bool,

    #[serde(default)]
    pub is_completed: bool,

    #[serde(default)]
    pub is_archived: bool,
}

/// Partial update for an existing status
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    #[validate(length(min = 1, max = 50, message = "Status name must be 1-50 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,

    #[validate(length(max = 20, message = "Color must be at most 20 characters"))]
    pub color: Option<String>,

    pub order: Option<i32>,

    pub is_default: Option<bool>,

    pub is_completed: Option<bool>,

    pub is_archived: Option<bool>,
}

/// Enable or disable a status for an entity type
#[derive(Debug, Clone, Deserialize)]
pub struct SetEnabledRequest {
    pub enabled: bool,
}
