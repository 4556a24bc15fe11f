//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! UUIDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use devflow_core::FieldChange;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Change Log Responses
// ============================================================================

/// One recorded audit entry
#[derive(Debug, Serialize)]
pub struct ChangeLogResponse {
    pub id: String,
    pub entity_type: String,
    pub entity_id: String,
    pub operation: String,
    pub actor_id: String,
    pub changes: Vec<FieldChange>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Status Responses
// ============================================================================

/// One status from the catalog
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub order: i32,
    pub is_default: bool,
    pub is_completed: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One status/entity-type enablement row
#[derive(Debug, Serialize)]
pub struct StatusConfigurationResponse {
    pub id: String,
    pub entity_type: String,
    pub status_id: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Readiness probe response
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub store: &'static str,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready() -> Self {
        Self {
            status: "ready",
            store: "ok",
        }
    }

    #[must_use]
    pub fn not_ready() -> Self {
        Self {
            status: "not_ready",
            store: "error",
        }
    }
}
