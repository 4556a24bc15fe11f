//! StatusConfiguration entity - enablement link between a status and an
//! entity type

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::StatusEntityType;

/// Enablement row for a `(status, entity_type)` pair
///
/// At most one row exists per pair; `set_enabled` upserts rather than
/// duplicating. A missing row behaves like `enabled = false` to callers of
/// the derived views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusConfiguration {
    pub id: Uuid,
    pub entity_type: StatusEntityType,
    pub status_id: Uuid,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StatusConfiguration {
    /// Create a new configuration row with a fresh id and timestamps
    pub fn new(entity_type: StatusEntityType, status_id: Uuid, enabled: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            entity_type,
            status_id,
            enabled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip the enabled flag, refreshing the modification timestamp
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.updated_at = Utc::now();
    }

    /// Whether this row links the given pair
    #[inline]
    pub fn links(&self, status_id: Uuid, entity_type: StatusEntityType) -> bool {
        self.status_id == status_id && self.entity_type == entity_type
    }
}
