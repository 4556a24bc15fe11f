//! Change-log entities - field-level changes and immutable audit entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::value_objects::{ChangeOperation, EntityType};

/// One attribute's transition between two snapshots of an entity
///
/// `old_value` is absent for creation-only changes. Absent fields are
/// represented as JSON null on the side they are missing from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    pub new_value: Value,
}

impl FieldChange {
    /// A transition carrying both sides
    pub fn new(field: impl Into<String>, old_value: Value, new_value: Value) -> Self {
        Self {
            field: field.into(),
            old_value: Some(old_value),
            new_value,
        }
    }

    /// A creation-only change carrying the initial value
    pub fn creation(field: impl Into<String>, new_value: Value) -> Self {
        Self {
            field: field.into(),
            old_value: None,
            new_value,
        }
    }

    /// Convenience constructor for a single status-field transition
    pub fn status_change(field: impl Into<String>, old_status: &str, new_status: &str) -> Self {
        Self::new(field, Value::from(old_status), Value::from(new_status))
    }
}

/// Immutable audit record for one operation on one entity
///
/// Created once via [`ChangeLogEntry::new`], never mutated or deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeLogEntry {
    pub id: Uuid,
    pub entity_type: EntityType,
    pub entity_id: Uuid,
    pub operation: ChangeOperation,
    pub actor_id: Uuid,
    pub changes: Vec<FieldChange>,
    pub created_at: DateTime<Utc>,
}

impl ChangeLogEntry {
    /// Create a new entry with a fresh id and creation timestamp
    pub fn new(
        entity_type: EntityType,
        entity_id: Uuid,
        operation: ChangeOperation,
        actor_id: Uuid,
        changes: Vec<FieldChange>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity_type,
            entity_id,
            operation,
            actor_id,
            changes,
            created_at: Utc::now(),
        }
    }

    /// Names of the changed fields, in emission order
    pub fn changed_fields(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.field.as_str()).collect()
    }
}
