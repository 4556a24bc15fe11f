//! Status entity - a named workflow state with display properties

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A workflow status definition (e.g. "In Progress")
///
/// `order` determines the display sequence within an entity type; ties are
/// broken by insertion order, uniqueness is not enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub order: i32,
    pub is_default: bool,
    pub is_completed: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Status {
    /// Create a new Status with a fresh id and timestamps
    pub fn new(name: impl Into<String>, order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            color: None,
            order,
            is_default: false,
            is_completed: false,
            is_archived: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this status counts towards completion in progress metrics
    #[inline]
    pub fn is_completion_status(&self) -> bool {
        self.is_completed
    }

    /// Whether this status represents an archived item
    #[inline]
    pub fn is_archived_status(&self) -> bool {
        self.is_archived
    }

    /// Refresh the modification timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
