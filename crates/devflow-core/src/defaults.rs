//! Default status catalog
//!
//! Fixed seed data inserted at bootstrap for every status-bearing entity
//! type. Orders are spaced by 10 so admins can slot custom statuses between
//! the defaults.

use crate::value_objects::StatusEntityType;

/// Seed definition for a default status (no id/timestamps yet)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusSeed {
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub order: i32,
    pub is_default: bool,
    pub is_completed: bool,
    pub is_archived: bool,
}

impl StatusSeed {
    const fn new(name: &'static str, description: &'static str, color: &'static str, order: i32) -> Self {
        Self {
            name,
            description,
            color,
            order,
            is_default: false,
            is_completed: false,
            is_archived: false,
        }
    }

    const fn default_status(mut self) -> Self {
        self.is_default = true;
        self
    }

    const fn completed(mut self) -> Self {
        self.is_completed = true;
        self
    }

    const fn archived(mut self) -> Self {
        self.is_archived = true;
        self
    }
}

const PRODUCT_IDEA_STATUSES: [StatusSeed; 6] = [
    StatusSeed::new("Proposed", "New idea that has been submitted", "#6366F1", 10).default_status(),
    StatusSeed::new("Under Review", "Being evaluated by the team", "#F59E0B", 20),
    StatusSeed::new("Approved", "Approved for implementation", "#10B981", 30),
    StatusSeed::new("Rejected", "Not approved for implementation", "#EF4444", 40),
    StatusSeed::new("Implemented", "Has been fully implemented", "#8B5CF6", 50).completed(),
    StatusSeed::new("Archived", "Archived for historical reference", "#71717A", 60).archived(),
];

const EPIC_STATUSES: [StatusSeed; 4] = [
    StatusSeed::new("Planning", "Epic is being planned", "#6366F1", 10).default_status(),
    StatusSeed::new("In Progress", "Implementation has started", "#F59E0B", 20),
    StatusSeed::new("Completed", "All tasks completed", "#10B981", 30).completed(),
    StatusSeed::new("Archived", "Archived for historical reference", "#71717A", 40).archived(),
];

const TASK_STATUSES: [StatusSeed; 6] = [
    StatusSeed::new("Backlog", "Planned but not started", "#6B7280", 10).default_status(),
    StatusSeed::new("Ready", "Ready to be worked on", "#6366F1", 20),
    StatusSeed::new("In Progress", "Currently being worked on", "#F59E0B", 30),
    StatusSeed::new("Review", "Ready for review", "#8B5CF6", 40),
    StatusSeed::new("Done", "Task is completed", "#10B981", 50).completed(),
    StatusSeed::new("Archived", "Archived for historical reference", "#71717A", 60).archived(),
];

/// Default statuses for an entity type, in display order
pub fn default_statuses(entity_type: StatusEntityType) -> &'static [StatusSeed] {
    match entity_type {
        StatusEntityType::ProductIdea => &PRODUCT_IDEA_STATUSES,
        StatusEntityType::Epic => &EPIC_STATUSES,
        StatusEntityType::Task => &TASK_STATUSES,
    }
}
