//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use crate::value_objects::{ChangeOperation, EntityType};

/// Domain layer errors
///
/// Pure computations (diffing, sorting, derivation) never produce these;
/// they arise from mutating operations and from the storage layer.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Status not found: {0}")]
    StatusNotFound(Uuid),

    #[error("Status configuration not found: {0}")]
    StatusConfigurationNotFound(Uuid),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Empty change set for {operation} on {entity_type}")]
    EmptyChangeSet {
        entity_type: EntityType,
        operation: ChangeOperation,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::StatusNotFound(_) => "UNKNOWN_STATUS",
            Self::StatusConfigurationNotFound(_) => "UNKNOWN_STATUS_CONFIGURATION",
            Self::EmptyChangeSet { .. } => "EMPTY_CHANGE_SET",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StatusNotFound(_) | Self::StatusConfigurationNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyChangeSet { .. } | Self::ValidationError(_))
    }

    /// Check if this is a storage fault
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::StatusNotFound(Uuid::nil());
        assert_eq!(err.code(), "UNKNOWN_STATUS");

        let err = DomainError::EmptyChangeSet {
            entity_type: EntityType::Task,
            operation: ChangeOperation::Update,
        };
        assert_eq!(err.code(), "EMPTY_CHANGE_SET");
    }

    #[test]
    fn test_classification() {
        assert!(DomainError::StatusNotFound(Uuid::nil()).is_not_found());
        assert!(!DomainError::StatusNotFound(Uuid::nil()).is_validation());

        let empty = DomainError::EmptyChangeSet {
            entity_type: EntityType::Epic,
            operation: ChangeOperation::Link,
        };
        assert!(empty.is_validation());
        assert!(!empty.is_storage());

        assert!(DomainError::StorageError("down".into()).is_storage());
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::EmptyChangeSet {
            entity_type: EntityType::Task,
            operation: ChangeOperation::Update,
        };
        assert_eq!(err.to_string(), "Empty change set for update on task");
    }
}
