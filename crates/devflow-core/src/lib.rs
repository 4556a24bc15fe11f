//! # devflow-core
//!
//! Domain layer containing entities, value objects, the change-diff engine,
//! repository traits, and the default status catalog. This crate has zero
//! dependencies on infrastructure (storage, web framework, etc.).

pub mod defaults;
pub mod diff;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use defaults::{default_statuses, StatusSeed};
pub use diff::{creation_changes, diff_objects, diff_records, DEFAULT_IGNORED_FIELDS};
pub use entities::{ChangeLogEntry, FieldChange, Status, StatusConfiguration};
pub use error::DomainError;
pub use traits::{
    ChangeLogRepository, RepoResult, StatusConfigurationRepository, StatusRepository,
};
pub use value_objects::{
    ChangeOperation, EntityType, ParseEnumError, StatusEntityType,
};
