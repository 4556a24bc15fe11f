//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern: the domain layer defines what
//! it needs, and the infrastructure layer provides the implementation. The
//! in-memory store used in-process and a database-backed store are both
//! valid implementations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{ChangeLogEntry, Status, StatusConfiguration};
use crate::error::DomainError;
use crate::value_objects::{EntityType, StatusEntityType};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Status Repository
// ============================================================================

#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Find status by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Status>>;

    /// All statuses, in insertion order
    async fn find_all(&self) -> RepoResult<Vec<Status>>;

    /// Whether the catalog holds no statuses (bootstrap check)
    async fn is_empty(&self) -> RepoResult<bool>;

    /// Append a new status to the catalog
    async fn insert(&self, status: &Status) -> RepoResult<()>;

    /// Replace an existing status
    async fn update(&self, status: &Status) -> RepoResult<()>;

    /// Remove a status; returns false when the id is unknown
    async fn delete(&self, id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Status Configuration Repository
// ============================================================================

#[async_trait]
pub trait StatusConfigurationRepository: Send + Sync {
    /// All configuration rows, in insertion order
    async fn find_all(&self) -> RepoResult<Vec<StatusConfiguration>>;

    /// Find the single row for a `(status, entity_type)` pair, if any
    async fn find_pair(
        &self,
        status_id: Uuid,
        entity_type: StatusEntityType,
    ) -> RepoResult<Option<StatusConfiguration>>;

    /// Append a new configuration row
    async fn insert(&self, config: &StatusConfiguration) -> RepoResult<()>;

    /// Replace an existing configuration row
    async fn update(&self, config: &StatusConfiguration) -> RepoResult<()>;

    /// Remove every row referencing a status; returns the number removed
    async fn delete_by_status(&self, status_id: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Change Log Repository
// ============================================================================

/// Append-only audit store. Entries are immutable once inserted; there are
/// no update or delete operations. All getters return entries newest-first.
#[async_trait]
pub trait ChangeLogRepository: Send + Sync {
    /// Append an entry (atomic: fully stored or not stored at all)
    async fn insert(&self, entry: &ChangeLogEntry) -> RepoResult<()>;

    /// All entries, newest first
    async fn find_all(&self) -> RepoResult<Vec<ChangeLogEntry>>;

    /// Entries for one entity, newest first
    async fn find_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> RepoResult<Vec<ChangeLogEntry>>;

    /// Entries recorded by one actor, newest first
    async fn find_by_actor(&self, actor_id: Uuid) -> RepoResult<Vec<ChangeLogEntry>>;
}
