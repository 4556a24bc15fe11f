//! In-memory implementation of ChangeLogRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use devflow_core::{ChangeLogEntry, ChangeLogRepository, EntityType, RepoResult};

/// In-memory implementation of ChangeLogRepository
///
/// Append-only: entries are pushed at the tail and never touched again.
/// Readers walk the rows in reverse so newest entries come back first.
#[derive(Clone, Default)]
pub struct MemChangeLogRepository {
    rows: Arc<RwLock<Vec<ChangeLogEntry>>>,
}

impl MemChangeLogRepository {
    /// Create an empty audit log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChangeLogRepository for MemChangeLogRepository {
    #[instrument(skip(self, entry), fields(entry_id = %entry.id))]
    async fn insert(&self, entry: &ChangeLogEntry) -> RepoResult<()> {
        self.rows.write().push(entry.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ChangeLogEntry>> {
        let rows = self.rows.read();
        Ok(rows.iter().rev().cloned().collect())
    }

    #[instrument(skip(self))]
    async fn find_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> RepoResult<Vec<ChangeLogEntry>> {
        let rows = self.rows.read();
        Ok(rows
            .iter()
            .rev()
            .filter(|e| e.entity_type == entity_type && e.entity_id == entity_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn find_by_actor(&self, actor_id: Uuid) -> RepoResult<Vec<ChangeLogEntry>> {
        let rows = self.rows.read();
        Ok(rows
            .iter()
            .rev()
            .filter(|e| e.actor_id == actor_id)
            .cloned()
            .collect())
    }
}
