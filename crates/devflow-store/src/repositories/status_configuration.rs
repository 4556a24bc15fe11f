//! In-memory implementation of StatusConfigurationRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use devflow_core::{
    RepoResult, StatusConfiguration, StatusConfigurationRepository, StatusEntityType,
};

/// In-memory implementation of StatusConfigurationRepository
///
/// Holds the status/entity-type link rows. At most one row should exist per
/// `(status_id, entity_type)` pair; the service layer upserts through
/// `find_pair` to keep that invariant.
#[derive(Clone, Default)]
pub struct MemStatusConfigurationRepository {
    rows: Arc<RwLock<Vec<StatusConfiguration>>>,
}

impl MemStatusConfigurationRepository {
    /// Create an empty configuration table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusConfigurationRepository for MemStatusConfigurationRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<StatusConfiguration>> {
        Ok(self.rows.read().clone())
    }

    #[instrument(skip(self))]
    async fn find_pair(
        &self,
        status_id: Uuid,
        entity_type: StatusEntityType,
    ) -> RepoResult<Option<StatusConfiguration>> {
        let rows = self.rows.read();
        Ok(rows
            .iter()
            .find(|c| c.status_id == status_id && c.entity_type == entity_type)
            .cloned())
    }

    #[instrument(skip(self, config), fields(config_id = %config.id))]
    async fn insert(&self, config: &StatusConfiguration) -> RepoResult<()> {
        self.rows.write().push(config.clone());
        Ok(())
    }

    #[instrument(skip(self, config), fields(config_id = %config.id))]
    async fn update(&self, config: &StatusConfiguration) -> RepoResult<()> {
        let mut rows = self.rows.write();
        if let Some(row) = rows.iter_mut().find(|c| c.id == config.id) {
            *row = config.clone();
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_status(&self, status_id: Uuid) -> RepoResult<u64> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|c| c.status_id != status_id);
        Ok((before - rows.len()) as u64)
    }
}
