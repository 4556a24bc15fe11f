//! In-memory implementation of StatusRepository

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use devflow_core::{RepoResult, Status, StatusRepository};

/// In-memory implementation of StatusRepository
///
/// Rows live in a shared `Vec` guarded by an `RwLock`; insertion order is
/// the catalog order. Cloning the repository clones the handle, not the data.
#[derive(Clone, Default)]
pub struct MemStatusRepository {
    rows: Arc<RwLock<Vec<Status>>>,
}

impl MemStatusRepository {
    /// Create an empty status catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusRepository for MemStatusRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Status>> {
        let rows = self.rows.read();
        Ok(rows.iter().find(|s| s.id == id).cloned())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Status>> {
        Ok(self.rows.read().clone())
    }

    #[instrument(skip(self))]
    async fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.rows.read().is_empty())
    }

    #[instrument(skip(self, status), fields(status_id = %status.id))]
    async fn insert(&self, status: &Status) -> RepoResult<()> {
        self.rows.write().push(status.clone());
        Ok(())
    }

    #[instrument(skip(self, status), fields(status_id = %status.id))]
    async fn update(&self, status: &Status) -> RepoResult<()> {
        let mut rows = self.rows.write();
        if let Some(row) = rows.iter_mut().find(|s| s.id == status.id) {
            *row = status.clone();
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RepoResult<bool> {
        let mut rows = self.rows.write();
        let before = rows.len();
        rows.retain(|s| s.id != id);
        Ok(rows.len() < before)
    }
}
