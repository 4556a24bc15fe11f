//! Change log service
//!
//! Records immutable audit entries and serves the read views over them.

use tracing::{info, instrument};
use uuid::Uuid;

use devflow_core::{ChangeLogEntry, DomainError, EntityType};

use crate::dto::{ChangeLogResponse, RecordChangeRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Change log service
pub struct ChangeLogService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChangeLogService<'a> {
    /// Create a new ChangeLogService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Record a new audit entry
    ///
    /// Rejects an empty change set unless the operation is `create`, where
    /// an empty set is meaningful (the entity itself is the change).
    #[instrument(skip(self, request), fields(entity_type = %request.entity_type, operation = %request.operation))]
    pub async fn record(&self, request: RecordChangeRequest) -> ServiceResult<ChangeLogResponse> {
        if request.changes.is_empty() && !request.operation.allows_empty_changes() {
            return Err(DomainError::EmptyChangeSet {
                entity_type: request.entity_type,
                operation: request.operation,
            }
            .into());
        }

        let entry = ChangeLogEntry::new(
            request.entity_type,
            request.entity_id,
            request.operation,
            request.actor_id,
            request.changes,
        );

        self.ctx.change_log_repo().insert(&entry).await?;

        info!(
            entry_id = %entry.id,
            entity_id = %entry.entity_id,
            changes = entry.changes.len(),
            "Change recorded"
        );

        Ok(ChangeLogResponse::from(&entry))
    }

    /// All entries, newest first
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<ChangeLogResponse>> {
        let entries = self.ctx.change_log_repo().find_all().await?;
        Ok(entries.iter().map(ChangeLogResponse::from).collect())
    }

    /// Entries for one entity, newest first
    #[instrument(skip(self))]
    pub async fn get_by_entity(
        &self,
        entity_type: EntityType,
        entity_id: Uuid,
    ) -> ServiceResult<Vec<ChangeLogResponse>> {
        let entries = self
            .ctx
            .change_log_repo()
            .find_by_entity(entity_type, entity_id)
            .await?;
        Ok(entries.iter().map(ChangeLogResponse::from).collect())
    }

    /// Entries recorded by one actor, newest first
    #[instrument(skip(self))]
    pub async fn get_by_actor(&self, actor_id: Uuid) -> ServiceResult<Vec<ChangeLogResponse>> {
        let entries = self.ctx.change_log_repo().find_by_actor(actor_id).await?;
        Ok(entries.iter().map(ChangeLogResponse::from).collect())
    }
}
