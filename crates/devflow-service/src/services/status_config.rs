//! Status configuration service
//!
//! Manages the status catalog and the per-entity-type enablement table.
//! The default catalog is seeded lazily on first access.

use std::collections::HashSet;

use tracing::{info, instrument};
use uuid::Uuid;

use devflow_core::{
    default_statuses, Status, StatusConfiguration, StatusEntityType, StatusSeed,
};

use crate::dto::{
    CreateStatusRequest, SetEnabledRequest, StatusConfigurationResponse, StatusResponse,
    UpdateStatusRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn status_from_seed(seed: &StatusSeed) -> Status {
    let mut status = Status::new(seed.name, seed.order);
    status.description = Some(seed.description.to_string());
    status.color = Some(seed.color.to_string());
    status.is_default = seed.is_default;
    status.is_completed = seed.is_completed;
    status.is_archived = seed.is_archived;
    status
}

/// Status configuration service
pub struct StatusConfigService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatusConfigService<'a> {
    /// Create a new StatusConfigService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Seed the default status catalog if the store is empty
    ///
    /// Idempotent: a non-empty catalog is left untouched, so repeated calls
    /// (one per read operation) are cheap no-ops after the first.
    #[instrument(skip(self))]
    pub async fn ensure_defaults(&self) -> ServiceResult<()> {
        if !self.ctx.status_repo().is_empty().await? {
            return Ok(());
        }

        let mut seeded = 0_usize;
        for entity_type in StatusEntityType::ALL {
            for seed in default_statuses(entity_type) {
                let status = status_from_seed(seed);
                self.ctx.status_repo().insert(&status).await?;

                let config = StatusConfiguration::new(entity_type, status.id, true);
                self.ctx.status_config_repo().insert(&config).await?;
                seeded += 1;
            }
        }

        info!(seeded, "Seeded default status catalog");
        Ok(())
    }

    /// All statuses in the catalog
    #[instrument(skip(self))]
    pub async fn list_statuses(&self) -> ServiceResult<Vec<StatusResponse>> {
        self.ensure_defaults().await?;
        let statuses = self.ctx.status_repo().find_all().await?;
        Ok(statuses.iter().map(StatusResponse::from).collect())
    }

    /// All enablement rows
    #[instrument(skip(self))]
    pub async fn list_configurations(&self) -> ServiceResult<Vec<StatusConfigurationResponse>> {
        self.ensure_defaults().await?;
        let configs = self.ctx.status_config_repo().find_all().await?;
        Ok(configs
            .iter()
            .map(StatusConfigurationResponse::from)
            .collect())
    }

    /// Statuses enabled for an entity type, ascending by `order`
    ///
    /// The sort is stable, so statuses sharing an `order` value keep their
    /// catalog insertion order.
    #[instrument(skip(self))]
    pub async fn active_statuses_for(
        &self,
        entity_type: StatusEntityType,
    ) -> ServiceResult<Vec<StatusResponse>> {
        let statuses = self.active_entities_for(entity_type).await?;
        Ok(statuses.iter().map(StatusResponse::from).collect())
    }

    /// Default status for an entity type
    ///
    /// The first active status flagged `is_default`, falling back to the
    /// first active status, or `None` when nothing is enabled.
    #[instrument(skip(self))]
    pub async fn default_status_for(
        &self,
        entity_type: StatusEntityType,
    ) -> ServiceResult<Option<StatusResponse>> {
        let active = self.active_entities_for(entity_type).await?;
        let default = active
            .iter()
            .find(|s| s.is_default)
            .or_else(|| active.first());
        Ok(default.map(StatusResponse::from))
    }

    /// Create a new status
    ///
    /// The status is appended to the catalog but not enabled for any entity
    /// type; callers enable it explicitly via `set_enabled`.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_status(&self, request: CreateStatusRequest) -> ServiceResult<StatusResponse> {
        self.ensure_defaults().await?;

        let mut status = Status::new(request.name, request.order);
        status.description = request.description;
        status.color = request.color;
        status.is_default = request.is_default;
        status.is_completed = request.is_completed;
        status.is_archived = request.is_archived;

        self.ctx.status_repo().insert(&status).await?;

        info!(status_id = %status.id, "Status created");

        Ok(StatusResponse::from(&status))
    }

    /// Apply a partial update to a status
    #[instrument(skip(self, request))]
    pub async fn update_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> ServiceResult<StatusResponse> {
        self.ensure_defaults().await?;

        let mut status = self
            .ctx
            .status_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Status", id.to_string()))?;

        if let Some(name) = request.name {
            status.name = name;
        }
        if let Some(description) = request.description {
            status.description = Some(description);
        }
        if let Some(color) = request.color {
            status.color = Some(color);
        }
        if let Some(order) = request.order {
            status.order = order;
        }
        if let Some(is_default) = request.is_default {
            status.is_default = is_default;
        }
        if let Some(is_completed) = request.is_completed {
            status.is_completed = is_completed;
        }
        if let Some(is_archived) = request.is_archived {
            status.is_archived = is_archived;
        }
        status.touch();

        self.ctx.status_repo().update(&status).await?;

        info!(status_id = %status.id, "Status updated");

        Ok(StatusResponse::from(&status))
    }

    /// Delete a status and cascade its enablement rows
    ///
    /// Returns false when the id is unknown; callers treat that as a
    /// recoverable not-found rather than a fault.
    #[instrument(skip(self))]
    pub async fn delete_status(&self, id: Uuid) -> ServiceResult<bool> {
        self.ensure_defaults().await?;

        let deleted = self.ctx.status_repo().delete(id).await?;
        if deleted {
            let removed = self.ctx.status_config_repo().delete_by_status(id).await?;
            info!(status_id = %id, configs_removed = removed, "Status deleted");
        }
        Ok(deleted)
    }

    /// Enable or disable a status for an entity type (upsert)
    ///
    /// Existing rows are flipped in place; missing rows are created with the
    /// given flag. The status id is not checked against the catalog, so
    /// toggles can be called blindly.
    #[instrument(skip(self, request))]
    pub async fn set_enabled(
        &self,
        status_id: Uuid,
        entity_type: StatusEntityType,
        request: SetEnabledRequest,
    ) -> ServiceResult<StatusConfigurationResponse> {
        self.ensure_defaults().await?;

        let existing = self
            .ctx
            .status_config_repo()
            .find_pair(status_id, entity_type)
            .await?;

        let config = match existing {
            Some(mut config) => {
                config.set_enabled(request.enabled);
                self.ctx.status_config_repo().update(&config).await?;
                config
            }
            None => {
                let config = StatusConfiguration::new(entity_type, status_id, request.enabled);
                self.ctx.status_config_repo().insert(&config).await?;
                config
            }
        };

        info!(
            status_id = %status_id,
            entity_type = %entity_type,
            enabled = config.enabled,
            "Status enablement updated"
        );

        Ok(StatusConfigurationResponse::from(&config))
    }

    /// Active statuses for an entity type as domain entities
    async fn active_entities_for(
        &self,
        entity_type: StatusEntityType,
    ) -> ServiceResult<Vec<Status>> {
        self.ensure_defaults().await?;

        let configs = self.ctx.status_config_repo().find_all().await?;
        let enabled_ids: HashSet<Uuid> = configs
            .iter()
            .filter(|c| c.entity_type == entity_type && c.enabled)
            .map(|c| c.status_id)
            .collect();

        // Walk the catalog in insertion order so the stable sort preserves
        // it for equal `order` values
        let mut statuses: Vec<Status> = self
            .ctx
            .status_repo()
            .find_all()
            .await?
            .into_iter()
            .filter(|s| enabled_ids.contains(&s.id))
            .collect();
        statuses.sort_by_key(|s| s.order);

        Ok(statuses)
    }
}
