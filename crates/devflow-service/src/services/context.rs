//! Service context - dependency container for services
//!
//! Holds the repository handles shared by all services.

use std::sync::Arc;

use devflow_core::{ChangeLogRepository, StatusConfigurationRepository, StatusRepository};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to the status catalog, the configuration table, and
/// the append-only change log.
#[derive(Clone)]
pub struct ServiceContext {
    status_repo: Arc<dyn StatusRepository>,
    status_config_repo: Arc<dyn StatusConfigurationRepository>,
    change_log_repo: Arc<dyn ChangeLogRepository>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        status_repo: Arc<dyn StatusRepository>,
        status_config_repo: Arc<dyn StatusConfigurationRepository>,
        change_log_repo: Arc<dyn ChangeLogRepository>,
    ) -> Self {
        Self {
            status_repo,
            status_config_repo,
            change_log_repo,
        }
    }

    /// Get the status repository
    pub fn status_repo(&self) -> &dyn StatusRepository {
        self.status_repo.as_ref()
    }

    /// Get the status configuration repository
    pub fn status_config_repo(&self) -> &dyn StatusConfigurationRepository {
        self.status_config_repo.as_ref()
    }

    /// Get the change log repository
    pub fn change_log_repo(&self) -> &dyn ChangeLogRepository {
        self.change_log_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    status_repo: Option<Arc<dyn StatusRepository>>,
    status_config_repo: Option<Arc<dyn StatusConfigurationRepository>>,
    change_log_repo: Option<Arc<dyn ChangeLogRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            status_repo: None,
            status_config_repo: None,
            change_log_repo: None,
        }
    }

    pub fn status_repo(mut self, repo: Arc<dyn StatusRepository>) -> Self {
        self.status_repo = Some(repo);
        self
    }

    pub fn status_config_repo(mut self, repo: Arc<dyn StatusConfigurationRepository>) -> Self {
        self.status_config_repo = Some(repo);
        self
    }

    pub fn change_log_repo(mut self, repo: Arc<dyn ChangeLogRepository>) -> Self {
        self.change_log_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.status_repo
                .ok_or_else(|| super::error::ServiceError::validation("status_repo is required"))?,
            self.status_config_repo.ok_or_else(|| {
                super::error::ServiceError::validation("status_config_repo is required")
            })?,
            self.change_log_repo.ok_or_else(|| {
                super::error::ServiceError::validation("change_log_repo is required")
            })?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
