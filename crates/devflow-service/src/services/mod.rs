//! Service layer - business logic built on the repository ports

mod change_log;
mod context;
mod error;
mod status_config;

pub use change_log::ChangeLogService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use status_config::StatusConfigService;
