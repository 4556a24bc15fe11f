//! In-memory repository implementations

mod change_log;
mod status;
mod status_configuration;

pub use change_log::MemChangeLogRepository;
pub use status::MemStatusRepository;
pub use status_configuration::MemStatusConfigurationRepository;
