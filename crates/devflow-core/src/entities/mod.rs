//! Domain entities

mod change_log;
mod status;
mod status_configuration;

pub use change_log::{ChangeLogEntry, FieldChange};
pub use status::Status;
pub use status_configuration::StatusConfiguration;
