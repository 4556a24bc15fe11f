//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChangeLogRepository, RepoResult, StatusConfigurationRepository, StatusRepository,
};
