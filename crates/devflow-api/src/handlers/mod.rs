//! Request handlers organized by domain

pub mod change_logs;
pub mod health;
pub mod statuses;
