//! # devflow-store
//!
//! Storage layer implementing the repository traits from `devflow-core`
//! with in-process, in-memory stores.
//!
//! ## Overview
//!
//! Each repository wraps its rows in a `parking_lot::RwLock` and hands out
//! clones, so the stores are cheap to share across handlers via `Arc`.
//! Insertion order is preserved, which is what the audit log and the status
//! catalog both rely on.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use devflow_store::MemStatusRepository;
//! use devflow_core::StatusRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = MemStatusRepository::new();
//!     assert!(repo.is_empty().await?);
//!     Ok(())
//! }
//! ```

pub mod repositories;

// Re-export commonly used types
pub use repositories::{MemChangeLogRepository, MemStatusConfigurationRepository, MemStatusRepository};
