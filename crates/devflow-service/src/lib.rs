//! # devflow-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services are thin stateless wrappers over a shared [`ServiceContext`]
//! that holds the repository handles. Handlers construct a service per
//! request and call into it.

pub mod dto;
pub mod services;

pub use services::{
    ChangeLogService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StatusConfigService,
};
