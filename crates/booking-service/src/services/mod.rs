//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod dining_place;
pub mod error;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use dining_place::DiningPlaceService;
pub use error::{ServiceError, ServiceResult};
pub use user::UserService;
