//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting between domain entities and DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateDiningPlaceRequest, LoginRequest, OperationalHoursRequest, SignupRequest,
};

pub use responses::{
    CreateDiningPlaceResponse, CurrentUserResponse, DiningPlaceDetails, DiningPlaceResponse,
    HealthChecks, HealthResponse, LoginResponse, OperationalHoursResponse, ReadinessResponse,
    SignupResponse, UserResponse,
};
