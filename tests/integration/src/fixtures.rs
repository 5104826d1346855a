//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Mixes in the start time so reruns against the same database do not collide.
pub fn unique_suffix() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{nanos:x}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Signup request
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl SignupRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            password: "TestPass123!".to_string(),
            email: format!("user{suffix}@example.com"),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_signup(signup: &SignupRequest) -> Self {
        Self {
            username: signup.username.clone(),
            password: signup.password.clone(),
        }
    }
}

/// Signup response
#[derive(Debug, Deserialize)]
pub struct SignupResponse {
    pub status: String,
    pub status_code: u16,
    pub user_id: i64,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub status: String,
    pub status_code: u16,
    pub user_id: i64,
    pub access_token: String,
}

/// Current user response
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
}

/// User body
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// Operational hours body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationalHours {
    pub open_time: String,
    pub close_time: String,
}

/// Create dining place request
#[derive(Debug, Serialize)]
pub struct CreateDiningPlaceRequest {
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub operational_hours: OperationalHours,
}

impl CreateDiningPlaceRequest {
    pub fn unique() -> Self {
        Self {
            name: format!("Place {}", unique_suffix()),
            address: "12 Harbour Road".to_string(),
            phone_no: Some("5550100".to_string()),
            website: Some("https://place.example".to_string()),
            operational_hours: OperationalHours {
                open_time: "08:30".to_string(),
                close_time: "23:00".to_string(),
            },
        }
    }
}

/// Create dining place response
#[derive(Debug, Deserialize)]
pub struct CreateDiningPlaceResponse {
    pub message: String,
    pub place_id: i64,
    pub status_code: u16,
}

/// Dining place lookup response
#[derive(Debug, Deserialize)]
pub struct DiningPlaceResponse {
    pub place: DiningPlaceBody,
}

/// Dining place body
#[derive(Debug, Deserialize)]
pub struct DiningPlaceBody {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub operational_hours: OperationalHours,
}

/// Error body shared by every failing endpoint
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub status_code: u16,
    pub code: String,
}
