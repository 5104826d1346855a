//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Success bodies
//! repeat the HTTP status in `status_code`.

use booking_core::value_objects::{time_of_day, DiningPlaceId, UserId};
use chrono::{DateTime, NaiveTime, Utc};
use serde::Serialize;

const OK: u16 = 200;

// ============================================================================
// Auth Responses
// ============================================================================

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub status_code: u16,
    pub user_id: UserId,
    pub access_token: String,
}

impl LoginResponse {
    pub fn new(user_id: UserId, access_token: String) -> Self {
        Self {
            status: "Login successful",
            status_code: OK,
            user_id,
            access_token,
        }
    }
}

/// Successful signup
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub status: &'static str,
    pub status_code: u16,
    pub user_id: UserId,
}

impl SignupResponse {
    pub fn new(user_id: UserId) -> Self {
        Self {
            status: "Account successfully created",
            status_code: OK,
            user_id,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Public view of an account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
}

/// The authenticated caller
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub status: &'static str,
    pub status_code: u16,
    pub user: UserResponse,
}

impl CurrentUserResponse {
    pub fn new(user: UserResponse) -> Self {
        Self {
            status: "User fetched successfully",
            status_code: OK,
            user,
        }
    }
}

// ============================================================================
// Dining Place Responses
// ============================================================================

/// Successful dining place creation
#[derive(Debug, Serialize)]
pub struct CreateDiningPlaceResponse {
    pub message: String,
    pub place_id: DiningPlaceId,
    pub status_code: u16,
}

impl CreateDiningPlaceResponse {
    pub fn new(name: &str, place_id: DiningPlaceId) -> Self {
        Self {
            message: format!("{name} added successfully"),
            place_id,
            status_code: OK,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OperationalHoursResponse {
    #[serde(with = "time_of_day")]
    pub open_time: NaiveTime,
    #[serde(with = "time_of_day")]
    pub close_time: NaiveTime,
}

#[derive(Debug, Serialize)]
pub struct DiningPlaceDetails {
    pub id: DiningPlaceId,
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub operational_hours: OperationalHoursResponse,
}

/// A single dining place
#[derive(Debug, Serialize)]
pub struct DiningPlaceResponse {
    pub status_code: u16,
    pub place: DiningPlaceDetails,
}

impl DiningPlaceResponse {
    pub fn new(place: DiningPlaceDetails) -> Self {
        Self {
            status_code: OK,
            place,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_login_response_shape() {
        let response = LoginResponse::new(UserId::new(1), "tok".to_string());
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "Login successful",
                "status_code": 200,
                "user_id": 1,
                "access_token": "tok"
            })
        );
    }

    #[test]
    fn test_signup_response_shape() {
        let value = serde_json::to_value(SignupResponse::new(UserId::new(1))).unwrap();
        assert_eq!(
            value,
            json!({"status": "Account successfully created", "status_code": 200, "user_id": 1})
        );
    }

    #[test]
    fn test_create_dining_place_response_shape() {
        let response = CreateDiningPlaceResponse::new("Cafe", DiningPlaceId::new(2));
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(
            value,
            json!({"message": "Cafe added successfully", "place_id": 2, "status_code": 200})
        );
    }

    #[test]
    fn test_operational_hours_format() {
        let hours = OperationalHoursResponse {
            open_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            close_time: NaiveTime::from_hms_opt(22, 30, 15).unwrap(),
        };
        let value = serde_json::to_value(hours).unwrap();
        assert_eq!(value, json!({"open_time": "09:00", "close_time": "22:30:15"}));
    }

    #[test]
    fn test_health_response() {
        let health = HealthResponse::healthy();
        assert_eq!(health.status, "healthy");
    }

    #[test]
    fn test_readiness_response() {
        let ready = ReadinessResponse::ready(true);
        assert!(ready.is_ready());
        assert_eq!(ready.checks.database, "healthy");

        let not_ready = ReadinessResponse::ready(false);
        assert_eq!(not_ready.status, "not_ready");
        assert_eq!(not_ready.checks.database, "unhealthy");
    }
}
