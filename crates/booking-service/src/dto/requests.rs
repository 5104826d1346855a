//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Length bounds mirror the column sizes in the schema.

use booking_core::value_objects::time_of_day;
use chrono::NaiveTime;
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Auth Requests
// ============================================================================

/// Account creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 80, message = "Username must be 1-80 characters"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    #[validate(length(min = 1, max = 120, message = "Email must be 1-120 characters"))]
    pub email: String,
}

/// Login request
#[derive(Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Dining Place Requests
// ============================================================================

/// Create dining place request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDiningPlaceRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 250, message = "Address must be 1-250 characters"))]
    pub address: String,

    #[serde(default)]
    #[validate(length(max = 10, message = "Phone number must be at most 10 characters"))]
    pub phone_no: Option<String>,

    #[serde(default)]
    #[validate(length(max = 120, message = "Website must be at most 120 characters"))]
    pub website: Option<String>,

    #[validate(nested)]
    pub operational_hours: OperationalHoursRequest,
}

/// Opening window, `HH:MM` or `HH:MM:SS`
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[validate(schema(function = "validate_hours_order"))]
pub struct OperationalHoursRequest {
    #[serde(with = "time_of_day")]
    pub open_time: NaiveTime,

    #[serde(with = "time_of_day")]
    pub close_time: NaiveTime,
}

fn validate_hours_order(hours: &OperationalHoursRequest) -> Result<(), ValidationError> {
    if hours.open_time < hours.close_time {
        return Ok(());
    }
    let mut error = ValidationError::new("time_order");
    error.message = Some("open_time must be before close_time".into());
    Err(error)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn place_body() -> serde_json::Value {
        json!({
            "name": "Cafe",
            "address": "1 Main St",
            "phone_no": "5550001",
            "website": "https://cafe.example",
            "operational_hours": { "open_time": "09:00", "close_time": "22:00:00" }
        })
    }

    #[test]
    fn test_signup_validation() {
        let ok: SignupRequest = serde_json::from_value(json!({
            "username": "alice",
            "password": "pw1",
            "email": "a@x.com"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let long = SignupRequest {
            username: "a".repeat(81),
            ..ok.clone()
        };
        let errors = long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let empty = SignupRequest {
            password: String::new(),
            ..ok
        };
        assert!(empty.validate().unwrap_err().field_errors().contains_key("password"));
    }

    #[test]
    fn test_missing_field_is_a_deserialize_error() {
        let body = json!({"username": "alice", "password": "pw1"});
        let result = serde_json::from_value::<SignupRequest>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_debug_hides_password() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "pw1".to_string(),
        };
        let debug = format!("{request:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("pw1"));
    }

    #[test]
    fn test_create_dining_place_parses_times() {
        let request: CreateDiningPlaceRequest = serde_json::from_value(place_body()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(
            request.operational_hours.open_time,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
        assert_eq!(
            request.operational_hours.close_time,
            NaiveTime::from_hms_opt(22, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut body = place_body();
        body.as_object_mut().unwrap().remove("phone_no");
        body.as_object_mut().unwrap().remove("website");

        let request: CreateDiningPlaceRequest = serde_json::from_value(body).unwrap();
        assert!(request.phone_no.is_none());
        assert!(request.website.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_hours_must_be_ordered() {
        let mut body = place_body();
        body["operational_hours"] = json!({ "open_time": "22:00", "close_time": "09:00" });

        let request: CreateDiningPlaceRequest = serde_json::from_value(body).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_phone_no_length_bound() {
        let mut body = place_body();
        body["phone_no"] = json!("12345678901");

        let request: CreateDiningPlaceRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone_no"));
    }

    #[test]
    fn test_bad_time_format_is_a_deserialize_error() {
        let mut body = place_body();
        body["operational_hours"]["open_time"] = json!("9am");
        assert!(serde_json::from_value::<CreateDiningPlaceRequest>(body).is_err());
    }
}
