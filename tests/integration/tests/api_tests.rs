//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_root() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "Hello world");
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_signup_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();

    let response = server.post("/api/signup", &signup).await.unwrap();
    let created: SignupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.status, "Account successfully created");
    assert_eq!(created.status_code, 200);

    let response = server
        .post("/api/login", &LoginRequest::from_signup(&signup))
        .await
        .unwrap();
    let login: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(login.status, "Login successful");
    assert_eq!(login.user_id, created.user_id);
    assert!(!login.access_token.is_empty());

    let response = server.get_auth("/api/me", &login.access_token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.user.id, created.user_id);
    assert_eq!(me.user.username, signup.username);
    assert_eq!(me.user.email, signup.email);
    assert!(!me.user.is_admin);
}

#[tokio::test]
async fn test_signup_duplicates_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    let response = server.post("/api/signup", &signup).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let same_username = SignupRequest {
        email: SignupRequest::unique().email,
        ..signup.clone()
    };
    let response = server.post("/api/signup", &same_username).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.code, "USERNAME_ALREADY_EXISTS");

    let same_email = SignupRequest {
        username: SignupRequest::unique().username,
        ..signup
    };
    let response = server.post("/api/signup", &same_email).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(error.code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let signup = SignupRequest::unique();
    server.post("/api/signup", &signup).await.unwrap();

    let wrong_password = LoginRequest {
        username: signup.username.clone(),
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/login", &wrong_password).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.status_code, 401);
    assert_eq!(error.status, "Incorrect username/password provided. Please retry");

    let unknown = LoginRequest {
        username: SignupRequest::unique().username,
        password: "whatever".to_string(),
    };
    let response = server.post("/api/login", &unknown).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_me_without_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Dining Place Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_dining_place() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateDiningPlaceRequest::unique();

    let response = server.post("/api/dining-place/create", &request).await.unwrap();
    let created: CreateDiningPlaceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(created.message, format!("{} added successfully", request.name));
    assert_eq!(created.status_code, 200);

    let response = server
        .get(&format!("/api/dining-place/{}", created.place_id))
        .await
        .unwrap();
    let fetched: DiningPlaceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.place.id, created.place_id);
    assert_eq!(fetched.place.name, request.name);
    assert_eq!(fetched.place.address, request.address);
    assert_eq!(fetched.place.phone_no, request.phone_no);
    assert_eq!(fetched.place.website, request.website);
    assert_eq!(fetched.place.operational_hours.open_time, "08:30");
    assert_eq!(fetched.place.operational_hours.close_time, "23:00");
}

#[tokio::test]
async fn test_dining_place_ids_increase() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let first = server
        .post("/api/dining-place/create", &CreateDiningPlaceRequest::unique())
        .await
        .unwrap();
    let first: CreateDiningPlaceResponse = assert_json(first, StatusCode::OK).await.unwrap();

    let second = server
        .post("/api/dining-place/create", &CreateDiningPlaceRequest::unique())
        .await
        .unwrap();
    let second: CreateDiningPlaceResponse = assert_json(second, StatusCode::OK).await.unwrap();

    assert!(second.place_id > first.place_id);
}

#[tokio::test]
async fn test_invalid_dining_place_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let mut request = CreateDiningPlaceRequest::unique();
    request.phone_no = Some("12345678901".to_string());
    let response = server.post("/api/dining-place/create", &request).await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");

    let response = server.get("/api/dining-place/999999999").await.unwrap();
    let error: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(error.code, "UNKNOWN_DINING_PLACE");
}
