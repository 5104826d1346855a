//! Authentication handlers
//!
//! Endpoints for account creation and login.

use axum::{extract::State, Json};
use booking_service::dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use booking_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Create an account
///
/// POST /api/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Json(response))
}

/// Login with username and password
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}
