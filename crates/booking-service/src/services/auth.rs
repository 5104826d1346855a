//! Authentication service
//!
//! Handles account creation, login and bearer token validation.

use booking_common::auth::{hash_password, verify_password_or_dummy};
use booking_common::AppError;
use booking_core::entities::NewUser;
use booking_core::value_objects::UserId;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new `AuthService`
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create an account
    ///
    /// Uniqueness is left to the storage layer; a duplicate username or email
    /// comes back as a conflict.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<SignupResponse> {
        let password_hash = hash_password(&request.password)?;
        let new_user = NewUser::new(request.username, request.email);

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User signed up");

        Ok(SignupResponse::new(user.id))
    }

    /// Login with username and password
    ///
    /// An unknown username and a wrong password fail the same way, and both
    /// pay for one Argon2 verification.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let credentials = self
            .ctx
            .user_repo()
            .find_credentials(&request.username)
            .await?;

        let stored_hash = credentials.as_ref().map(|c| c.password_hash.as_str());
        let verified = verify_password_or_dummy(&request.password, stored_hash);

        let credentials = match credentials {
            Some(credentials) if verified => credentials,
            Some(credentials) => {
                warn!(user_id = %credentials.user.id, "Login failed: invalid password");
                return Err(ServiceError::App(AppError::InvalidCredentials));
            }
            None => {
                warn!("Login failed: user not found");
                return Err(ServiceError::App(AppError::InvalidCredentials));
            }
        };

        let access_token = self.ctx.jwt_service().issue(&credentials.user)?;

        info!(user_id = %credentials.user.id, "User logged in");

        Ok(LoginResponse::new(credentials.user.id, access_token))
    }

    /// Validate a bearer token and return the user id it carries
    pub fn authenticate(&self, token: &str) -> ServiceResult<UserId> {
        Ok(self.ctx.jwt_service().validate(token)?)
    }
}
