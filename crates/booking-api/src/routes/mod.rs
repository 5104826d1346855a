//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, dining_places, health, root, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::hello_world))
        .merge(health_routes())
        .nest("/api", api_routes())
}

/// Health check routes
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(dining_place_routes())
        .route("/me", get(users::get_current_user))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
}

/// Dining place routes
fn dining_place_routes() -> Router<AppState> {
    Router::new()
        .route("/dining-place/create", post(dining_places::create_dining_place))
        .route("/dining-place/:place_id", get(dining_places::get_dining_place))
}
