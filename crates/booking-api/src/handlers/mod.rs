//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod dining_places;
pub mod health;
pub mod root;
pub mod users;
