//! Error handling utilities for repositories

use booking_core::error::DomainError;
use sqlx::Error as SqlxError;
use tracing::warn;

/// SQLSTATEs the server reports when it cannot serve the session: class `08`
/// (connection exception), `53300` (too many connections) and `57P01`-`57P03`
/// (shutdown or not yet accepting connections)
fn is_unavailable_sqlstate(code: &str) -> bool {
    code.starts_with("08") || matches!(code, "53300" | "57P01" | "57P02" | "57P03")
}

/// Convert SQLx error to `DomainError`
///
/// Connection-level failures become `StorageUnavailable` so callers can
/// answer 503 instead of 500.
pub fn map_db_error(e: SqlxError) -> DomainError {
    let unavailable = match &e {
        SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::Io(_)
        | SqlxError::Tls(_) => true,
        SqlxError::Database(db_err) => db_err.code().is_some_and(|c| is_unavailable_sqlstate(&c)),
        _ => false,
    };

    if unavailable {
        warn!(error = %e, "Database unreachable");
        DomainError::StorageUnavailable(e.to_string())
    } else {
        DomainError::DatabaseError(e.to_string())
    }
}

/// Map a failed `users` insert, naming which unique column collided
pub fn map_user_insert_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return match db_err.constraint() {
                Some(c) if c.contains("email") => DomainError::EmailAlreadyExists,
                _ => DomainError::UsernameAlreadyExists,
            };
        }
    }
    map_db_error(e)
}

/// Map a failed insert into a table with foreign keys or check constraints
pub fn map_reference_error(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            let target = match db_err.constraint() {
                Some(c) if c.contains("user_id") => "user",
                Some(c) if c.contains("dining_place_id") => "dining place",
                _ => "record",
            };
            return DomainError::UnknownReference(format!("referenced {target} does not exist"));
        }
        if db_err.is_check_violation() {
            return DomainError::ValidationError(db_err.message().to_string());
        }
    }
    map_db_error(e)
}
