//! User entity - represents a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity
///
/// The password never lives on the entity; it is only stored as a hash and
/// read back through [`UserCredentials`] during login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Data for a user that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// A user together with the stored password hash, used only for login
#[derive(Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("user", &self.user)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = NewUser::new("alice", "a@x.com");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn test_credentials_debug_hides_hash() {
        let creds = UserCredentials {
            user: User {
                id: UserId::new(1),
                username: "alice".to_string(),
                email: "a@x.com".to_string(),
                is_admin: false,
                created_at: Utc::now(),
            },
            password_hash: "$argon2id$secret".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("argon2id"));
    }
}
