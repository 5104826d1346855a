//! User entity <-> model mapper

use booking_core::entities::{NewUser, User, UserCredentials};
use booking_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert `UserModel` to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            email: model.email,
            is_admin: model.is_admin,
            created_at: model.created_at,
        }
    }
}

/// Split a row into the entity and its password hash
impl From<UserModel> for UserCredentials {
    fn from(mut model: UserModel) -> Self {
        let password_hash = std::mem::take(&mut model.password_hash);
        UserCredentials {
            user: User::from(model),
            password_hash,
        }
    }
}

/// Borrowed values for inserting a user
pub struct UserInsert<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser, password_hash: &'a str) -> Self {
        Self {
            username: &user.username,
            email: &user.email,
            password_hash,
        }
    }
}
