//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. No update or delete operations are exposed;
//! every record is insert-only.

use async_trait::async_trait;

use crate::entities::{
    BookedSlot, DiningPlace, NewBookedSlot, NewDiningPlace, NewUser, User, UserCredentials,
};
use crate::error::DomainError;
use crate::value_objects::{BookedSlotId, DiningPlaceId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Load a user and its password hash in one read, for login
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<UserCredentials>>;

    /// Insert a new user and return it with its assigned id
    ///
    /// Fails with `UsernameAlreadyExists` / `EmailAlreadyExists` when a
    /// unique constraint is hit.
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;
}

// ============================================================================
// Dining Place Repository
// ============================================================================

#[async_trait]
pub trait DiningPlaceRepository: Send + Sync {
    /// Find dining place by ID
    async fn find_by_id(&self, id: DiningPlaceId) -> RepoResult<Option<DiningPlace>>;

    /// Insert a new dining place and return it with its assigned id
    async fn create(&self, place: &NewDiningPlace) -> RepoResult<DiningPlace>;
}

// ============================================================================
// Booked Slot Repository
// ============================================================================

#[async_trait]
pub trait BookedSlotRepository: Send + Sync {
    /// Find slot by ID
    async fn find_by_id(&self, id: BookedSlotId) -> RepoResult<Option<BookedSlot>>;

    /// List slots booked by a user, earliest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<BookedSlot>>;

    /// List slots booked at a dining place, earliest first
    async fn find_by_dining_place(&self, place_id: DiningPlaceId) -> RepoResult<Vec<BookedSlot>>;

    /// Insert a new slot
    ///
    /// Fails with `UnknownReference` when the user or dining place does not exist.
    async fn create(&self, slot: &NewBookedSlot) -> RepoResult<BookedSlot>;
}
