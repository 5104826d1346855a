//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in booking-core.
//! Each repository handles database operations for a specific domain entity.

mod booked_slot;
mod dining_place;
mod error;
mod user;

pub use booked_slot::PgBookedSlotRepository;
pub use dining_place::PgDiningPlaceRepository;
pub(crate) use error::map_db_error;
pub use user::PgUserRepository;
