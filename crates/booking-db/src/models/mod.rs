//! Database models - SQLx-compatible structs for PostgreSQL tables

mod booked_slot;
mod dining_place;
mod user;

pub use booked_slot::BookedSlotModel;
pub use dining_place::DiningPlaceModel;
pub use user::UserModel;
