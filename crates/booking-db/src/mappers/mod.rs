//! Entity to model mappers
//!
//! This module provides conversions between domain entities (booking-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database inserts

mod booked_slot;
mod dining_place;
mod user;

pub use booked_slot::BookedSlotInsert;
pub use dining_place::DiningPlaceInsert;
pub use user::UserInsert;
