//! Domain entities - core business objects

mod booked_slot;
mod dining_place;
mod user;

pub use booked_slot::{BookedSlot, NewBookedSlot};
pub use dining_place::{DiningPlace, NewDiningPlace};
pub use user::{NewUser, User, UserCredentials};
