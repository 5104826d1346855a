//! Value objects - immutable types that represent domain concepts

mod ids;
mod operational_hours;

pub use ids::{BookedSlotId, DiningPlaceId, IdParseError, UserId};
pub use operational_hours::{time_of_day, OperationalHours};
