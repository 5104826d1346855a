//! Booked slot entity <-> model mapper

use booking_core::entities::{BookedSlot, NewBookedSlot};
use booking_core::value_objects::{BookedSlotId, DiningPlaceId, UserId};
use chrono::{DateTime, Utc};

use crate::models::BookedSlotModel;

impl From<BookedSlotModel> for BookedSlot {
    fn from(model: BookedSlotModel) -> Self {
        BookedSlot {
            id: BookedSlotId::new(model.id),
            user_id: UserId::new(model.user_id),
            dining_place_id: DiningPlaceId::new(model.dining_place_id),
            start_time: model.start_time,
            end_time: model.end_time,
            created_at: model.created_at,
        }
    }
}

/// Values for inserting a booked slot
pub struct BookedSlotInsert {
    pub user_id: i64,
    pub dining_place_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl BookedSlotInsert {
    pub fn new(slot: &NewBookedSlot) -> Self {
        Self {
            user_id: slot.user_id.into_inner(),
            dining_place_id: slot.dining_place_id.into_inner(),
            start_time: slot.start_time,
            end_time: slot.end_time,
        }
    }
}
