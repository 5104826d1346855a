//! Booked slot entity - a user's reservation at a dining place

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::{BookedSlotId, DiningPlaceId, UserId};

/// A reserved time range at a dining place
///
/// Overlapping slots are not detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub id: BookedSlotId,
    pub user_id: UserId,
    pub dining_place_id: DiningPlaceId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl BookedSlot {
    /// Length of the reservation
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }
}

/// Data for a slot that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookedSlot {
    pub user_id: UserId,
    pub dining_place_id: DiningPlaceId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl NewBookedSlot {
    /// Create a new slot
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTimeRange` unless `start_time < end_time`
    pub fn new(
        user_id: UserId,
        dining_place_id: DiningPlaceId,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if start_time >= end_time {
            return Err(DomainError::InvalidTimeRange(format!(
                "start_time {start_time} must be before end_time {end_time}"
            )));
        }
        Ok(Self {
            user_id,
            dining_place_id,
            start_time,
            end_time,
        })
    }
}
