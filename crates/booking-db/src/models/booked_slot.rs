//! Booked slot database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for booked_slots table
#[derive(Debug, Clone, FromRow)]
pub struct BookedSlotModel {
    pub id: i64,
    pub user_id: i64,
    pub dining_place_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
