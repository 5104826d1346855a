//! Dining place database model

use chrono::{DateTime, NaiveTime, Utc};
use sqlx::FromRow;

/// Database model for dining_places table
#[derive(Debug, Clone, FromRow)]
pub struct DiningPlaceModel {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}
