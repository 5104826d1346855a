//! PostgreSQL implementation of `BookedSlotRepository`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::{BookedSlot, NewBookedSlot};
use booking_core::traits::{BookedSlotRepository, RepoResult};
use booking_core::value_objects::{BookedSlotId, DiningPlaceId, UserId};

use crate::mappers::BookedSlotInsert;
use crate::models::BookedSlotModel;

use super::error::{map_db_error, map_reference_error};

/// PostgreSQL implementation of `BookedSlotRepository`
#[derive(Clone)]
pub struct PgBookedSlotRepository {
    pool: PgPool,
}

impl PgBookedSlotRepository {
    /// Create a new `PgBookedSlotRepository`
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookedSlotRepository for PgBookedSlotRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: BookedSlotId) -> RepoResult<Option<BookedSlot>> {
        let result = sqlx::query_as::<_, BookedSlotModel>(
            r"
            SELECT id, user_id, dining_place_id, start_time, end_time, created_at
            FROM booked_slots
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(BookedSlot::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<BookedSlot>> {
        let rows = sqlx::query_as::<_, BookedSlotModel>(
            r"
            SELECT id, user_id, dining_place_id, start_time, end_time, created_at
            FROM booked_slots
            WHERE user_id = $1
            ORDER BY start_time, id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BookedSlot::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_dining_place(&self, place_id: DiningPlaceId) -> RepoResult<Vec<BookedSlot>> {
        let rows = sqlx::query_as::<_, BookedSlotModel>(
            r"
            SELECT id, user_id, dining_place_id, start_time, end_time, created_at
            FROM booked_slots
            WHERE dining_place_id = $1
            ORDER BY start_time, id
            ",
        )
        .bind(place_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BookedSlot::from).collect())
    }

    #[instrument(
        skip(self, slot),
        fields(user_id = %slot.user_id, place_id = %slot.dining_place_id)
    )]
    async fn create(&self, slot: &NewBookedSlot) -> RepoResult<BookedSlot> {
        let row = BookedSlotInsert::new(slot);

        let model = sqlx::query_as::<_, BookedSlotModel>(
            r"
            INSERT INTO booked_slots (user_id, dining_place_id, start_time, end_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, dining_place_id, start_time, end_time, created_at
            ",
        )
        .bind(row.user_id)
        .bind(row.dining_place_id)
        .bind(row.start_time)
        .bind(row.end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(BookedSlot::from(model))
    }
}
