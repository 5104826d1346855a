//! PostgreSQL implementation of `DiningPlaceRepository`

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use booking_core::entities::{DiningPlace, NewDiningPlace};
use booking_core::traits::{DiningPlaceRepository, RepoResult};
use booking_core::value_objects::DiningPlaceId;

use crate::mappers::DiningPlaceInsert;
use crate::models::DiningPlaceModel;

use super::error::{map_db_error, map_reference_error};

/// PostgreSQL implementation of `DiningPlaceRepository`
#[derive(Clone)]
pub struct PgDiningPlaceRepository {
    pool: PgPool,
}

impl PgDiningPlaceRepository {
    /// Create a new `PgDiningPlaceRepository`
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiningPlaceRepository for PgDiningPlaceRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: DiningPlaceId) -> RepoResult<Option<DiningPlace>> {
        let result = sqlx::query_as::<_, DiningPlaceModel>(
            r"
            SELECT id, name, address, phone_no, website, open_time, close_time, created_at
            FROM dining_places
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(DiningPlace::from))
    }

    #[instrument(skip(self, place), fields(name = %place.name))]
    async fn create(&self, place: &NewDiningPlace) -> RepoResult<DiningPlace> {
        let row = DiningPlaceInsert::new(place);

        let model = sqlx::query_as::<_, DiningPlaceModel>(
            r"
            INSERT INTO dining_places (name, address, phone_no, website, open_time, close_time)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, address, phone_no, website, open_time, close_time, created_at
            ",
        )
        .bind(row.name)
        .bind(row.address)
        .bind(row.phone_no)
        .bind(row.website)
        .bind(row.open_time)
        .bind(row.close_time)
        .fetch_one(&self.pool)
        .await
        .map_err(map_reference_error)?;

        Ok(DiningPlace::from(model))
    }
}
