//! Dining place service

use booking_core::entities::NewDiningPlace;
use booking_core::error::DomainError;
use booking_core::value_objects::DiningPlaceId;
use tracing::{info, instrument};

use crate::dto::{
    CreateDiningPlaceRequest, CreateDiningPlaceResponse, DiningPlaceDetails, DiningPlaceResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Dining place service
pub struct DiningPlaceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiningPlaceService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a new dining place
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(
        &self,
        request: CreateDiningPlaceRequest,
    ) -> ServiceResult<CreateDiningPlaceResponse> {
        let new_place = NewDiningPlace::try_from(request)?;

        let place = self.ctx.dining_place_repo().create(&new_place).await?;

        info!(place_id = %place.id, hours = %place.hours, "Dining place created");

        Ok(CreateDiningPlaceResponse::new(&place.name, place.id))
    }

    /// Get a dining place by id
    #[instrument(skip(self))]
    pub async fn get(&self, place_id: DiningPlaceId) -> ServiceResult<DiningPlaceResponse> {
        let place = self
            .ctx
            .dining_place_repo()
            .find_by_id(place_id)
            .await?
            .ok_or(DomainError::DiningPlaceNotFound(place_id))?;

        Ok(DiningPlaceResponse::new(DiningPlaceDetails::from(place)))
    }
}
