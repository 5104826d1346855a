//! Path parameter extractors
//!
//! Type-safe extraction of record ids from path parameters.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use booking_core::DiningPlaceId;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Path extractor whose rejection is an `ApiError`
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with place_id
#[derive(Debug, serde::Deserialize)]
pub struct PlaceIdPath {
    pub place_id: String,
}

impl PlaceIdPath {
    /// Parse place_id as a `DiningPlaceId`
    pub fn place_id(&self) -> Result<DiningPlaceId, ApiError> {
        self.place_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid place_id format"))
    }
}
