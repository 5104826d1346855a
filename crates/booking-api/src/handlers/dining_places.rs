//! Dining place handlers

use axum::{extract::State, Json};
use booking_service::dto::{
    CreateDiningPlaceRequest, CreateDiningPlaceResponse, DiningPlaceResponse,
};
use booking_service::DiningPlaceService;

use crate::extractors::{IdPath, PlaceIdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create a dining place
///
/// POST /api/dining-place/create
pub async fn create_dining_place(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateDiningPlaceRequest>,
) -> ApiResult<Json<CreateDiningPlaceResponse>> {
    let service = DiningPlaceService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Json(response))
}

/// Get a dining place
///
/// GET /api/dining-place/:place_id
pub async fn get_dining_place(
    State(state): State<AppState>,
    IdPath(path): IdPath<PlaceIdPath>,
) -> ApiResult<Json<DiningPlaceResponse>> {
    let place_id = path.place_id()?;
    let service = DiningPlaceService::new(state.service_context());
    let response = service.get(place_id).await?;
    Ok(Json(response))
}
