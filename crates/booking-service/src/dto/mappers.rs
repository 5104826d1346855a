//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! request DTOs into the domain values the repositories accept.

use booking_core::entities::{DiningPlace, NewDiningPlace, User};
use booking_core::error::DomainError;
use booking_core::value_objects::OperationalHours;

use super::requests::CreateDiningPlaceRequest;
use super::responses::{DiningPlaceDetails, OperationalHoursResponse, UserResponse};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Dining Place Mappers
// ============================================================================

impl From<DiningPlace> for DiningPlaceDetails {
    fn from(place: DiningPlace) -> Self {
        Self {
            id: place.id,
            name: place.name,
            address: place.address,
            phone_no: place.phone_no,
            website: place.website,
            operational_hours: OperationalHoursResponse {
                open_time: place.hours.open_time(),
                close_time: place.hours.close_time(),
            },
        }
    }
}

impl TryFrom<CreateDiningPlaceRequest> for NewDiningPlace {
    type Error = DomainError;

    fn try_from(request: CreateDiningPlaceRequest) -> Result<Self, Self::Error> {
        let hours = OperationalHours::new(
            request.operational_hours.open_time,
            request.operational_hours.close_time,
        )?;

        Ok(NewDiningPlace::new(request.name, request.address, hours)
            .with_phone_no(request.phone_no)
            .with_website(request.website))
    }
}
