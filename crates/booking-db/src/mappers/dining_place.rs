//! Dining place entity <-> model mapper

use booking_core::entities::{DiningPlace, NewDiningPlace};
use booking_core::value_objects::{DiningPlaceId, OperationalHours};
use chrono::NaiveTime;

use crate::models::DiningPlaceModel;

impl From<DiningPlaceModel> for DiningPlace {
    fn from(model: DiningPlaceModel) -> Self {
        DiningPlace {
            id: DiningPlaceId::new(model.id),
            name: model.name,
            address: model.address,
            phone_no: model.phone_no,
            website: model.website,
            hours: OperationalHours::from_stored(model.open_time, model.close_time),
            created_at: model.created_at,
        }
    }
}

/// Borrowed values for inserting a dining place
pub struct DiningPlaceInsert<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub phone_no: Option<&'a str>,
    pub website: Option<&'a str>,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
}

impl<'a> DiningPlaceInsert<'a> {
    pub fn new(place: &'a NewDiningPlace) -> Self {
        Self {
            name: &place.name,
            address: &place.address,
            phone_no: place.phone_no.as_deref(),
            website: place.website.as_deref(),
            open_time: place.hours.open_time(),
            close_time: place.hours.close_time(),
        }
    }
}
