//! Dining place entity

use chrono::{DateTime, Utc};

use crate::value_objects::{DiningPlaceId, OperationalHours};

/// A restaurant or other bookable venue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiningPlace {
    pub id: DiningPlaceId,
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub hours: OperationalHours,
    pub created_at: DateTime<Utc>,
}

/// Data for a dining place that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDiningPlace {
    pub name: String,
    pub address: String,
    pub phone_no: Option<String>,
    pub website: Option<String>,
    pub hours: OperationalHours,
}

impl NewDiningPlace {
    /// Create a new dining place with required fields
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        hours: OperationalHours,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone_no: None,
            website: None,
            hours,
        }
    }

    pub fn with_phone_no(mut self, phone_no: Option<String>) -> Self {
        self.phone_no = phone_no.filter(|p| !p.trim().is_empty());
        self
    }

    pub fn with_website(mut self, website: Option<String>) -> Self {
        self.website = website.filter(|w| !w.trim().is_empty());
        self
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;

    use super::*;

    fn hours() -> OperationalHours {
        OperationalHours::new(
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_builder_sets_optional_fields() {
        let place = NewDiningPlace::new("Cafe", "1 Main St", hours())
            .with_phone_no(Some("5551234567".to_string()))
            .with_website(Some("https://cafe.example".to_string()));

        assert_eq!(place.phone_no.as_deref(), Some("5551234567"));
        assert_eq!(place.website.as_deref(), Some("https://cafe.example"));
    }

    #[test]
    fn test_blank_optionals_become_none() {
        let place = NewDiningPlace::new("Cafe", "1 Main St", hours())
            .with_phone_no(Some("  ".to_string()))
            .with_website(Some(String::new()));

        assert!(place.phone_no.is_none());
        assert!(place.website.is_none());
    }
}
