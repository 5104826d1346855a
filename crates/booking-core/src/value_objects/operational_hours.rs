//! Opening hours of a dining place

use chrono::NaiveTime;

use crate::error::DomainError;

/// Daily opening window, both ends as wall-clock time of day
///
/// `open_time` must be strictly before `close_time`; windows that wrap past
/// midnight are not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationalHours {
    open_time: NaiveTime,
    close_time: NaiveTime,
}

impl OperationalHours {
    /// Create a new opening window
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTimeRange` unless `open_time < close_time`
    pub fn new(open_time: NaiveTime, close_time: NaiveTime) -> Result<Self, DomainError> {
        if open_time >= close_time {
            return Err(DomainError::InvalidTimeRange(format!(
                "open_time {} must be before close_time {}",
                time_of_day::format(open_time),
                time_of_day::format(close_time),
            )));
        }
        Ok(Self {
            open_time,
            close_time,
        })
    }

    /// Rebuild from a stored row without re-checking the ordering
    ///
    /// The `dining_places` table carries the same check constraint.
    pub fn from_stored(open_time: NaiveTime, close_time: NaiveTime) -> Self {
        Self {
            open_time,
            close_time,
        }
    }

    #[inline]
    pub fn open_time(&self) -> NaiveTime {
        self.open_time
    }

    #[inline]
    pub fn close_time(&self) -> NaiveTime {
        self.close_time
    }
}

/// Time-of-day text format used on the wire: `HH:MM`, or `HH:MM:SS` when
/// seconds are present.
pub mod time_of_day {
    use chrono::{NaiveTime, Timelike};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

    /// Parse `HH:MM` or `HH:MM:SS`
    pub fn parse(s: &str) -> Option<NaiveTime> {
        let s = s.trim();
        FORMATS
            .iter()
            .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
    }

    /// Format dropping seconds when they are zero
    pub fn format(time: NaiveTime) -> String {
        if time.second() == 0 {
            time.format("%H:%M").to_string()
        } else {
            time.format("%H:%M:%S").to_string()
        }
    }

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            de::Error::custom(format!("invalid time of day '{raw}', expected HH:MM or HH:MM:SS"))
        })
    }
}

impl std::fmt::Display for OperationalHours {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            time_of_day::format(self.open_time),
            time_of_day::format(self.close_time)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        time_of_day::parse(s).unwrap()
    }

    #[test]
    fn test_parse_short_and_long_forms() {
        assert_eq!(t("09:00"), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(t("22:15:30"), NaiveTime::from_hms_opt(22, 15, 30).unwrap());
        assert!(time_of_day::parse("9am").is_none());
        assert!(time_of_day::parse("25:00").is_none());
    }

    #[test]
    fn test_format_drops_zero_seconds() {
        assert_eq!(time_of_day::format(t("09:00")), "09:00");
        assert_eq!(time_of_day::format(t("09:00:05")), "09:00:05");
    }

    #[test]
    fn test_new_accepts_ordered_window() {
        let hours = OperationalHours::new(t("09:00"), t("22:00")).unwrap();
        assert_eq!(hours.open_time(), t("09:00"));
        assert_eq!(hours.close_time(), t("22:00"));
        assert_eq!(hours.to_string(), "09:00-22:00");
    }

    #[test]
    fn test_new_rejects_reversed_or_empty_window() {
        let err = OperationalHours::new(t("22:00"), t("09:00")).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTimeRange(_)));
        assert!(OperationalHours::new(t("09:00"), t("09:00")).is_err());
    }

    #[test]
    fn test_serde_helpers() {
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrapper {
            #[serde(with = "time_of_day")]
            at: NaiveTime,
        }

        let w: Wrapper = serde_json::from_str(r#"{"at":"07:30"}"#).unwrap();
        assert_eq!(w.at, t("07:30"));
        assert_eq!(serde_json::to_string(&w).unwrap(), r#"{"at":"07:30"}"#);
        assert!(serde_json::from_str::<Wrapper>(r#"{"at":"noon"}"#).is_err());
    }
}
