//! Attendance record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fields::{lenient_decimal_or, lenient_text};

/// Hours in a working day when a record does not say otherwise.
pub const DEFAULT_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

fn default_hours_per_day() -> Decimal {
    DEFAULT_HOURS_PER_DAY
}

fn lenient_hours_per_day<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    lenient_decimal_or(deserializer, DEFAULT_HOURS_PER_DAY)
}

/// One line of an attendance export: a category and a free-text duration.
///
/// # Example
///
/// ```
/// use leave_engine::models::RawAttendanceRecord;
///
/// let record: RawAttendanceRecord = serde_json::from_str(
///     r#"{"category_label": "Annual leave", "raw_duration_text": "0 days 6 hours 30 minutes"}"#,
/// ).unwrap();
/// assert_eq!(record.hours_per_day.to_string(), "8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAttendanceRecord {
    /// Category of the absence or attendance entry, as exported.
    #[serde(default, deserialize_with = "lenient_text")]
    pub category_label: String,
    /// Duration text such as "1 days 2 hours 30 minutes".
    #[serde(default, deserialize_with = "lenient_text")]
    pub raw_duration_text: String,
    /// Working hours in one day for this record.
    #[serde(
        default = "default_hours_per_day",
        deserialize_with = "lenient_hours_per_day"
    )]
    pub hours_per_day: Decimal,
}

impl RawAttendanceRecord {
    /// Creates a record that assumes an 8-hour working day.
    pub fn new(category_label: impl Into<String>, raw_duration_text: impl Into<String>) -> Self {
        Self {
            category_label: category_label.into(),
            raw_duration_text: raw_duration_text.into(),
            hours_per_day: DEFAULT_HOURS_PER_DAY,
        }
    }

    /// Returns a copy of this record with a different working-day length.
    pub fn with_hours_per_day(mut self, hours_per_day: Decimal) -> Self {
        self.hours_per_day = hours_per_day;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_record_with_explicit_hours() {
        let json = r#"{
            "category_label": "Sick leave",
            "raw_duration_text": "1 days 0 hours 0 minutes",
            "hours_per_day": "7.5"
        }"#;
        let record: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_label, "Sick leave");
        assert_eq!(record.hours_per_day, Decimal::new(75, 1));
    }

    #[test]
    fn test_null_hours_per_day_means_default() {
        let json = r#"{"category_label": "x", "raw_duration_text": "1", "hours_per_day": null}"#;
        let record: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.hours_per_day, DEFAULT_HOURS_PER_DAY);
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: RawAttendanceRecord = serde_json::from_str("{}").unwrap();
        assert!(record.category_label.is_empty());
        assert!(record.raw_duration_text.is_empty());
        assert_eq!(record.hours_per_day, DEFAULT_HOURS_PER_DAY);
    }

    #[test]
    fn test_null_label_becomes_empty() {
        let json = r#"{"category_label": null, "raw_duration_text": "0 days 2 hours 0 minutes"}"#;
        let record: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_label, "");
        assert_eq!(record.raw_duration_text, "0 days 2 hours 0 minutes");
    }

    #[test]
    fn test_numeric_duration_cell_is_kept_as_text() {
        let json = r#"{"category_label": "Annual leave", "raw_duration_text": 3}"#;
        let record: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.raw_duration_text, "3");
    }

    #[test]
    fn test_numeric_label_is_kept_as_text() {
        let json = r#"{"category_label": 101, "raw_duration_text": null}"#;
        let record: RawAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category_label, "101");
        assert_eq!(record.raw_duration_text, "");
    }
}
