//! Duration text parsing.
//!
//! Attendance exports describe durations as free text, for example
//! `"0 days 6 hours 30 minutes"`. This module pulls the numbers out of such
//! text and converts them into minutes and decimal hours.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_HOURS_PER_DAY, RawAttendanceRecord};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// A duration broken into days, hours and minutes, with derived totals.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::ParsedDuration;
///
/// let parsed = ParsedDuration::default();
/// assert_eq!(parsed.total_minutes.to_string(), "0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDuration {
    /// Whole working days.
    pub days: i64,
    /// Hours on top of the days.
    pub hours: i64,
    /// Minutes on top of the hours.
    pub minutes: i64,
    /// The whole duration in minutes, with one day worth `hours_per_day` hours.
    pub total_minutes: Decimal,
    /// `total_minutes` expressed in decimal hours.
    pub total_hours: Decimal,
}

/// Collects every run of ASCII digits in `text`, left to right.
///
/// Runs too large for an `i64` saturate at `i64::MAX`.
fn digit_runs(text: &str) -> Vec<i64> {
    let mut runs = Vec::new();
    let mut current: Option<i64> = None;

    for c in text.chars() {
        if let Some(digit) = c.to_digit(10) {
            let value = current.unwrap_or(0);
            current = Some(
                value
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(i64::from(digit)))
                    .unwrap_or(i64::MAX),
            );
        } else if let Some(value) = current.take() {
            runs.push(value);
        }
    }
    if let Some(value) = current {
        runs.push(value);
    }

    runs
}

/// Parses a free-text duration into days, hours and minutes.
///
/// The numbers in `text` are read in order as days, hours and minutes; any
/// surrounding text is ignored:
/// - three or more numbers: the first three are days, hours, minutes
/// - two numbers: days and hours
/// - one number: days (a lone number is always read as days)
/// - no numbers, or blank text: a zero duration
///
/// A non-positive `hours_per_day` is replaced by 8. Parsing never fails.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::parse_duration;
/// use rust_decimal::Decimal;
///
/// let parsed = parse_duration("0 days 6 hours 30 minutes", Decimal::from(8));
/// assert_eq!((parsed.days, parsed.hours, parsed.minutes), (0, 6, 30));
/// assert_eq!(parsed.total_minutes, Decimal::from(390));
/// assert_eq!(parsed.total_hours, Decimal::new(65, 1));
/// ```
pub fn parse_duration(text: &str, hours_per_day: Decimal) -> ParsedDuration {
    let text = text.trim();
    if text.is_empty() {
        return ParsedDuration::default();
    }

    let (days, hours, minutes) = match digit_runs(text).as_slice() {
        [d, h, m, ..] => (*d, *h, *m),
        [d, h] => (*d, *h, 0),
        [d] => (*d, 0, 0),
        [] => (0, 0, 0),
    };

    let hours_per_day = if hours_per_day > Decimal::ZERO {
        hours_per_day
    } else {
        DEFAULT_HOURS_PER_DAY
    };

    let total_minutes = Decimal::from(days)
        .checked_mul(hours_per_day)
        .and_then(|v| v.checked_add(Decimal::from(hours)))
        .and_then(|v| v.checked_mul(MINUTES_PER_HOUR))
        .and_then(|v| v.checked_add(Decimal::from(minutes)))
        .unwrap_or(Decimal::MAX);

    ParsedDuration {
        days,
        hours,
        minutes,
        total_minutes,
        total_hours: total_minutes / MINUTES_PER_HOUR,
    }
}

impl RawAttendanceRecord {
    /// Parses this record's duration text using its own working-day length.
    pub fn parse_duration(&self) -> ParsedDuration {
        parse_duration(&self.raw_duration_text, self.hours_per_day)
    }
}
