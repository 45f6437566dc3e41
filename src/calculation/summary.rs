//! Attendance record summarization.
//!
//! This module groups attendance records by category and totals their
//! durations, re-expressing each total as days/hours/minutes and as decimal
//! hours.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_HOURS_PER_DAY, RawAttendanceRecord};

/// Label used for records whose category is blank.
pub const UNSPECIFIED_CATEGORY: &str = "unspecified";

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Totals for one attendance category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// The trimmed category label.
    pub category_label: String,
    /// Number of records in the category.
    pub count: usize,
    /// Sum of the records' durations in minutes.
    pub total_minutes: Decimal,
    /// Working-day length used for the day conversions.
    pub hours_per_day: Decimal,
    /// Whole days in the total.
    pub days: i64,
    /// Whole hours left after the days.
    pub hours: i64,
    /// Minutes left after the hours.
    pub minutes: i64,
    /// The total in hours, rounded to one decimal place.
    pub decimal_hours: Decimal,
    /// Whole days in `decimal_hours`.
    pub converted_days: i64,
    /// Hours left after `converted_days`, rounded to one decimal place.
    pub converted_remaining_hours: Decimal,
    /// Display label, e.g. "1 days 2 hours 30 minutes".
    pub sum_d_h_m: String,
    /// Display label, e.g. "1 days 2.5 hours".
    pub converted_days_hours: String,
}

struct CategoryTotals {
    count: usize,
    total_minutes: Decimal,
    hours_per_day: Decimal,
}

fn whole(value: Decimal) -> i64 {
    value.trunc().to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

impl CategorySummary {
    fn from_totals(category_label: String, totals: CategoryTotals) -> Self {
        let CategoryTotals {
            count,
            total_minutes,
            hours_per_day,
        } = totals;

        let minutes_per_day = hours_per_day
            .checked_mul(MINUTES_PER_HOUR)
            .unwrap_or(Decimal::MAX);
        let day_divisor = minutes_per_day.trunc();
        let days = if day_divisor > Decimal::ZERO {
            (total_minutes / day_divisor).floor()
        } else {
            Decimal::ZERO
        };
        // days * minutes_per_day can exceed total_minutes when the day length
        // has a fractional minute, so the remainder may go negative.
        let remaining_minutes = days
            .checked_mul(minutes_per_day)
            .and_then(|used| total_minutes.checked_sub(used))
            .unwrap_or(Decimal::MIN);
        let hours = (remaining_minutes / MINUTES_PER_HOUR).floor();
        let minutes = hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|used| remaining_minutes.checked_sub(used))
            .unwrap_or(Decimal::ZERO);

        let decimal_hours = (total_minutes / MINUTES_PER_HOUR).round_dp(1);
        let converted_days = decimal_hours
            .checked_div(hours_per_day)
            .unwrap_or(Decimal::MAX)
            .floor();
        let converted_remaining_hours = converted_days
            .checked_mul(hours_per_day)
            .and_then(|used| decimal_hours.checked_sub(used))
            .unwrap_or(Decimal::ZERO)
            .round_dp(1);

        let (days, hours, minutes) = (whole(days), whole(hours), whole(minutes));
        let converted_days = whole(converted_days);

        Self {
            sum_d_h_m: format!("{} days {} hours {} minutes", days, hours, minutes),
            converted_days_hours: format!(
                "{} days {:.1} hours",
                converted_days, converted_remaining_hours
            ),
            category_label,
            count,
            total_minutes,
            hours_per_day,
            days,
            hours,
            minutes,
            decimal_hours,
            converted_days,
            converted_remaining_hours,
        }
    }
}

/// Groups attendance records by category and totals their durations.
///
/// Categories are trimmed, and a blank category is reported as
/// [`UNSPECIFIED_CATEGORY`]. Each record is parsed with its own
/// `hours_per_day`; a category keeps the working-day length of the first
/// record seen for it (non-positive values become 8). The result is sorted by
/// category label whatever the input order.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::summarize_nice_records;
/// use leave_engine::models::RawAttendanceRecord;
///
/// let records = vec![
///     RawAttendanceRecord::new("Sick leave", "0 days 4 hours 0 minutes"),
///     RawAttendanceRecord::new("Annual leave", "1 days 2 hours 30 minutes"),
///     RawAttendanceRecord::new("Annual leave", "0 days 6 hours 0 minutes"),
/// ];
///
/// let summaries = summarize_nice_records(&records);
/// assert_eq!(summaries[0].category_label, "Annual leave");
/// assert_eq!(summaries[0].count, 2);
/// assert_eq!(summaries[0].sum_d_h_m, "2 days 0 hours 30 minutes");
/// assert_eq!(summaries[1].category_label, "Sick leave");
/// ```
pub fn summarize_nice_records(records: &[RawAttendanceRecord]) -> Vec<CategorySummary> {
    let mut by_category: BTreeMap<String, CategoryTotals> = BTreeMap::new();

    for record in records {
        let parsed = record.parse_duration();
        let label = match record.category_label.trim() {
            "" => UNSPECIFIED_CATEGORY,
            label => label,
        };

        let totals = by_category
            .entry(label.to_string())
            .or_insert_with(|| CategoryTotals {
                count: 0,
                total_minutes: Decimal::ZERO,
                hours_per_day: if record.hours_per_day > Decimal::ZERO {
                    record.hours_per_day
                } else {
                    DEFAULT_HOURS_PER_DAY
                },
            });
        totals.count += 1;
        totals.total_minutes = totals
            .total_minutes
            .checked_add(parsed.total_minutes)
            .unwrap_or(Decimal::MAX);
    }

    by_category
        .into_iter()
        .map(|(label, totals)| CategorySummary::from_totals(label, totals))
        .collect()
}
