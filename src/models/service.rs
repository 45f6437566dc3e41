//! Service profile model.
//!
//! Length of service and attendance summary as of the reference date.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Length of service and attendance for one worker, as of a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProfile {
    /// Hire date as supplied by the caller ("YYYY-MM-DD", may be empty).
    pub hire_date: String,
    /// Reference date the calculation is made for (may be empty).
    pub base_date: String,
    /// Service length in fractional years.
    pub service_years: Decimal,
    /// Completed years of service.
    pub full_years: i64,
    /// Percentage of required working days actually attended (0 to 100).
    pub attendance_rate: Decimal,
    /// Months with perfect attendance; drives first-year accrual.
    pub full_months: i64,
}

impl ServiceProfile {
    /// Returns true while the worker has not yet completed one year of service.
    pub fn in_first_year(&self) -> bool {
        self.full_years < 1
    }

    /// Returns true when attendance meets the 80% gate for a full grant.
    pub fn meets_attendance_gate(&self) -> bool {
        self.attendance_rate >= Decimal::from(80)
    }
}
