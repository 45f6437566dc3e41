//! Wage profile model and related types.
//!
//! This module defines the [`WageProfile`] struct and the [`WageType`] enum
//! used to derive the daily-equivalent wage behind a leave payout.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The unit a wage amount is quoted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageType {
    /// Wage amount is per hour.
    Hourly,
    /// Wage amount is per day.
    Daily,
    /// Wage amount is per month.
    Monthly,
    /// A wage type the engine does not know; its daily wage is zero.
    Unrecognized,
}

impl WageType {
    /// Parses a wage type name, mapping unknown names to [`WageType::Unrecognized`].
    pub fn from_str_lenient(wage_type: &str) -> Self {
        match wage_type.trim() {
            "hourly" => WageType::Hourly,
            "daily" => WageType::Daily,
            "monthly" => WageType::Monthly,
            _ => WageType::Unrecognized,
        }
    }

    /// Returns the wage type name as used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            WageType::Hourly => "hourly",
            WageType::Daily => "daily",
            WageType::Monthly => "monthly",
            WageType::Unrecognized => "unrecognized",
        }
    }
}

/// Wage inputs for a payout calculation.
///
/// # Example
///
/// ```
/// use leave_engine::models::{WageProfile, WageType};
/// use rust_decimal::Decimal;
///
/// let wage = WageProfile {
///     wage_type: WageType::Hourly,
///     wage_amount: Decimal::from(10_000),
///     hours_per_day: Decimal::from(8),
///     monthly_work_days: Decimal::ZERO,
/// };
/// assert_eq!(wage.daily_wage(), Decimal::from(80_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageProfile {
    /// The unit `wage_amount` is quoted in.
    pub wage_type: WageType,
    /// Hourly, daily or monthly wage amount.
    pub wage_amount: Decimal,
    /// Contracted working hours per day.
    pub hours_per_day: Decimal,
    /// Working days per month used to break down a monthly wage.
    pub monthly_work_days: Decimal,
}

impl WageProfile {
    /// Returns the theoretical one-day wage.
    ///
    /// Hourly and monthly wages need a positive amount and a positive
    /// divisor or multiplier; otherwise the daily wage is zero. A result too
    /// large to represent saturates at `Decimal::MAX`.
    pub fn daily_wage(&self) -> Decimal {
        match self.wage_type {
            WageType::Hourly => {
                if self.wage_amount > Decimal::ZERO && self.hours_per_day > Decimal::ZERO {
                    self.wage_amount
                        .checked_mul(self.hours_per_day)
                        .unwrap_or(Decimal::MAX)
                } else {
                    Decimal::ZERO
                }
            }
            WageType::Daily => self.wage_amount.max(Decimal::ZERO),
            WageType::Monthly => {
                if self.wage_amount > Decimal::ZERO && self.monthly_work_days > Decimal::ZERO {
                    self.wage_amount
                        .checked_div(self.monthly_work_days)
                        .unwrap_or(Decimal::MAX)
                } else {
                    Decimal::ZERO
                }
            }
            WageType::Unrecognized => Decimal::ZERO,
        }
    }
}
