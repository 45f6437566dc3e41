//! Loosely-typed input fields accepted at the engine boundary.
//!
//! Callers embedded in a form UI send whatever the user has typed so far.
//! [`ServiceFields`] and [`WageFields`] accept that input with documented
//! defaults and are the only place where coercion happens: missing text
//! becomes an empty string, missing or unparsable numbers become zero.
//! Converting them into [`ServiceProfile`] and [`WageProfile`] yields the
//! strict types the calculations work on.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};

use super::{ServiceProfile, WageProfile, WageType};

/// A scalar as it may arrive from a form: a number, a numeric string or a flag.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseScalar {
    Number(Decimal),
    Flag(bool),
    Text(String),
}

impl LooseScalar {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            LooseScalar::Number(n) => Some(*n),
            LooseScalar::Flag(flag) => Some(if *flag { Decimal::ONE } else { Decimal::ZERO }),
            LooseScalar::Text(text) => parse_decimal_text(text),
        }
    }

    fn into_text(self) -> String {
        match self {
            LooseScalar::Number(n) => n.to_string(),
            LooseScalar::Flag(flag) => flag.to_string(),
            LooseScalar::Text(text) => text,
        }
    }
}

fn parse_decimal_text(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Deserializes a number leniently, using `default` when the value is null,
/// blank or unparsable.
pub(crate) fn lenient_decimal_or<'de, D>(deserializer: D, default: Decimal) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseScalar>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.to_decimal()).unwrap_or(default))
}

/// Deserializes a number leniently, using zero when the value is null, blank
/// or unparsable.
pub(crate) fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_decimal_or(deserializer, Decimal::ZERO)
}

fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_decimal(deserializer)?.trunc();
    Ok(value.to_i64().unwrap_or(if value.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    }))
}

/// Deserializes text leniently: null becomes an empty string and numbers
/// or flags keep their textual form.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseScalar>::deserialize(deserializer)?;
    Ok(value.map(LooseScalar::into_text).unwrap_or_default())
}

fn default_wage_type() -> String {
    "hourly".to_string()
}

/// Service inputs as supplied by a caller.
///
/// # Example
///
/// ```
/// use leave_engine::models::{ServiceFields, ServiceProfile};
///
/// let fields: ServiceFields =
///     serde_json::from_str(r#"{"full_years": "3", "attendance_rate": 95.5}"#).unwrap();
/// let service: ServiceProfile = fields.into();
/// assert_eq!(service.full_years, 3);
/// assert_eq!(service.full_months, 0);
/// assert_eq!(service.hire_date, "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFields {
    /// Hire date; empty when missing.
    #[serde(default, deserialize_with = "lenient_text")]
    pub hire_date: String,
    /// Reference date; empty when missing.
    #[serde(default, deserialize_with = "lenient_text")]
    pub base_date: String,
    /// Service length in fractional years; zero when missing.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub service_years: Decimal,
    /// Completed years of service; fractions are truncated.
    #[serde(default, deserialize_with = "lenient_int")]
    pub full_years: i64,
    /// Attendance percentage; zero when missing.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub attendance_rate: Decimal,
    /// Months with perfect attendance; fractions are truncated.
    #[serde(default, deserialize_with = "lenient_int")]
    pub full_months: i64,
}

/// Wage inputs as supplied by a caller.
///
/// The wage type defaults to `"hourly"`. An unknown wage type is kept as
/// [`WageType::Unrecognized`], which yields a daily wage of zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageFields {
    /// One of "hourly", "daily" or "monthly".
    #[serde(default = "default_wage_type", deserialize_with = "lenient_text")]
    pub wage_type: String,
    /// Wage amount in the unit named by `wage_type`.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub wage_amount: Decimal,
    /// Working hours per day.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub hours_per_day: Decimal,
    /// Working days per month.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub monthly_work_days: Decimal,
}

impl Default for WageFields {
    fn default() -> Self {
        Self {
            wage_type: default_wage_type(),
            wage_amount: Decimal::ZERO,
            hours_per_day: Decimal::ZERO,
            monthly_work_days: Decimal::ZERO,
        }
    }
}

impl From<ServiceFields> for ServiceProfile {
    fn from(fields: ServiceFields) -> Self {
        ServiceProfile {
            hire_date: fields.hire_date,
            base_date: fields.base_date,
            service_years: fields.service_years,
            full_years: fields.full_years,
            attendance_rate: fields.attendance_rate,
            full_months: fields.full_months,
        }
    }
}

impl From<WageFields> for WageProfile {
    fn from(fields: WageFields) -> Self {
        WageProfile {
            wage_type: WageType::from_str_lenient(&fields.wage_type),
            wage_amount: fields.wage_amount,
            hours_per_day: fields.hours_per_day,
            monthly_work_days: fields.monthly_work_days,
        }
    }
}
