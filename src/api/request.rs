//! Request types for the Annual Leave Engine API.
//!
//! Every field except the attendance `records` list is optional: missing
//! fields take the same defaults as the library entry points, so a form can
//! post whatever the user has filled in so far.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RawAttendanceRecord, ServiceFields, WageFields, lenient_decimal};

/// Request body for the `/pipeline` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRequest {
    /// Rule id; unknown or missing ids use `law_basic`.
    #[serde(default)]
    pub rule_id: String,
    /// Service and attendance inputs.
    #[serde(default)]
    pub service: ServiceFields,
    /// Wage inputs.
    #[serde(default)]
    pub wage: WageFields,
    /// Leave days granted for the period.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub granted_days: Decimal,
    /// Leave days already taken.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub used_days: Decimal,
}

/// Request body for the `/summarize` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Attendance records already extracted from an export.
    pub records: Vec<RawAttendanceRecord>,
}

/// Request body for the `/suggest` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestRequest {
    /// Rule id; unknown or missing ids use `law_basic`.
    #[serde(default)]
    pub rule_id: String,
    /// Service and attendance inputs.
    #[serde(default)]
    pub service: ServiceFields,
}

/// Request body for the `/payout` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayoutRequest {
    /// Rule id whose rounding policy applies.
    #[serde(default)]
    pub rule_id: String,
    /// Leave days granted for the period.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub granted_days: Decimal,
    /// Leave days already taken.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub used_days: Decimal,
    /// Wage inputs.
    #[serde(default)]
    pub wage: WageFields,
}
