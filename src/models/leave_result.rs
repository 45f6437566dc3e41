//! Leave calculation result models.
//!
//! This module contains the [`PipelineResult`] type and the per-stage results
//! it bundles: the entitlement [`SuggestionResult`] and the unused-leave
//! [`PayoutResult`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{RoundingMode, RuleProfile, ServiceProfile, WageFields, WageProfile};

/// A suggested number of leave days and the reasoning behind it.
///
/// `suggested_days` is `None` when the rule does not compute a day count and
/// the caller has to supply one.
///
/// # Example
///
/// ```
/// use leave_engine::models::SuggestionResult;
///
/// let suggestion = SuggestionResult {
///     suggested_days: None,
///     rationale: "Day count must be entered manually".to_string(),
/// };
/// let json = serde_json::to_value(&suggestion).unwrap();
/// assert!(json["suggested_days"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Suggested leave days, or `None` when supplied externally.
    pub suggested_days: Option<Decimal>,
    /// Human-readable explanation embedding the inputs and formula applied.
    pub rationale: String,
}

/// The outcome of an unused-leave payout calculation.
///
/// Both the unrounded and the rounded payout are kept, together with the
/// rounding policy actually applied, so the effect of rounding can be audited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutResult {
    /// Granted days after clamping negatives to zero.
    pub granted_days: Decimal,
    /// Used days after clamping negatives to zero.
    pub used_days: Decimal,
    /// Days granted but not used; never negative.
    pub unused_days: Decimal,
    /// Daily-equivalent wage used for the payout.
    pub daily_wage_raw: Decimal,
    /// Unused days times daily wage, before rounding.
    pub payout_raw: Decimal,
    /// Payout after applying the rounding policy.
    pub payout_rounded: Decimal,
    /// Rounding step taken from the rule.
    pub rounding_step: i64,
    /// Rounding mode taken from the rule.
    pub rounding_mode: RoundingMode,
}

/// A wage profile together with its derived daily wage.
///
/// `wage_type_input` keeps the wage type exactly as the caller supplied it,
/// so an unrecognized type stays visible next to the `"unrecognized"`
/// classification.
///
/// # Example
///
/// ```
/// use leave_engine::models::{WageFields, WageSnapshot, WageType};
///
/// let snapshot: WageSnapshot = WageFields {
///     wage_type: "weekly".to_string(),
///     ..WageFields::default()
/// }
/// .into();
/// assert_eq!(snapshot.profile.wage_type, WageType::Unrecognized);
/// assert_eq!(snapshot.wage_type_input, "weekly");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSnapshot {
    /// The wage inputs.
    #[serde(flatten)]
    pub profile: WageProfile,
    /// The wage type text as supplied.
    pub wage_type_input: String,
    /// The daily-equivalent wage derived from `profile`.
    pub daily_wage: Decimal,
}

impl From<WageProfile> for WageSnapshot {
    fn from(profile: WageProfile) -> Self {
        let daily_wage = profile.daily_wage();
        Self {
            wage_type_input: profile.wage_type.as_str().to_string(),
            profile,
            daily_wage,
        }
    }
}

impl From<WageFields> for WageSnapshot {
    fn from(fields: WageFields) -> Self {
        let wage_type_input = fields.wage_type.clone();
        let mut snapshot = WageSnapshot::from(WageProfile::from(fields));
        snapshot.wage_type_input = wage_type_input;
        snapshot
    }
}

/// The complete result of a leave calculation.
///
/// Bundles the rule that was applied, the normalized service and wage
/// inputs, the suggested entitlement and the payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResult {
    /// The rule profile the calculation used.
    pub rule: RuleProfile,
    /// Service inputs after normalization.
    pub service: ServiceProfile,
    /// Wage inputs after normalization, with the derived daily wage.
    pub wage: WageSnapshot,
    /// Suggested entitlement.
    pub suggestion: SuggestionResult,
    /// Unused-leave payout.
    pub payout: PayoutResult,
}
