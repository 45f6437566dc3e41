//! Unused annual leave payout calculation.
//!
//! Leave days granted but not taken by the reference date are paid out at
//! the daily-equivalent wage, rounded per the rule's monetary policy.

use rust_decimal::Decimal;

use crate::models::{PayoutResult, RuleProfile, WageProfile};

use super::round_money;

/// Calculates the cash payout owed for unused leave days.
///
/// Negative granted or used day counts are treated as zero, and unused days
/// never go below zero. The raw payout is unused days times the daily wage;
/// the rounded payout applies the rule's `money_step` (10 when unset, 1
/// when negative) and `money_mode`. The result reports the step applied.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::calc_unused_leave_payout;
/// use leave_engine::models::{GrantType, RuleProfile, WageProfile, WageType};
/// use rust_decimal::Decimal;
///
/// let rule = RuleProfile::new("law_basic", "Statutory basic", GrantType::LawBasic);
/// let wage = WageProfile {
///     wage_type: WageType::Monthly,
///     wage_amount: Decimal::from(2_000_000),
///     hours_per_day: Decimal::ZERO,
///     monthly_work_days: Decimal::from(22),
/// };
///
/// let payout = calc_unused_leave_payout(&rule, Decimal::from(15), Decimal::from(10), &wage);
/// assert_eq!(payout.unused_days, Decimal::from(5));
/// assert_eq!(payout.payout_rounded, Decimal::from(454_540));
/// ```
pub fn calc_unused_leave_payout(
    rule: &RuleProfile,
    granted_days: Decimal,
    used_days: Decimal,
    wage: &WageProfile,
) -> PayoutResult {
    let granted_days = granted_days.max(Decimal::ZERO);
    let used_days = used_days.max(Decimal::ZERO);
    let unused_days = (granted_days - used_days).max(Decimal::ZERO);

    let daily_wage = wage.daily_wage();
    let payout_raw = unused_days
        .checked_mul(daily_wage)
        .unwrap_or(Decimal::MAX);

    let rounding_step = rule.effective_money_step().max(1);
    let rounding_mode = rule.money_mode;
    let payout_rounded = round_money(payout_raw, rounding_step, rounding_mode);

    PayoutResult {
        granted_days,
        used_days,
        unused_days,
        daily_wage_raw: daily_wage,
        payout_raw,
        payout_rounded,
        rounding_step,
        rounding_mode,
    }
}
