//! Monetary rounding.
//!
//! Payouts are brought onto a currency step (10 by default, which always
//! drops the single-unit digit) using a floor, half-up or ceiling policy.

use rust_decimal::Decimal;

use crate::models::RoundingMode;

/// Nudge added before half-up rounding so values a hair under a midpoint
/// still round up.
const HALF_UP_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds a payout amount onto a currency step.
///
/// - an amount of zero or less gives exactly zero
/// - a step below 1 is treated as 1
/// - [`RoundingMode::Floor`]: largest multiple of `step` not above `amount`
/// - [`RoundingMode::Ceil`]: smallest multiple of `step` not below `amount`
/// - [`RoundingMode::Round`]: nearest multiple of `step`, halves rounding up
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::round_money;
/// use leave_engine::models::RoundingMode;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("454545.45").unwrap();
/// assert_eq!(round_money(amount, 10, RoundingMode::Floor), Decimal::from(454540));
/// assert_eq!(round_money(amount, 10, RoundingMode::Round), Decimal::from(454550));
/// assert_eq!(round_money(amount, 10, RoundingMode::Ceil), Decimal::from(454550));
/// ```
pub fn round_money(amount: Decimal, step: i64, mode: RoundingMode) -> Decimal {
    if amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let step = Decimal::from(step.max(1));
    let units = amount / step;

    let rounded_units = match mode {
        RoundingMode::Floor => units.floor(),
        RoundingMode::Ceil => units.ceil(),
        RoundingMode::Round => units
            .checked_add(HALF_UP_EPSILON + HALF)
            .map_or(units, |nudged| nudged.trunc()),
    };

    rounded_units.checked_mul(step).unwrap_or(Decimal::MAX)
}
