//! The full leave calculation pipeline.
//!
//! Combines rule lookup, entitlement suggestion and payout into one call.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RuleCatalog;
use crate::models::{PipelineResult, ServiceFields, ServiceProfile, WageFields, WageSnapshot};

use super::{calc_unused_leave_payout, suggest_annual_days};

/// Runs the full calculation against the built-in rule catalog.
///
/// Looks up the rule (unknown ids use `law_basic`), normalizes the service
/// and wage fields, suggests entitled days and computes the unused-leave
/// payout for the given granted and used days.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::full_pipeline;
/// use leave_engine::models::{ServiceFields, WageFields};
/// use rust_decimal::Decimal;
///
/// let service = ServiceFields {
///     full_years: 1,
///     full_months: 12,
///     attendance_rate: Decimal::from(85),
///     ..ServiceFields::default()
/// };
/// let wage = WageFields {
///     wage_type: "monthly".to_string(),
///     wage_amount: Decimal::from(2_000_000),
///     monthly_work_days: Decimal::from(22),
///     ..WageFields::default()
/// };
///
/// let result = full_pipeline("law_basic", service, wage, Decimal::from(15), Decimal::from(10));
/// assert_eq!(result.suggestion.suggested_days, Some(Decimal::from(15)));
/// assert_eq!(result.payout.payout_rounded, Decimal::from(454_540));
/// ```
pub fn full_pipeline(
    rule_id: &str,
    service: ServiceFields,
    wage: WageFields,
    granted_days: Decimal,
    used_days: Decimal,
) -> PipelineResult {
    full_pipeline_with(RuleCatalog::builtin(), rule_id, service, wage, granted_days, used_days)
}

/// Runs the full calculation against a specific rule catalog.
pub fn full_pipeline_with(
    catalog: &RuleCatalog,
    rule_id: &str,
    service: ServiceFields,
    wage: WageFields,
    granted_days: Decimal,
    used_days: Decimal,
) -> PipelineResult {
    let rule = catalog.get(rule_id).clone();
    let service: ServiceProfile = service.into();
    let wage: WageSnapshot = wage.into();
    debug!(
        requested_rule = %rule_id,
        rule_id = %rule.id,
        grant_type = rule.grant_type.as_str(),
        "Selected rule profile"
    );

    let suggestion = suggest_annual_days(&rule, &service);
    debug!(
        suggested_days = ?suggestion.suggested_days,
        rationale = %suggestion.rationale,
        "Suggested annual leave days"
    );

    let payout = calc_unused_leave_payout(&rule, granted_days, used_days, &wage.profile);
    debug!(
        unused_days = %payout.unused_days,
        payout_raw = %payout.payout_raw,
        payout_rounded = %payout.payout_rounded,
        rounding_mode = payout.rounding_mode.as_str(),
        "Calculated unused leave payout"
    );

    PipelineResult {
        rule,
        service,
        wage,
        suggestion,
        payout,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GrantType, RoundingMode, RuleProfile, WageType};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service(full_years: i64, full_months: i64, rate: &str) -> ServiceFields {
        ServiceFields {
            hire_date: "2024-03-01".to_string(),
            base_date: "2025-03-01".to_string(),
            service_years: Decimal::from(full_years),
            full_years,
            attendance_rate: dec(rate),
            full_months,
        }
    }

    fn monthly_wage() -> WageFields {
        WageFields {
            wage_type: "monthly".to_string(),
            wage_amount: dec("2000000"),
            hours_per_day: Decimal::ZERO,
            monthly_work_days: dec("22"),
        }
    }

    #[test]
    fn test_end_to_end_law_basic() {
        let result = full_pipeline("law_basic", service(1, 12, "85"), monthly_wage(), dec("15"), dec("10"));

        assert_eq!(result.rule.id, "law_basic");
        assert_eq!(result.suggestion.suggested_days, Some(dec("15")));
        assert_eq!(result.wage.daily_wage.round_dp(2), dec("90909.09"));
        assert_eq!(result.payout.unused_days, dec("5"));
        assert_eq!(result.payout.payout_raw.round_dp(2), dec("454545.45"));
        assert_eq!(result.payout.payout_rounded, dec("454540"));
    }

    #[test]
    fn test_custom_rule_never_suggests() {
        let result = full_pipeline("custom", service(5, 12, "100"), monthly_wage(), dec("20"), dec("5"));
        assert_eq!(result.rule.grant_type, GrantType::ManualOnly);
        assert_eq!(result.suggestion.suggested_days, None);
        assert_eq!(result.payout.unused_days, dec("15"));
    }

    #[test]
    fn test_wage_guideline_rule_still_pays_out() {
        let result = full_pipeline(
            "gw_wage_guideline",
            service(3, 12, "90"),
            monthly_wage(),
            dec("15"),
            dec("10"),
        );
        assert_eq!(result.suggestion.suggested_days, None);
        assert_eq!(result.payout.payout_rounded, dec("454540"));
    }

    #[test]
    fn test_school_cba_rule() {
        let result = full_pipeline("gw_school_cba", service(2, 12, "90"), monthly_wage(), dec("26"), dec("20"));
        assert_eq!(result.suggestion.suggested_days, Some(dec("26")));
    }

    #[test]
    fn test_unknown_rule_uses_law_basic() {
        let result = full_pipeline("nonexistent", service(3, 12, "95"), monthly_wage(), dec("0"), dec("0"));
        assert_eq!(result.rule.id, "law_basic");
        assert_eq!(result.suggestion.suggested_days, Some(dec("16")));
    }

    #[test]
    fn test_default_fields_give_zero_result() {
        let result = full_pipeline(
            "law_basic",
            ServiceFields::default(),
            WageFields::default(),
            Decimal::ZERO,
            Decimal::ZERO,
        );
        assert_eq!(result.service.hire_date, "");
        assert_eq!(result.wage.profile.wage_type, WageType::Hourly);
        assert_eq!(result.wage.daily_wage, Decimal::ZERO);
        assert_eq!(result.suggestion.suggested_days, Some(Decimal::ZERO));
        assert_eq!(result.payout.payout_rounded, Decimal::ZERO);
    }

    #[test]
    fn test_custom_catalog_rounding_policy() {
        let catalog = RuleCatalog::new(vec![
            RuleProfile::new("law_basic", "Statutory basic", GrantType::LawBasic)
                .with_rounding(100, RoundingMode::Round),
        ])
        .unwrap();

        let result = full_pipeline_with(
            &catalog,
            "law_basic",
            service(1, 12, "85"),
            monthly_wage(),
            dec("15"),
            dec("10"),
        );
        assert_eq!(result.payout.rounding_step, 100);
        assert_eq!(result.payout.payout_rounded, dec("454500"));
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = full_pipeline("custom", service(0, 4, "100"), monthly_wage(), dec("4"), dec("1"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["rule"]["id"], "custom");
        assert_eq!(json["rule"]["grant_type"], "manual_only");
        assert!(json["suggestion"]["suggested_days"].is_null());
        assert_eq!(json["wage"]["wage_type"], "monthly");
        assert!(json["wage"]["daily_wage"].is_string());
        assert_eq!(json["payout"]["rounding_mode"], "floor");
    }

    #[test]
    fn test_oversized_wages_saturate_instead_of_failing() {
        let hourly = WageFields {
            wage_type: "hourly".to_string(),
            wage_amount: dec("79228162514264337593543950335"),
            hours_per_day: dec("2"),
            monthly_work_days: Decimal::ZERO,
        };
        let result = full_pipeline("law_basic", service(2, 12, "90"), hourly, dec("3"), dec("1"));
        assert_eq!(result.wage.daily_wage, Decimal::MAX);
        assert_eq!(result.payout.payout_raw, Decimal::MAX);
        assert!(result.payout.payout_rounded > Decimal::ZERO);

        let monthly = WageFields {
            wage_type: "monthly".to_string(),
            wage_amount: dec("10000000000000000000000000000"),
            hours_per_day: Decimal::ZERO,
            monthly_work_days: dec("0.0001"),
        };
        let result = full_pipeline("custom", service(2, 12, "90"), monthly, dec("1"), dec("0"));
        assert_eq!(result.wage.daily_wage, Decimal::MAX);
    }

    #[test]
    fn test_unknown_wage_type_is_echoed() {
        let wage = WageFields {
            wage_type: "weekly".to_string(),
            ..monthly_wage()
        };
        let result = full_pipeline("law_basic", service(2, 12, "90"), wage, dec("5"), dec("0"));
        assert_eq!(result.wage.profile.wage_type, WageType::Unrecognized);
        assert_eq!(result.wage.wage_type_input, "weekly");
        assert_eq!(result.payout.payout_rounded, Decimal::ZERO);
    }
}
