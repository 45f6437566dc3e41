//! Annual leave entitlement suggestion.
//!
//! This module suggests how many annual leave days a worker is entitled to,
//! given a rule profile and the worker's service and attendance summary.

use rust_decimal::Decimal;

use crate::models::{GrantType, RuleProfile, ServiceProfile, SuggestionResult};

/// Days granted to every worker past the first year under the statutory rule.
pub const STATUTORY_BASE_DAYS: i64 = 15;

/// Cap on seniority days added to [`STATUTORY_BASE_DAYS`].
pub const STATUTORY_MAX_SENIORITY_DAYS: i64 = 10;

fn first_year_suggestion(rule: &RuleProfile, service: &ServiceProfile) -> SuggestionResult {
    let days = service.full_months.min(rule.first_year_max);
    SuggestionResult {
        suggested_days: Some(Decimal::from(days)),
        rationale: format!(
            "{}: first year of service, {} months of perfect attendance -> min({}, {}) = {} days",
            rule.name, service.full_months, service.full_months, rule.first_year_max, days
        ),
    }
}

fn low_attendance_suggestion(rule: &RuleProfile, service: &ServiceProfile) -> SuggestionResult {
    SuggestionResult {
        suggested_days: Some(Decimal::from(service.full_months)),
        rationale: format!(
            "{}: attendance {:.1}% is below 80% -> {} months of perfect attendance = {} days",
            rule.name, service.attendance_rate, service.full_months, service.full_months
        ),
    }
}

/// Seniority days for a worker with `full_years` completed years: one extra
/// day for every two years after the first, capped at ten.
fn seniority_days(full_years: i64) -> i64 {
    (full_years.saturating_sub(1).div_euclid(2)).clamp(0, STATUTORY_MAX_SENIORITY_DAYS)
}

/// Suggests the number of annual leave days under a rule.
///
/// The suggestion depends on the rule's [`GrantType`]:
/// - `LawBasic`: in the first year, one day per month of perfect attendance
///   up to `first_year_max`; afterwards 15 days plus one day per two years of
///   service beyond the first (at most 10 extra), or only the months of
///   perfect attendance when the attendance rate is below 80%.
/// - `CbaSchool` / `CbaInstitute`: the same first-year accrual; afterwards a
///   flat `default_days_after_1y` when attendance is at least 80%, otherwise
///   the months of perfect attendance.
/// - `ExternalDays` and `ManualOnly`: no suggestion; the caller supplies the
///   day count.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::suggest_annual_days;
/// use leave_engine::models::{GrantType, RuleProfile, ServiceProfile};
/// use rust_decimal::Decimal;
///
/// let rule = RuleProfile::new("law_basic", "Statutory basic", GrantType::LawBasic);
/// let service = ServiceProfile {
///     hire_date: "2022-03-01".to_string(),
///     base_date: "2025-03-01".to_string(),
///     service_years: Decimal::from(3),
///     full_years: 3,
///     attendance_rate: Decimal::from(95),
///     full_months: 12,
/// };
///
/// let suggestion = suggest_annual_days(&rule, &service);
/// assert_eq!(suggestion.suggested_days, Some(Decimal::from(16)));
/// ```
pub fn suggest_annual_days(rule: &RuleProfile, service: &ServiceProfile) -> SuggestionResult {
    match rule.grant_type {
        GrantType::LawBasic => {
            if service.in_first_year() {
                first_year_suggestion(rule, service)
            } else if !service.meets_attendance_gate() {
                low_attendance_suggestion(rule, service)
            } else {
                let extra = seniority_days(service.full_years);
                let days = STATUTORY_BASE_DAYS + extra;
                SuggestionResult {
                    suggested_days: Some(Decimal::from(days)),
                    rationale: format!(
                        "{}: {} years of service, attendance {:.1}% -> {} base days + {} seniority days = {} days",
                        rule.name,
                        service.full_years,
                        service.attendance_rate,
                        STATUTORY_BASE_DAYS,
                        extra,
                        days
                    ),
                }
            }
        }
        GrantType::CbaSchool | GrantType::CbaInstitute => {
            if service.in_first_year() {
                first_year_suggestion(rule, service)
            } else if service.meets_attendance_gate() {
                SuggestionResult {
                    suggested_days: Some(Decimal::from(rule.default_days_after_1y)),
                    rationale: format!(
                        "{}: {} years of service, attendance {:.1}% -> flat {} days after the first year",
                        rule.name,
                        service.full_years,
                        service.attendance_rate,
                        rule.default_days_after_1y
                    ),
                }
            } else {
                low_attendance_suggestion(rule, service)
            }
        }
        GrantType::ExternalDays => SuggestionResult {
            suggested_days: None,
            rationale: format!(
                "{}: the day count is calculated by another module; only the payout is calculated here",
                rule.name
            ),
        },
        GrantType::ManualOnly => SuggestionResult {
            suggested_days: None,
            rationale: format!("{}: the granted day count must be entered directly", rule.name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service(full_years: i64, attendance_rate: &str, full_months: i64) -> ServiceProfile {
        ServiceProfile {
            hire_date: String::new(),
            base_date: String::new(),
            service_years: Decimal::from(full_years),
            full_years,
            attendance_rate: dec(attendance_rate),
            full_months,
        }
    }

    fn rule(grant_type: GrantType) -> RuleProfile {
        RuleProfile::new("test_rule", "Test rule", grant_type)
    }

    #[test]
    fn test_law_basic_first_year_counts_months() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(0, "100", 5));
        assert_eq!(result.suggested_days, Some(dec("5")));
        assert!(result.rationale.contains("first year"));
        assert!(result.rationale.contains("min(5, 11)"));
    }

    #[test]
    fn test_law_basic_first_year_is_capped() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(0, "100", 12));
        assert_eq!(result.suggested_days, Some(dec("11")));
    }

    #[test]
    fn test_law_basic_first_year_cap_follows_rule() {
        let mut custom_cap = rule(GrantType::LawBasic);
        custom_cap.first_year_max = 8;
        let result = suggest_annual_days(&custom_cap, &service(0, "100", 10));
        assert_eq!(result.suggested_days, Some(dec("8")));
    }

    #[test]
    fn test_law_basic_seniority_accrual() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(3, "95", 12));
        assert_eq!(result.suggested_days, Some(dec("16")));
        assert!(result.rationale.contains("15 base days + 1 seniority days = 16 days"));
        assert!(result.rationale.contains("95.0%"));
    }

    #[test]
    fn test_law_basic_one_year_gets_base_days() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(1, "80", 12));
        assert_eq!(result.suggested_days, Some(dec("15")));
    }

    #[test]
    fn test_law_basic_seniority_is_capped_at_10() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(21, "100", 12));
        assert_eq!(result.suggested_days, Some(dec("25")));
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(40, "100", 12));
        assert_eq!(result.suggested_days, Some(dec("25")));
    }

    #[test]
    fn test_law_basic_low_attendance_uses_months_uncapped() {
        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(2, "70", 11));
        assert_eq!(result.suggested_days, Some(dec("11")));
        assert!(result.rationale.contains("below 80%"));

        let result = suggest_annual_days(&rule(GrantType::LawBasic), &service(2, "70", 14));
        assert_eq!(result.suggested_days, Some(dec("14")));
    }

    #[test]
    fn test_cba_school_flat_grant_after_first_year() {
        let result = suggest_annual_days(&rule(GrantType::CbaSchool), &service(5, "80", 12));
        assert_eq!(result.suggested_days, Some(dec("26")));
        assert!(result.rationale.contains("flat 26 days"));
    }

    #[test]
    fn test_cba_institute_matches_school() {
        for (years, rate, months) in [(0, "100", 7), (4, "92", 12), (4, "60", 9)] {
            let school = suggest_annual_days(&rule(GrantType::CbaSchool), &service(years, rate, months));
            let institute =
                suggest_annual_days(&rule(GrantType::CbaInstitute), &service(years, rate, months));
            assert_eq!(school, institute);
        }
    }

    #[test]
    fn test_cba_uses_rule_default_days() {
        let mut generous = rule(GrantType::CbaInstitute);
        generous.default_days_after_1y = 30;
        let result = suggest_annual_days(&generous, &service(2, "85", 12));
        assert_eq!(result.suggested_days, Some(dec("30")));
    }

    #[test]
    fn test_cba_low_attendance_uses_months() {
        let result = suggest_annual_days(&rule(GrantType::CbaSchool), &service(3, "79.9", 9));
        assert_eq!(result.suggested_days, Some(dec("9")));
    }

    #[test]
    fn test_cba_first_year_is_capped() {
        let result = suggest_annual_days(&rule(GrantType::CbaSchool), &service(0, "100", 12));
        assert_eq!(result.suggested_days, Some(dec("11")));
    }

    #[test]
    fn test_external_days_gives_no_suggestion() {
        let result = suggest_annual_days(&rule(GrantType::ExternalDays), &service(5, "100", 12));
        assert_eq!(result.suggested_days, None);
        assert!(result.rationale.contains("another module"));
    }

    #[test]
    fn test_manual_only_gives_no_suggestion() {
        let result = suggest_annual_days(&rule(GrantType::ManualOnly), &service(5, "100", 12));
        assert_eq!(result.suggested_days, None);
        assert!(result.rationale.contains("entered directly"));
    }

    #[test]
    fn test_seniority_days_table() {
        assert_eq!(seniority_days(1), 0);
        assert_eq!(seniority_days(2), 0);
        assert_eq!(seniority_days(3), 1);
        assert_eq!(seniority_days(5), 2);
        assert_eq!(seniority_days(21), 10);
        assert_eq!(seniority_days(23), 10);
    }
}
