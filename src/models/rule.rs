//! Rule profile model and related types.
//!
//! A [`RuleProfile`] is one named set of leave rules: how entitled days are
//! suggested (its [`GrantType`]) and how the unused-leave payout is rounded.

use serde::{Deserialize, Deserializer, Serialize};

/// Default maximum number of days granted during the first year of service.
pub const DEFAULT_FIRST_YEAR_MAX: i64 = 11;

/// Default flat grant once the first year of service is complete.
pub const DEFAULT_DAYS_AFTER_FIRST_YEAR: i64 = 26;

/// Default currency-unit granularity for payout rounding.
pub const DEFAULT_MONEY_STEP: i64 = 10;

/// How a rule decides the suggested number of leave days.
///
/// # Example
///
/// ```
/// use leave_engine::models::GrantType;
///
/// let grant_type: GrantType = serde_json::from_str("\"cba_school\"").unwrap();
/// assert_eq!(grant_type, GrantType::CbaSchool);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Statutory baseline: monthly accrual in year one, 15 days plus seniority after.
    LawBasic,
    /// Collective agreement sample for school-based workers.
    #[serde(alias = "gw_cba_school")]
    CbaSchool,
    /// Collective agreement sample for institute-based workers.
    #[serde(alias = "gw_cba_institute")]
    CbaInstitute,
    /// Day count comes from another system; only the payout is computed here.
    ExternalDays,
    /// Day count is always entered by hand.
    ManualOnly,
}

impl GrantType {
    /// Returns the wire name of this grant type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GrantType::LawBasic => "law_basic",
            GrantType::CbaSchool => "cba_school",
            GrantType::CbaInstitute => "cba_institute",
            GrantType::ExternalDays => "external_days",
            GrantType::ManualOnly => "manual_only",
        }
    }
}

/// How a payout amount is brought onto the rounding step.
///
/// Parsing is permissive: any text other than `"round"` or `"ceil"` means
/// [`RoundingMode::Floor`].
///
/// # Example
///
/// ```
/// use leave_engine::models::RoundingMode;
///
/// assert_eq!(RoundingMode::from_str_lenient("ceil"), RoundingMode::Ceil);
/// assert_eq!(RoundingMode::from_str_lenient("banker"), RoundingMode::Floor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Truncate down to the step.
    #[default]
    Floor,
    /// Round half up to the step.
    Round,
    /// Raise up to the step.
    Ceil,
}

impl RoundingMode {
    /// Parses a rounding mode, falling back to floor for anything unrecognized.
    pub fn from_str_lenient(mode: &str) -> Self {
        match mode.trim() {
            "round" => RoundingMode::Round,
            "ceil" => RoundingMode::Ceil,
            _ => RoundingMode::Floor,
        }
    }

    /// Returns the wire name of this rounding mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundingMode::Floor => "floor",
            RoundingMode::Round => "round",
            RoundingMode::Ceil => "ceil",
        }
    }
}

impl<'de> Deserialize<'de> for RoundingMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mode = Option::<String>::deserialize(deserializer)?;
        Ok(mode
            .as_deref()
            .map(RoundingMode::from_str_lenient)
            .unwrap_or_default())
    }
}

fn default_first_year_max() -> i64 {
    DEFAULT_FIRST_YEAR_MAX
}

fn default_days_after_1y() -> i64 {
    DEFAULT_DAYS_AFTER_FIRST_YEAR
}

fn default_money_step() -> i64 {
    DEFAULT_MONEY_STEP
}

/// A named set of leave rules.
///
/// # Example
///
/// ```
/// use leave_engine::models::{GrantType, RoundingMode, RuleProfile};
///
/// let rule = RuleProfile::new("law_basic", "Statutory basic", GrantType::LawBasic);
/// assert_eq!(rule.first_year_max, 11);
/// assert_eq!(rule.default_days_after_1y, 26);
/// assert_eq!(rule.money_step, 10);
/// assert_eq!(rule.money_mode, RoundingMode::Floor);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleProfile {
    /// Catalog key of the rule (e.g., "law_basic").
    pub id: String,
    /// Human-readable name of the rule.
    pub name: String,
    /// How suggested days are derived.
    pub grant_type: GrantType,
    /// Cap on days accrued during the first year of service.
    #[serde(default = "default_first_year_max")]
    pub first_year_max: i64,
    /// Flat grant after the first year, used by the collective-agreement rules.
    #[serde(default = "default_days_after_1y")]
    pub default_days_after_1y: i64,
    /// Rounding step for payouts, in currency units.
    #[serde(default = "default_money_step")]
    pub money_step: i64,
    /// Rounding mode for payouts.
    #[serde(default)]
    pub money_mode: RoundingMode,
}

impl RuleProfile {
    /// Creates a rule with the default caps and rounding policy.
    pub fn new(id: impl Into<String>, name: impl Into<String>, grant_type: GrantType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grant_type,
            first_year_max: DEFAULT_FIRST_YEAR_MAX,
            default_days_after_1y: DEFAULT_DAYS_AFTER_FIRST_YEAR,
            money_step: DEFAULT_MONEY_STEP,
            money_mode: RoundingMode::Floor,
        }
    }

    /// Returns a copy of this rule with a different rounding policy.
    pub fn with_rounding(mut self, money_step: i64, money_mode: RoundingMode) -> Self {
        self.money_step = money_step;
        self.money_mode = money_mode;
        self
    }

    /// Returns the rounding step to apply to payouts.
    ///
    /// An unset (zero) step means the default step of 10.
    pub fn effective_money_step(&self) -> i64 {
        if self.money_step == 0 {
            DEFAULT_MONEY_STEP
        } else {
            self.money_step
        }
    }
}
