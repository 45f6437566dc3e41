//! The rule catalog.
//!
//! A [`RuleCatalog`] maps rule ids to [`RuleProfile`]s. Lookups never fail:
//! an unknown id resolves to the statutory `law_basic` rule, which every
//! catalog is required to contain.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{GrantType, RoundingMode, RuleProfile};

/// Id of the statutory rule that unknown ids fall back to.
pub const FALLBACK_RULE_ID: &str = "law_basic";

static BUILTIN: LazyLock<RuleCatalog> = LazyLock::new(|| {
    let fallback = RuleProfile::new(FALLBACK_RULE_ID, "Statutory basic", GrantType::LawBasic);
    let rules = [
        RuleProfile::new(
            "gw_school_cba",
            "School workers collective agreement (sample)",
            GrantType::CbaSchool,
        ),
        RuleProfile::new(
            "gw_institute_cba",
            "Institute workers collective agreement (sample)",
            GrantType::CbaInstitute,
        ),
        RuleProfile::new(
            "gw_wage_guideline",
            "Ordinary wage guideline",
            GrantType::ExternalDays,
        ),
        RuleProfile::new("custom", "Custom", GrantType::ManualOnly)
            .with_rounding(10, RoundingMode::Floor),
        fallback.clone(),
    ];

    RuleCatalog {
        rules: rules.into_iter().map(|r| (r.id.clone(), r)).collect(),
        fallback,
    }
});

/// A read-only mapping from rule id to rule profile.
///
/// # Example
///
/// ```
/// use leave_engine::config::RuleCatalog;
/// use leave_engine::models::GrantType;
///
/// let catalog = RuleCatalog::builtin();
/// assert_eq!(catalog.get("custom").grant_type, GrantType::ManualOnly);
/// assert_eq!(catalog.get("no_such_rule").id, "law_basic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCatalog {
    rules: BTreeMap<String, RuleProfile>,
    fallback: RuleProfile,
}

impl RuleCatalog {
    /// Returns the built-in catalog of five rules.
    ///
    /// | id                  | grant type      |
    /// |---------------------|-----------------|
    /// | `law_basic`         | `law_basic`     |
    /// | `gw_school_cba`     | `cba_school`    |
    /// | `gw_institute_cba`  | `cba_institute` |
    /// | `gw_wage_guideline` | `external_days` |
    /// | `custom`            | `manual_only`   |
    pub fn builtin() -> &'static RuleCatalog {
        LazyLock::force(&BUILTIN)
    }

    /// Builds a catalog from a list of rules.
    ///
    /// Returns `InvalidRuleCatalog` if the list is empty, contains a
    /// duplicate id, or has no `law_basic` rule to fall back to.
    pub fn new(rules: Vec<RuleProfile>) -> EngineResult<Self> {
        if rules.is_empty() {
            return Err(EngineError::InvalidRuleCatalog {
                message: "catalog contains no rules".to_string(),
            });
        }

        let mut by_id = BTreeMap::new();
        for rule in rules {
            let id = rule.id.clone();
            if by_id.insert(id.clone(), rule).is_some() {
                return Err(EngineError::InvalidRuleCatalog {
                    message: format!("duplicate rule id '{}'", id),
                });
            }
        }

        let fallback = by_id
            .get(FALLBACK_RULE_ID)
            .cloned()
            .ok_or_else(|| EngineError::InvalidRuleCatalog {
                message: format!("missing fallback rule '{}'", FALLBACK_RULE_ID),
            })?;

        Ok(Self {
            rules: by_id,
            fallback,
        })
    }

    /// Looks up a rule by id, falling back to `law_basic` for unknown ids.
    pub fn get(&self, id: &str) -> &RuleProfile {
        match self.rules.get(id) {
            Some(rule) => rule,
            None => {
                debug!(rule_id = %id, fallback = FALLBACK_RULE_ID, "Unknown rule id, using fallback rule");
                &self.fallback
            }
        }
    }

    /// Returns true if the catalog has a rule with this exact id.
    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    /// Returns all rules, ordered by id.
    pub fn rules(&self) -> impl Iterator<Item = &RuleProfile> {
        self.rules.values()
    }

    /// Returns the number of rules in the catalog.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the catalog has no rules. Never true for a valid catalog.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
