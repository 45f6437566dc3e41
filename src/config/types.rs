//! Configuration types for rule catalogs.
//!
//! These structures are deserialized from YAML rule catalog files.

use serde::Deserialize;

use crate::models::RuleProfile;

/// Rule catalog file structure (`rules.yaml`).
///
/// ```yaml
/// rules:
///   - id: law_basic
///     name: Statutory basic
///     grant_type: law_basic
///   - id: custom
///     name: Custom
///     grant_type: manual_only
///     money_step: 100
///     money_mode: round
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RuleCatalogConfig {
    /// The rule profiles in the catalog.
    pub rules: Vec<RuleProfile>,
}
