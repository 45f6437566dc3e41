//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule catalogs
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::RuleProfile;

use super::catalog::RuleCatalog;
use super::types::RuleCatalogConfig;

/// Name of the catalog file looked up when a directory is given.
pub const RULES_FILE_NAME: &str = "rules.yaml";

/// Loads and provides access to a rule catalog.
///
/// # Directory Structure
///
/// `load` accepts either the catalog file itself or a directory holding it:
/// ```text
/// config/
/// └── rules.yaml   # Rule profiles
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// let rule = loader.get_rule("gw_school_cba");
/// println!("Rule: {}", rule.name);
/// # Ok::<(), leave_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: RuleCatalog,
}

impl ConfigLoader {
    /// Loads a rule catalog from a YAML file or a directory containing `rules.yaml`.
    ///
    /// Returns an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file is not valid YAML or has an unknown grant type (`ConfigParseError`)
    /// - The rules do not form a valid catalog (`InvalidRuleCatalog`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let file_path = if path.is_dir() {
            path.join(RULES_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(path = %path_str, rules = loader.catalog.len(), "Loaded rule catalog");
        Ok(loader)
    }

    /// Builds a loader from YAML text.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str(
    ///     "rules:\n  - id: law_basic\n    name: Statutory basic\n    grant_type: law_basic\n",
    /// )?;
    /// assert_eq!(loader.catalog().len(), 1);
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        let config: RuleCatalogConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        let catalog = RuleCatalog::new(config.rules)?;
        Ok(Self { catalog })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Consumes the loader and returns the catalog.
    pub fn into_catalog(self) -> RuleCatalog {
        self.catalog
    }

    /// Looks up a rule by id, falling back to `law_basic` for unknown ids.
    pub fn get_rule(&self, id: &str) -> &RuleProfile {
        self.catalog.get(id)
    }
}
