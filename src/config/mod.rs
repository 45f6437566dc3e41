//! Rule catalog configuration for the Annual Leave Engine.
//!
//! This module provides the built-in [`RuleCatalog`] and the [`ConfigLoader`]
//! that reads a catalog from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rules.yaml").unwrap();
//! println!("Loaded {} rules", loader.catalog().len());
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::{FALLBACK_RULE_ID, RuleCatalog};
pub use loader::{ConfigLoader, RULES_FILE_NAME};
pub use types::RuleCatalogConfig;
