//! Error types for the Annual Leave Engine.
//!
//! The calculation core never fails: malformed or missing inputs degrade to
//! zero or default values. Errors only arise at the outer surfaces, when a
//! rule catalog is loaded from disk or when an HTTP request cannot be read.

use thiserror::Error;

/// The main error type for the Annual Leave Engine.
///
/// # Example
///
/// ```
/// use leave_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rules.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rules.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A rule catalog was structurally invalid.
    #[error("Invalid rule catalog: {message}")]
    InvalidRuleCatalog {
        /// A description of what made the catalog invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
