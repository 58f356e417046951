//! Error types for the compliance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading rules configuration
//! or validating compliance records.

use thiserror::Error;

/// The main error type for the compliance engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compliance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
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

    /// Document template id was not found in the configuration.
    #[error("Document template not found: {id}")]
    TemplateNotFound {
        /// The template id that was not found.
        id: String,
    },

    /// A document record was invalid or contained inconsistent data.
    #[error("Invalid document '{document_id}': {message}")]
    InvalidDocument {
        /// The id of the invalid document.
        document_id: String,
        /// A description of what made the document invalid.
        message: String,
    },

    /// A carer record was invalid or contained inconsistent data.
    #[error("Invalid carer field '{field}': {message}")]
    InvalidCarer {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
