//! Error types for the investment calculators.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing a projection.

use thiserror::Error;

/// The main error type for the investment calculators.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use invest_calc::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "annual_rate".to_string(),
///     message: "must be between 0.1 and 15.0, got 0".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input 'annual_rate': must be between 0.1 and 15.0, got 0"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input value fell outside its configured bounds.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The name of the offending input field.
        field: String,
        /// A description of the violated constraint.
        message: String,
    },

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

    /// A schedule export was requested for a calculator that has no schedule.
    #[error("Calculator '{calculator}' does not produce a schedule")]
    NoSchedule {
        /// The calculator identifier.
        calculator: String,
    },

    /// Writing an exported schedule failed.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
