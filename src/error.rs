//! Error types for the Severance Settlement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during settlement calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Severance Settlement Engine.
///
/// Every failure is fatal to the single call that raised it: there are no
/// transient categories and no partial results. Invalid-input errors are
/// raised at the validation boundary, never mid-calculation.
///
/// # Example
///
/// ```
/// use rescisao_engine::error::EngineError;
/// use rust_decimal::Decimal;
///
/// let error = EngineError::InvalidSalary {
///     value: Decimal::ZERO,
/// };
/// assert_eq!(error.to_string(), "Invalid salary: 0 (must be greater than zero)");
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

    /// The monthly salary was zero or negative.
    #[error("Invalid salary: {value} (must be greater than zero)")]
    InvalidSalary {
        /// The salary value that was rejected.
        value: Decimal,
    },

    /// The termination date precedes the hire date.
    #[error("Invalid employment period: termination date {termination_date} precedes hire date {hire_date}")]
    InvalidPeriod {
        /// The hire date from the request.
        hire_date: NaiveDate,
        /// The termination date from the request.
        termination_date: NaiveDate,
    },

    /// A request field was missing or malformed.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
