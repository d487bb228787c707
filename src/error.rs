//! Error types for the payroll visitor.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the error conditions that can occur while dispatching visitors and
//! loading roster configuration.

use thiserror::Error;

use crate::models::EmployeeKind;

/// The main error type for the payroll visitor.
///
/// # Example
///
/// ```
/// use payroll_visitor::error::PayrollError;
/// use payroll_visitor::models::EmployeeKind;
///
/// let error = PayrollError::UnsupportedVariant {
///     kind: EmployeeKind::Executive,
/// };
/// assert_eq!(error.to_string(), "No handler registered for variant: executive");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Dispatch was attempted on a variant with no matching handler.
    #[error("No handler registered for variant: {kind}")]
    UnsupportedVariant {
        /// The variant tag that could not be dispatched.
        kind: EmployeeKind,
    },

    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Roster parsed but describes an unusable employee list.
    #[error("Invalid roster: {message}")]
    InvalidRoster {
        /// A description of what made the roster invalid.
        message: String,
    },

    /// A payroll summary could not be rendered for output.
    #[error("Failed to render output: {message}")]
    OutputError {
        /// A description of the rendering failure.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
