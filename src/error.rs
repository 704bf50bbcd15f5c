//! Error types for the Contract Payment Audit Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during an audit run.
//!
//! Row-level anomalies (unparseable numbers or dates, missing price rows)
//! are never errors: the evaluator degrades them to a defined check outcome
//! so a batch always completes. The variants here cover configuration
//! problems and run-level preconditions only.

use thiserror::Error;

use crate::models::InputTable;

/// The main error type for the Contract Payment Audit Engine.
///
/// # Example
///
/// ```
/// use contract_audit::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/audit.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/audit.yaml");
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

    /// One of the four input tables had zero rows, so there is nothing to
    /// audit. This is a distinguishable "nothing to process" condition,
    /// not a crash: the caller decides how to surface it.
    #[error("Nothing to process: the {table} table is empty")]
    NothingToProcess {
        /// The input table that was empty.
        table: InputTable,
    },

    /// The request was structurally invalid (missing table or parameter).
    #[error("Invalid audit request: {message}")]
    InvalidRequest {
        /// A description of what made the request invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/audit.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/audit.yaml"
        );
    }

    #[test]
    fn test_nothing_to_process_names_table() {
        let error = EngineError::NothingToProcess {
            table: InputTable::PriceTable,
        };
        assert_eq!(error.to_string(), "Nothing to process: the price table is empty");
    }

    #[test]
    fn test_invalid_request_displays_message() {
        let error = EngineError::InvalidRequest {
            message: "month_start_date is required".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid audit request: month_start_date is required"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_nothing_to_process() -> EngineResult<()> {
            Err(EngineError::NothingToProcess {
                table: InputTable::Payroll,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_nothing_to_process()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
