//! Error types for the Credit Line Decision Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while evaluating a credit line.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Credit Line Decision Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use credit_line_engine::error::EngineError;
///
/// let error = EngineError::InvalidGender {
///     value: "x".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid gender: 'x' (expected 'm' or 'f')");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The gender was not one of the recognized codes.
    #[error("Invalid gender: '{value}' (expected 'm' or 'f')")]
    InvalidGender {
        /// The rejected value.
        value: String,
    },

    /// The payroll category was not one of the recognized codes.
    #[error("Invalid payroll category: '{value}' (expected one of A, B, C, D)")]
    InvalidCategory {
        /// The rejected value.
        value: String,
    },

    /// No amount is configured for the resolved table cell.
    #[error(
        "No amount configured for payroll category '{category}', gender '{gender}', tenure bucket {bucket}"
    )]
    AmountNotConfigured {
        /// The payroll category code.
        category: String,
        /// The gender code.
        gender: String,
        /// The tenure bucket key.
        bucket: u32,
    },

    /// The minimum amount of a range exceeds its maximum.
    #[error("Invalid amount range: minimum {minimum} exceeds maximum {maximum}")]
    InvalidRange {
        /// The minimum amount.
        minimum: Decimal,
        /// The maximum amount.
        maximum: Decimal,
    },

    /// A decision request file was not found.
    #[error("Request file not found: {path}")]
    RequestFileNotFound {
        /// The path that was not found.
        path: String,
    },

    /// A decision request file could not be parsed.
    #[error("Failed to parse request file '{path}': {message}")]
    RequestFileParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_gender_displays_value() {
        let error = EngineError::InvalidGender {
            value: "x".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid gender: 'x' (expected 'm' or 'f')");
    }

    #[test]
    fn test_invalid_category_displays_value() {
        let error = EngineError::InvalidCategory {
            value: "Z".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid payroll category: 'Z' (expected one of A, B, C, D)"
        );
    }

    #[test]
    fn test_amount_not_configured_displays_cell() {
        let error = EngineError::AmountNotConfigured {
            category: "B".to_string(),
            gender: "m".to_string(),
            bucket: 31,
        };
        assert_eq!(
            error.to_string(),
            "No amount configured for payroll category 'B', gender 'm', tenure bucket 31"
        );
    }

    #[test]
    fn test_invalid_range_displays_bounds() {
        let error = EngineError::InvalidRange {
            minimum: Decimal::new(5000, 0),
            maximum: Decimal::new(100, 0),
        };
        assert_eq!(
            error.to_string(),
            "Invalid amount range: minimum 5000 exceeds maximum 100"
        );
    }

    #[test]
    fn test_request_file_parse_error_displays_path_and_message() {
        let error = EngineError::RequestFileParseError {
            path: "/requests/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse request file '/requests/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_category() -> EngineResult<()> {
            Err(EngineError::InvalidCategory {
                value: "E".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_category()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }

    #[test]
    fn test_error_is_debug() {
        let error = EngineError::RequestFileNotFound {
            path: "/missing.yaml".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("RequestFileNotFound"));
    }
}
