//! Custom error types for the common library
//!
//! This module defines the validation errors raised before a request is
//! forwarded to the upstream API.

use thiserror::Error;

/// Error raised when user input is rejected locally
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Deposit amount is missing, not a number, or not strictly positive
    #[error("Invalid deposit amount")]
    InvalidDeposit,

    /// A required field was left empty
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A field could not be parsed as a number
    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Type alias for Result with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
