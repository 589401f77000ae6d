//! Error types for the contact assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain value-object validation has its own error type in [`crate::domain::errors`];
//! the enums here cover directory operations and configuration loading.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised when an operation references something that is not there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No phone with the given value exists on the record
    #[error("Phone {0} not found")]
    PhoneNotFound(String),

    /// No record with the given name exists in the address book
    #[error("Record {0} not found")]
    RecordNotFound(String),
}

/// Errors that can occur during address book operations.
///
/// Every fallible directory or record operation returns one of these;
/// a failing operation never leaves partially mutated state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// Malformed phone or birthday input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Referenced name or phone value is not present
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
