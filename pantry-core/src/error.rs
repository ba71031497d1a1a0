//! Errors shared by every Pantry value type
//!
//! Parse entry points report `Format`; arithmetic across incompatible units
//! or currencies reports `InvalidOperation`. Buffer shortfalls are not errors,
//! `try_format` simply returns `None`.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const UNIT_MISMATCH: &str = "UNIT_MISMATCH";
    pub const CURRENCY_MISMATCH: &str = "CURRENCY_MISMATCH";
    pub const INSUFFICIENT: &str = "INSUFFICIENT";
    pub const INVALID_OPERATION: &str = "INVALID_OPERATION";
    pub const NOT_FINITE: &str = "NOT_FINITE";
    pub const OVERFLOW: &str = "OVERFLOW";
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PantryError {
    /// Input does not follow the notation of the target type
    #[error("Invalid {what} notation: {input:?}")]
    Format { what: &'static str, input: String },

    #[error("Invalid operation: {message}")]
    InvalidOperation { code: &'static str, message: String },

    #[error("Value is not a finite number")]
    NotFinite,

    #[error("Overflow: {0}")]
    Overflow(String),
}

impl PantryError {
    pub fn format(what: &'static str, input: impl Into<String>) -> Self {
        PantryError::Format { what, input: input.into() }
    }

    pub fn unit_mismatch(left: impl std::fmt::Display, right: impl std::fmt::Display) -> Self {
        PantryError::InvalidOperation {
            code: codes::UNIT_MISMATCH,
            message: format!("units differ: '{}' and '{}'", left, right),
        }
    }

    pub fn currency_mismatch(left: impl std::fmt::Display, right: impl std::fmt::Display) -> Self {
        PantryError::InvalidOperation {
            code: codes::CURRENCY_MISMATCH,
            message: format!("currencies differ: {} and {}", left, right),
        }
    }

    pub fn invalid_operation(code: &'static str, message: impl Into<String>) -> Self {
        PantryError::InvalidOperation { code, message: message.into() }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            PantryError::Format { .. } => codes::FORMAT_ERROR,
            PantryError::InvalidOperation { code, .. } => code,
            PantryError::NotFinite => codes::NOT_FINITE,
            PantryError::Overflow(_) => codes::OVERFLOW,
        }
    }
}
