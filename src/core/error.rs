//! Error types for RaptorTA.

use thiserror::Error;

/// Result type alias for RaptorTA operations.
pub type Result<T> = std::result::Result<T, RaptorError>;

/// Caller contract violations.
///
/// Insufficient data and arithmetic edge cases are not errors: they produce
/// empty runs or the per-indicator numeric convention.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RaptorError {
    /// Data length mismatch between arrays.
    #[error("Data length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Period outside of its accepted range.
    #[error("{name} = {value} is out of range (valid: {min}..={max})")]
    PeriodOutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// A required input series was not supplied.
    #[error("Missing input series: {name}")]
    MissingSeries { name: &'static str },
}

impl RaptorError {
    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create a period out of range error.
    pub fn period_out_of_range(name: &'static str, value: usize, min: usize, max: usize) -> Self {
        Self::PeriodOutOfRange {
            name,
            value,
            min,
            max,
        }
    }

    /// Create a missing series error.
    pub fn missing_series(name: &'static str) -> Self {
        Self::MissingSeries { name }
    }
}

#[cfg(feature = "python")]
impl From<RaptorError> for pyo3::PyErr {
    fn from(err: RaptorError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
