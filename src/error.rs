// src/error.rs
use std::fmt;

/// Error types for brownian-play
#[derive(Debug, Clone, PartialEq)]
pub enum PlayError {
    /// Invalid parameter values
    InvalidParameters {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Invalid configuration
    InvalidConfiguration { field: String, reason: String },

    /// Raw input that could not be read as a number
    ParseError { field: String, input: String },
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::InvalidParameters {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            PlayError::InvalidConfiguration { field, reason } => {
                write!(f, "Invalid configuration for '{}': {}", field, reason)
            }
            PlayError::ParseError { field, input } => {
                write!(f, "Could not read '{}' as a number for '{}'", input, field)
            }
        }
    }
}

impl std::error::Error for PlayError {}

/// Result type alias for brownian-play operations
pub type PlayResult<T> = Result<T, PlayError>;

/// Validation utilities
pub mod validation {
    use super::{PlayError, PlayResult};

    /// Largest step count accepted for a single generated path.
    pub const MAX_STEP_COUNT: usize = 1_000_000;

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> PlayResult<()> {
        if value <= 0.0 {
            Err(PlayError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> PlayResult<()> {
        if value < 0.0 {
            Err(PlayError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PlayResult<()> {
        if !value.is_finite() {
            Err(PlayError::InvalidParameters {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_step_count(steps: usize) -> PlayResult<()> {
        if steps == 0 {
            Err(PlayError::InvalidConfiguration {
                field: "step_count".to_string(),
                reason: "must be greater than 0".to_string(),
            })
        } else if steps > MAX_STEP_COUNT {
            Err(PlayError::InvalidConfiguration {
                field: "step_count".to_string(),
                reason: format!("exceeds maximum allowed ({})", MAX_STEP_COUNT),
            })
        } else {
            Ok(())
        }
    }
}
