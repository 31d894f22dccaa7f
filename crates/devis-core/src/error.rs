//! Error types for the estimate core library.

use thiserror::Error;

/// Comprehensive error type for all estimate operations.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// Step not found for the given ID
    #[error("Step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// Schedule variant not found for the given index
    #[error("Schedule variant {index} not found (estimate has {available} variants)")]
    ScheduleNotFound { index: usize, available: usize },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> EstimateError {
        EstimateError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl EstimateError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a step-not-found error for the given step ID.
    pub fn step_not_found(id: impl Into<String>) -> Self {
        Self::StepNotFound { id: id.into() }
    }
}

/// Result type alias for estimate operations
pub type Result<T> = std::result::Result<T, EstimateError>;
