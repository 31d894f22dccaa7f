//! Parameter structures for estimate operations.
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (AI tool-call handlers, HTTP layers, etc.) without
//! framework-specific derives or dependencies. Interface layers wrap these
//! types, add their own derives, and convert down to core parameters before
//! touching an estimate.
//!
//! All structures derive `serde` traits; `schemars::JsonSchema` derives are
//! available behind the `schema` feature for interfaces that publish JSON
//! schemas of their tools.
//!
//! Field-level validation lives here (and in the
//! [`TryFrom`](crate::models::UpdateStepRequest) conversions built on it):
//! hours must be non-negative, complexity strings must parse, percents must
//! stay in 0..=100, multipliers must be at least 1. The calculator itself
//! performs no validation: by the time values reach it they are within the
//! documented ranges.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Generic parameters for operations requiring just a step ID.
///
/// Used for operations like remove_step and show_step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the step to operate on
    pub id: String,
}

/// Base parameters for step creation.
///
/// Contains the fields used when creating a top-level step or a sub-step.
/// The identifier is assigned by the caller (the persistence collaborator
/// owns ID generation) and must be unique within the estimate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct StepCreate {
    /// Identifier for the new step (caller-assigned, unique)
    pub id: String,
    /// Display name of the step (required, non-empty)
    pub name: String,
    /// Optional detailed description of the step
    pub description: Option<String>,
    /// Estimated hours (leaf steps; defaults to 0)
    pub hours: Option<f64>,
    /// Complexity level ('low', 'medium', or 'high'; defaults to 'low')
    pub complexity: Option<String>,
    /// Display color (hex string)
    pub color: Option<String>,
    /// Whether the max multiplier is disabled for this step
    #[serde(default)]
    pub disable_rate: bool,
    /// Whether the step is an optional add-on
    #[serde(default)]
    pub is_additional: bool,
    /// Free-text notes
    pub notes: Option<String>,
}

/// Parameters for appending a sub-step under an existing step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AppendSubStep {
    /// ID of the parent step to append under
    pub parent_id: String,
    /// Sub-step creation parameters
    #[serde(flatten)]
    pub sub: StepCreate,
}

/// Parameters for updating an existing step or sub-step.
///
/// Allows partial updates: only the provided fields change. Setting `hours`
/// on a parent step is accepted but has no effect on computed totals until
/// the step loses its sub-steps, since parent hours are derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateStep {
    /// Step ID to update (required)
    pub id: String,
    /// Updated display name
    pub name: Option<String>,
    /// Updated detailed description
    pub description: Option<String>,
    /// Updated estimated hours (non-negative)
    pub hours: Option<f64>,
    /// Updated complexity level ('low', 'medium', or 'high')
    pub complexity: Option<String>,
    /// Updated display color (hex string)
    pub color: Option<String>,
    /// Updated max-multiplier flag
    pub disable_rate: Option<bool>,
    /// Updated optional-add-on flag
    pub is_additional: Option<bool>,
    /// Updated free-text notes
    pub notes: Option<String>,
}

impl UpdateStep {
    /// Validate update parameters and return the parsed complexity.
    ///
    /// # Errors
    ///
    /// * `EstimateError::InvalidInput` - When the complexity string is
    ///   invalid or the hours value is negative
    pub fn validate(&self) -> crate::Result<Option<crate::models::Complexity>> {
        use std::str::FromStr;

        let complexity = match &self.complexity {
            Some(raw) => Some(crate::models::Complexity::from_str(raw).map_err(|_| {
                crate::EstimateError::invalid_input("complexity").with_reason(format!(
                    "Invalid complexity: {raw}. Must be 'low', 'medium', or 'high'"
                ))
            })?),
            None => None,
        };

        if let Some(hours) = self.hours {
            if hours < 0.0 {
                return Err(crate::EstimateError::invalid_input("hours")
                    .with_reason("Hours must be a non-negative number"));
            }
        }

        Ok(complexity)
    }
}

/// Parameters for swapping the order of two steps.
///
/// Both steps must be top-level steps of the same estimate, or sub-steps of
/// the same parent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SwapSteps {
    /// ID of the first step to swap
    pub first_id: String,
    /// ID of the second step to swap
    pub second_id: String,
}

/// Parameters for replacing an estimate's schedule variants.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct SetSchedule {
    /// Replacement schedule variants, in display order
    pub variants: Vec<Schedule>,
}

impl SetSchedule {
    /// Validate that every variant is well-formed.
    ///
    /// # Errors
    ///
    /// * `EstimateError::InvalidInput` - When a variant has a zero duration,
    ///   a percent outside 0..=100, or a month number of zero
    pub fn validate(&self) -> crate::Result<()> {
        for (i, variant) in self.variants.iter().enumerate() {
            if variant.duration == 0 {
                return Err(crate::EstimateError::invalid_input("duration")
                    .with_reason(format!("Variant {i}: duration must be at least 1 month")));
            }
            for entry in &variant.repartition {
                if entry.month == 0 {
                    return Err(crate::EstimateError::invalid_input("month")
                        .with_reason(format!("Variant {i}: month numbers are 1-based")));
                }
                if !(0.0..=100.0).contains(&entry.percent) {
                    return Err(crate::EstimateError::invalid_input("percent").with_reason(
                        format!(
                            "Variant {i}, month {}: percent must be between 0 and 100",
                            entry.month
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Parameters for updating an estimate's own record.
///
/// Allows partial updates of the estimate metadata and rate configuration:
/// only the provided fields change. Steps, features, and schedule variants
/// have their own commands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateEstimate {
    /// Updated display name (non-empty)
    pub name: Option<String>,
    /// Updated detailed description
    pub description: Option<String>,
    /// Updated primary display color (hex string)
    pub primary_color: Option<String>,
    /// Updated secondary display color (hex string)
    pub secondary_color: Option<String>,
    /// Updated signing URL
    pub sign_link: Option<String>,
    /// Updated hourly rate (non-negative)
    pub hourly_rate: Option<f64>,
    /// Updated maximum-hours multiplier (at least 1)
    pub hour_max_multiplier: Option<f64>,
}

impl UpdateEstimate {
    /// Validate estimate update parameters.
    ///
    /// # Errors
    ///
    /// * `EstimateError::InvalidInput` - When the name is empty, the hourly
    ///   rate is negative, or the multiplier is below 1
    pub fn validate(&self) -> crate::Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(crate::EstimateError::invalid_input("name")
                    .with_reason("Estimate name cannot be empty"));
            }
        }
        if let Some(rate) = self.hourly_rate {
            if rate < 0.0 {
                return Err(crate::EstimateError::invalid_input("hourly_rate")
                    .with_reason("Hourly rate must be a non-negative number"));
            }
        }
        if let Some(multiplier) = self.hour_max_multiplier {
            if multiplier < 1.0 {
                return Err(crate::EstimateError::invalid_input("hour_max_multiplier")
                    .with_reason("Hour max multiplier must be at least 1"));
            }
        }
        Ok(())
    }
}
