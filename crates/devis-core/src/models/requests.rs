//! Request types for updating models.

use super::{Complexity, Step};

/// Validated, typed parameters for updating a step.
///
/// Produced from [`crate::params::UpdateStep`] once string fields have been
/// parsed; the editor applies requests without re-validating.
#[derive(Debug, Default)]
pub struct UpdateStepRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub hours: Option<f64>,
    pub complexity: Option<Complexity>,
    pub color: Option<String>,
    pub disable_rate: Option<bool>,
    pub is_additional: Option<bool>,
    pub notes: Option<String>,
}

impl TryFrom<crate::params::UpdateStep> for UpdateStepRequest {
    type Error = crate::EstimateError;

    /// Convert raw update parameters into a validated request.
    ///
    /// # Errors
    ///
    /// * `EstimateError::InvalidInput` - When the complexity string is
    ///   invalid or the hours value is negative
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devis_core::{models::UpdateStepRequest, params::UpdateStep};
    ///
    /// let params = UpdateStep {
    ///     id: "s1".to_string(),
    ///     name: Some("Auth flow".to_string()),
    ///     complexity: Some("high".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let request: UpdateStepRequest = params.try_into()?;
    /// assert_eq!(request.name, Some("Auth flow".to_string()));
    /// # use devis_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::UpdateStep) -> Result<Self, Self::Error> {
        let complexity = params.validate()?;

        Ok(Self {
            name: params.name,
            description: params.description,
            hours: params.hours,
            complexity,
            color: params.color,
            disable_rate: params.disable_rate,
            is_additional: params.is_additional,
            notes: params.notes,
        })
    }
}

impl TryFrom<crate::params::StepCreate> for Step {
    type Error = crate::EstimateError;

    /// Convert creation parameters into a leaf step.
    ///
    /// # Errors
    ///
    /// * `EstimateError::InvalidInput` - When the name is empty, the hours
    ///   value is negative, or the complexity string is invalid
    fn try_from(params: crate::params::StepCreate) -> Result<Self, Self::Error> {
        use std::str::FromStr;

        if params.name.trim().is_empty() {
            return Err(crate::EstimateError::invalid_input("name")
                .with_reason("Name is required and must be non-empty"));
        }

        let hours = params.hours.unwrap_or(0.0);
        if hours < 0.0 {
            return Err(crate::EstimateError::invalid_input("hours")
                .with_reason("Hours must be a non-negative number"));
        }

        let complexity = match &params.complexity {
            Some(raw) => Complexity::from_str(raw).map_err(|_| {
                crate::EstimateError::invalid_input("complexity").with_reason(format!(
                    "Invalid complexity: {raw}. Must be 'low', 'medium', or 'high'"
                ))
            })?,
            None => Complexity::default(),
        };

        let mut step = Step::leaf(params.id, params.name, hours, complexity);
        step.description = params.description;
        if let Some(color) = params.color {
            step.color = color;
        }
        step.disable_rate = params.disable_rate;
        step.is_additional = params.is_additional;
        step.notes = params.notes;

        Ok(step)
    }
}
