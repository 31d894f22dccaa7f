//! Per-step hour, cost, and complexity computation.

use serde::{Deserialize, Serialize};

use crate::models::Step;

/// Minimum hours for a step.
///
/// A leaf step contributes its own `hours`; a parent contributes the sum of
/// its children, computed recursively. The data produced by the persistence
/// layer is two levels deep in practice, but the recursion is correct for
/// arbitrary depth.
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::step_hours_min;
/// use devis_core::models::{Complexity, Step};
///
/// let mut parent = Step::leaf("p", "Backend", 0.0, Complexity::Low);
/// parent.sub_steps = vec![
///     Step::leaf("a", "API", 12.0, Complexity::Medium),
///     Step::leaf("b", "DB", 8.0, Complexity::Low),
/// ];
///
/// assert_eq!(step_hours_min(&parent), 20.0);
/// ```
pub fn step_hours_min(step: &Step) -> f64 {
    if step.sub_steps.is_empty() {
        step.hours
    } else {
        step.sub_steps.iter().map(step_hours_min).sum()
    }
}

/// Complexity score for a step.
///
/// A leaf step reports its own complexity score; a parent reports the
/// arithmetic mean of its direct children's scores, unrounded. The mean is
/// taken over direct children at every level, not flattened to leaves.
pub fn step_complexity(step: &Step) -> f64 {
    if step.sub_steps.is_empty() {
        step.complexity.score()
    } else {
        let sum: f64 = step.sub_steps.iter().map(step_complexity).sum();
        sum / step.sub_steps.len() as f64
    }
}

/// Derived hour and cost bounds for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepMetrics {
    /// Minimum hours (leaf hours or recursive sub-step sum)
    pub hours_min: f64,
    /// Maximum hours (`hours_min` when the rate spread is disabled,
    /// otherwise `round(hours_min * multiplier)`)
    pub hours_max: f64,
    /// Minimum cost, unrounded (`hours_min * rate`)
    pub cost_min: f64,
    /// Maximum cost, unrounded (`hours_max * rate`, or `cost_min` when the
    /// rate spread is disabled)
    pub cost_max: f64,
    /// Complexity score (own score or mean of children)
    pub complexity: f64,
}

/// Computes the derived metrics for one step.
///
/// Pure: never mutates the step, never fails. Hours are rounded half-up to
/// the nearest integer when the multiplier applies; costs stay unrounded
/// until display time.
pub fn compute_step_metrics(step: &Step, hourly_rate: f64, hour_max_multiplier: f64) -> StepMetrics {
    let hours_min = step_hours_min(step);
    let hours_max = if step.disable_rate {
        hours_min
    } else {
        (hours_min * hour_max_multiplier).round()
    };
    let cost_min = hours_min * hourly_rate;
    let cost_max = if step.disable_rate {
        cost_min
    } else {
        hours_max * hourly_rate
    };

    StepMetrics {
        hours_min,
        hours_max,
        cost_min,
        cost_max,
        complexity: step_complexity(step),
    }
}

/// A step's display attributes zipped with its computed metrics.
///
/// This is the per-step row handed to tables, charts, and the monthly
/// allocation: identity and display data from the step, figures from the
/// calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedStep {
    /// ID of the underlying step
    pub id: String,
    /// Display name of the underlying step
    pub name: String,
    /// Display color of the underlying step
    pub color: String,
    /// Whether the step is an optional add-on
    pub is_additional: bool,
    /// Derived hour and cost bounds
    pub metrics: StepMetrics,
}

impl ComputedStep {
    /// Computes the metrics for a step and captures its display attributes.
    pub fn from_step(step: &Step, hourly_rate: f64, hour_max_multiplier: f64) -> Self {
        Self {
            id: step.id.clone(),
            name: step.name.clone(),
            color: step.color.clone(),
            is_additional: step.is_additional,
            metrics: compute_step_metrics(step, hourly_rate, hour_max_multiplier),
        }
    }
}
