//! Aggregate totals over a list of top-level steps.

use serde::{Deserialize, Serialize};

use super::metrics::{compute_step_metrics, StepMetrics};
use crate::models::Step;

/// Aggregate hour and cost bounds across a set of steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of per-step minimum hours
    pub hours_min: f64,
    /// Sum of per-step maximum hours
    pub hours_max: f64,
    /// Sum of per-step minimum costs
    pub cost_min: f64,
    /// Sum of per-step maximum costs
    pub cost_max: f64,
}

impl Totals {
    /// Folds one step's metrics into the running totals.
    pub fn add(&mut self, metrics: &StepMetrics) {
        self.hours_min += metrics.hours_min;
        self.hours_max += metrics.hours_max;
        self.cost_min += metrics.cost_min;
        self.cost_max += metrics.cost_max;
    }
}

/// Sums the four metric fields over the given top-level steps.
///
/// Only the top level is iterated; each step's own metrics already subsume
/// its sub-steps. Steps flagged `is_additional` are excluded here; they are
/// reported separately via [`aggregate_option_totals`] so no step is ever
/// counted twice. An empty list yields zero totals.
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::aggregate_totals;
/// use devis_core::models::{Complexity, Step};
///
/// let steps = vec![
///     Step::leaf("a", "Design", 10.0, Complexity::Low),
///     Step::leaf("b", "Build", 20.0, Complexity::High),
/// ];
///
/// let totals = aggregate_totals(&steps, 100.0, 1.2);
/// assert_eq!(totals.cost_min, 3000.0);
/// assert_eq!(totals.cost_max, 3600.0);
/// ```
pub fn aggregate_totals(steps: &[Step], hourly_rate: f64, hour_max_multiplier: f64) -> Totals {
    let mut totals = Totals::default();
    for step in steps.iter().filter(|s| !s.is_additional) {
        totals.add(&compute_step_metrics(step, hourly_rate, hour_max_multiplier));
    }
    totals
}

/// Sums the four metric fields over the option (additional) steps only.
///
/// Uses the identical per-step computation as the main total.
pub fn aggregate_option_totals(
    steps: &[Step],
    hourly_rate: f64,
    hour_max_multiplier: f64,
) -> Totals {
    let mut totals = Totals::default();
    for step in steps.iter().filter(|s| s.is_additional) {
        totals.add(&compute_step_metrics(step, hourly_rate, hour_max_multiplier));
    }
    totals
}
