//! Estimate computation: per-step metrics, totals, allocation, projection.
//!
//! This module is the business core of the crate. Data flows one way:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Estimate     │    │   Per-step      │    │  Allocation &   │
//! │ (steps + rates  │───▶│   metrics &     │───▶│  monthly cost   │
//! │  + schedule)    │    │   totals        │    │  projection     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Every function here is pure, synchronous, and stateless between
//! invocations: nothing is cached, nothing is mutated, and callers re-run
//! the computation whenever the underlying estimate changes. All operations
//! are O(steps × months) over small, human-entered data.
//!
//! ## Submodules
//!
//! - [`metrics`]: per-step hours/cost/complexity derivation
//! - [`totals`]: aggregation across top-level steps, main vs. option
//! - [`allocation`]: greedy packing of steps into scheduled months
//! - [`projection`]: per-month cost spread with cumulative sums
//!
//! # Usage Examples
//!
//! ```rust
//! use devis_core::calc::ComputedEstimate;
//! use devis_core::models::{Complexity, Estimate, Schedule, Step};
//!
//! let mut estimate = Estimate::new("e1", "Mobile app");
//! estimate.hourly_rate = 100.0;
//! estimate.steps.push(Step::leaf("a", "Auth", 10.0, Complexity::Medium));
//! estimate.steps.push(Step::leaf("b", "Onboarding", 20.0, Complexity::Low));
//! estimate.schedule.push(Schedule::even(3));
//!
//! let computed = ComputedEstimate::from_estimate(&estimate);
//! assert_eq!(computed.totals.cost_min, 3000.0);
//!
//! let months = computed.allocation(0)?;
//! assert_eq!(months.len(), 3);
//! # devis_core::Result::<()>::Ok(())
//! ```

pub mod allocation;
pub mod metrics;
pub mod projection;
pub mod totals;

#[cfg(test)]
mod tests;

// Re-export the main types and functions
pub use allocation::{allocate_steps_to_months, AllocatedStep, MonthAllocation};
pub use metrics::{compute_step_metrics, step_complexity, step_hours_min, ComputedStep, StepMetrics};
pub use projection::{project_monthly_cost, MonthCost};
pub use totals::{aggregate_option_totals, aggregate_totals, Totals};

use crate::models::{Estimate, EstimateSummary};
use crate::Result;

/// Fully computed view of an estimate.
///
/// Bundles the per-step metrics and aggregate totals derived from one pass
/// over the estimate, split into the main steps and the optional add-ons,
/// and offers the schedule-dependent derivations (monthly allocation and
/// cost projection) per variant. Holds no reference to the source estimate
/// beyond the schedule variants it needs; building it never mutates the
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedEstimate {
    /// Computed rows for the main (non-additional) top-level steps
    pub steps: Vec<ComputedStep>,
    /// Computed rows for the option (additional) top-level steps
    pub options: Vec<ComputedStep>,
    /// Aggregate bounds over the main steps
    pub totals: Totals,
    /// Aggregate bounds over the option steps
    pub option_totals: Totals,
    /// Schedule variants carried over for per-variant derivations
    schedule: Vec<crate::models::Schedule>,
}

impl ComputedEstimate {
    /// Runs the full computation pass over an estimate.
    pub fn from_estimate(estimate: &Estimate) -> Self {
        let computed = |steps: Vec<&crate::models::Step>| -> Vec<ComputedStep> {
            steps
                .into_iter()
                .map(|s| {
                    ComputedStep::from_step(s, estimate.hourly_rate, estimate.hour_max_multiplier)
                })
                .collect()
        };

        let steps = computed(estimate.main_steps().collect());
        let options = computed(estimate.option_steps().collect());

        let mut totals = Totals::default();
        for step in &steps {
            totals.add(&step.metrics);
        }
        let mut option_totals = Totals::default();
        for step in &options {
            option_totals.add(&step.metrics);
        }

        Self {
            steps,
            options,
            totals,
            option_totals,
            schedule: estimate.schedule.clone(),
        }
    }

    /// Monthly step allocation for the given schedule variant.
    ///
    /// # Errors
    ///
    /// * `EstimateError::ScheduleNotFound` - When the variant index is out
    ///   of range
    pub fn allocation(&self, variant: usize) -> Result<Vec<MonthAllocation>> {
        let schedule = self.variant(variant)?;
        Ok(allocate_steps_to_months(
            &self.steps,
            &schedule.repartition,
            self.totals.hours_min,
        ))
    }

    /// Monthly cost projection for the given schedule variant.
    ///
    /// # Errors
    ///
    /// * `EstimateError::ScheduleNotFound` - When the variant index is out
    ///   of range
    pub fn cost_projection(&self, variant: usize) -> Result<Vec<MonthCost>> {
        let schedule = self.variant(variant)?;
        Ok(project_monthly_cost(
            &schedule.repartition,
            self.totals.cost_min,
            self.totals.cost_max,
        ))
    }

    /// Builds the compact summary handed to list views and tool handlers.
    pub fn summary(&self, estimate: &Estimate) -> EstimateSummary {
        EstimateSummary::from_estimate(estimate, self.totals, self.option_totals)
    }

    fn variant(&self, index: usize) -> Result<&crate::models::Schedule> {
        self.schedule
            .get(index)
            .ok_or(crate::EstimateError::ScheduleNotFound {
                index,
                available: self.schedule.len(),
            })
    }
}
