//! Core library for the Devis estimate application.
//!
//! This crate provides the business logic for project-cost estimates:
//! domain models, the pure estimate calculator (per-step metrics, aggregate
//! totals, monthly allocation, cost projection), command-based editing, and
//! display formatting. Persistence, HTTP, and chat surfaces are external
//! collaborators that call into this crate; nothing here performs I/O.
//!
//! # Computation Model
//!
//! Everything derived is recomputed from the full estimate on demand:
//!
//! - **Domain Models** ([`models`]): estimates, steps, features, schedule
//!   variants, and the flat stored-record shapes they are assembled from
//! - **Calculator** ([`calc`]): pure, synchronous derivations over an
//!   estimate, with no caching and no mutation of inputs
//! - **Editor** ([`editor`]): explicit commands applied by ID lookup, the
//!   mutation pathway used by tool-call integrations
//! - **Display** ([`display`]): markdown formatting for reports and
//!   tool-call readback
//!
//! # Quick Start
//!
//! ```rust
//! use devis_core::calc::ComputedEstimate;
//! use devis_core::models::{Complexity, Estimate, Schedule, Step};
//!
//! // Build an estimate (normally assembled from stored records)
//! let mut estimate = Estimate::new("e1", "Mobile app");
//! estimate.hourly_rate = 100.0;
//! estimate.hour_max_multiplier = 1.2;
//! estimate.steps.push(Step::leaf("auth", "Auth", 10.0, Complexity::Medium));
//! estimate.steps.push(Step::leaf("onb", "Onboarding", 20.0, Complexity::Low));
//! estimate.schedule.push(Schedule::even(2));
//!
//! // Run the computation pass
//! let computed = ComputedEstimate::from_estimate(&estimate);
//! assert_eq!(computed.totals.cost_min, 3000.0);
//! assert_eq!(computed.totals.cost_max, 3600.0);
//!
//! // Derive the per-variant views
//! let months = computed.allocation(0)?;
//! assert_eq!(months[0].steps[0].name, "Auth");
//! # devis_core::Result::<()>::Ok(())
//! ```

pub mod calc;
pub mod display;
pub mod editor;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use calc::{
    aggregate_option_totals, aggregate_totals, allocate_steps_to_months, compute_step_metrics,
    project_monthly_cost, step_complexity, step_hours_min, ComputedEstimate, ComputedStep,
    MonthAllocation, MonthCost, StepMetrics, Totals,
};
pub use display::{CommandResult, ComputedSteps, Money, MonthAllocations, MonthCosts};
pub use editor::{apply, EstimateCommand, StepIndex};
pub use error::{EstimateError, Result};
pub use models::{
    Complexity, Estimate, EstimateSummary, Feature, Repartition, Schedule, Step,
    UpdateStepRequest,
};
pub use params::{
    AppendSubStep, Id, SetSchedule, StepCreate, SwapSteps, UpdateEstimate, UpdateStep,
};
