//! Data models for estimates, steps, features, and schedules.
//!
//! This module contains the core domain models of the estimate system.
//! Display implementations for these models are located in
//! [`crate::display::models`] to maintain clean separation of concerns
//! between data structures and presentation logic.
//!
//! # Model Overview
//!
//! - [`Estimate`]: the root aggregate holding the step tree, features, schedule
//!   variants, and rate configuration
//! - [`Step`]: a unit of work; a leaf carries its own hours and
//!   [`Complexity`], a parent derives both from its `sub_steps`
//! - [`Feature`]: a display-only label/icon/color triple
//! - [`Schedule`] / [`Repartition`]: a duration variant and its
//!   month-by-month budget split
//! - Record types ([`records`]): the flat stored-row shapes the persistence
//!   collaborator hands over, plus assembly into nested estimates
//!
//! # Examples
//!
//! ```rust
//! use devis_core::models::{Complexity, Estimate, Step};
//!
//! let mut estimate = Estimate::new("e1", "Mobile app");
//! estimate.steps.push(Step::leaf("s1", "Auth", 24.0, Complexity::Medium));
//!
//! assert_eq!(estimate.main_steps().count(), 1);
//! assert!(estimate.steps[0].is_leaf());
//! ```

pub mod complexity;
pub mod estimate;
pub mod feature;
pub mod records;
pub mod requests;
pub mod schedule;
pub mod step;
pub mod summary;


// Re-export all public types at the models level
pub use complexity::Complexity;
pub use estimate::{Estimate, DEFAULT_HOURLY_RATE, DEFAULT_HOUR_MAX_MULTIPLIER};
pub use feature::Feature;
pub use records::{EstimateRecord, FeatureRecord, ScheduleRecord, StepRecord};
pub use requests::UpdateStepRequest;
pub use schedule::{Repartition, Schedule};
pub use step::Step;
pub use summary::EstimateSummary;
