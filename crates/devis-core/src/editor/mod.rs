//! Command-based editing of estimates.
//!
//! This module implements the mutation pathway used by tool-call
//! integrations: explicit [`EstimateCommand`] values applied against an
//! [`Estimate`](crate::models::Estimate) through an ID → position index.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ EstimateCommand │    │   StepIndex     │    │    Estimate     │
//! │ (tool payloads) │───▶│ (id → position) │───▶│   (mutated)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The index is rebuilt per command, keeping the editor stateless; after a
//! command succeeds, callers recompute derived figures with
//! [`ComputedEstimate`](crate::calc::ComputedEstimate) since nothing is
//! cached across invocations.
//!
//! # Usage Examples
//!
//! ```rust
//! use devis_core::editor::{apply, EstimateCommand};
//! use devis_core::models::Estimate;
//! use devis_core::params::StepCreate;
//!
//! let mut estimate = Estimate::new("e1", "Mobile app");
//! let changes = apply(
//!     &mut estimate,
//!     EstimateCommand::AddStep(StepCreate {
//!         id: "s1".to_string(),
//!         name: "Auth".to_string(),
//!         hours: Some(24.0),
//!         complexity: Some("medium".to_string()),
//!         ..Default::default()
//!     }),
//! )?;
//!
//! assert_eq!(estimate.steps.len(), 1);
//! assert!(changes[0].contains("Auth"));
//! # devis_core::Result::<()>::Ok(())
//! ```

pub mod apply;
pub mod index;


// Re-export the main types
pub use apply::{apply, EstimateCommand};
pub use index::{StepIndex, StepPath};
