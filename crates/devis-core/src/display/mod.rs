//! Display formatting functions and result types.
//!
//! This module provides wrapper types for formatting computed collections
//! and operation results, enabling consistent markdown output across
//! different consumers (reporting views, tool-call readback).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! Domain models implement `Display` directly (in [`models`]); collections
//! of derived data and operation outcomes get newtype wrappers here.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types & │    │   Formatted     │
//! │ (Estimate,Step) │───▶│ Result Types    │───▶│    Output       │
//! │ + calc outputs  │    │                 │    │ (reports/tools) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (ComputedSteps,
//!   MonthAllocations, MonthCosts)
//! - [`results`]: Operation result types (CommandResult)
//! - [`money`]: Currency formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Design Principles
//!
//! 1. **Markdown Output**: All formatters produce markdown for rich display
//! 2. **Display-time rounding**: Costs are rounded only here, never in the
//!    calculator
//! 3. **Graceful empties**: Empty collections format as readable sentences,
//!    not blank output

pub mod collections;
pub mod models;
pub mod money;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::{ComputedSteps, MonthAllocations, MonthCosts};
pub use money::Money;
pub use results::CommandResult;
