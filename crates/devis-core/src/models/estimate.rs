//! Estimate model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Feature, Schedule, Step};

/// Default hourly rate applied to freshly created estimates.
pub const DEFAULT_HOURLY_RATE: f64 = 135.0;

/// Default multiplier used to derive the maximum hour bound.
pub const DEFAULT_HOUR_MAX_MULTIPLIER: f64 = 1.2;

/// Represents a complete project-cost estimate.
///
/// An estimate bundles the authored step tree, the display features, the
/// schedule variants, and the rate configuration the calculator needs. The
/// calculator never mutates an estimate; all derived figures are produced
/// as separate output structures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Estimate {
    /// Unique identifier for the estimate
    pub id: String,

    /// Display name of the estimate
    pub name: String,

    /// Detailed description of the estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Primary display color (hex string)
    pub primary_color: String,

    /// Secondary display color (hex string)
    pub secondary_color: String,

    /// Hourly rate applied to every step (non-negative)
    pub hourly_rate: f64,

    /// Multiplier applied to minimum hours to derive the maximum bound (≥ 1)
    pub hour_max_multiplier: f64,

    /// Optional URL where the client signs the estimate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_link: Option<String>,

    /// Display-only feature highlights
    #[serde(default)]
    pub features: Vec<Feature>,

    /// Ordered top-level steps
    #[serde(default)]
    pub steps: Vec<Step>,

    /// Schedule variants (duration options with month-by-month splits)
    #[serde(default)]
    pub schedule: Vec<Schedule>,
}

impl Estimate {
    /// Creates an empty estimate with default rates and colors.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            primary_color: "#000000".to_string(),
            secondary_color: "#FFFFFF".to_string(),
            hourly_rate: DEFAULT_HOURLY_RATE,
            hour_max_multiplier: DEFAULT_HOUR_MAX_MULTIPLIER,
            sign_link: None,
            features: Vec::new(),
            steps: Vec::new(),
            schedule: Vec::new(),
        }
    }

    /// Ordered top-level steps that count toward the main estimate total.
    pub fn main_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| !s.is_additional)
    }

    /// Ordered top-level steps flagged as optional add-ons.
    pub fn option_steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| s.is_additional)
    }
}
