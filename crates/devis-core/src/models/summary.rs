//! Estimate summary types and functionality.

use serde::{Deserialize, Serialize};

use super::Estimate;
use crate::calc::Totals;

/// Summary information about an estimate with computed totals.
///
/// This is the compact shape handed back to list views and to tool-call
/// handlers that read current figures into a conversation: identity, step
/// counts, and the four aggregate bounds, without the full step tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateSummary {
    /// Estimate ID
    pub id: String,
    /// Display name of the estimate
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Hourly rate applied to every step
    pub hourly_rate: f64,
    /// Number of top-level steps counted in the main total
    pub main_steps: u32,
    /// Number of top-level steps flagged as optional add-ons
    pub option_steps: u32,
    /// Number of schedule variants
    pub schedule_variants: u32,
    /// Aggregate hour/cost bounds over the main steps
    pub totals: Totals,
    /// Aggregate hour/cost bounds over the option steps
    pub option_totals: Totals,
}

impl EstimateSummary {
    /// Create an EstimateSummary from an estimate and its computed totals.
    pub fn from_estimate(estimate: &Estimate, totals: Totals, option_totals: Totals) -> Self {
        Self {
            id: estimate.id.clone(),
            name: estimate.name.clone(),
            description: estimate.description.clone(),
            hourly_rate: estimate.hourly_rate,
            main_steps: estimate.main_steps().count() as u32,
            option_steps: estimate.option_steps().count() as u32,
            schedule_variants: estimate.schedule.len() as u32,
            totals,
            option_totals,
        }
    }
}
