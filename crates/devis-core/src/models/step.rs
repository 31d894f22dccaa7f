//! Step model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::Complexity;

/// Represents a unit of work within an estimate.
///
/// A step is either a leaf (its own `hours` and `complexity` are meaningful)
/// or a parent whose hours and complexity are derived from `sub_steps`. The
/// distinction is structural: a step with at least one sub-step is a parent
/// and its own `hours` field is ignored by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Step {
    /// Unique identifier for the step, stable across edits
    pub id: String,

    /// Display name of the step
    pub name: String,

    /// Detailed description of the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display color (hex string), used for grouping only
    #[serde(default = "default_color")]
    pub color: String,

    /// Complexity level (meaningful for leaf steps only)
    #[serde(default)]
    pub complexity: Complexity,

    /// Estimated hours (meaningful for leaf steps only)
    #[serde(default)]
    pub hours: f64,

    /// When true, the maximum bound equals the minimum bound
    /// (no multiplier applied, no cost spread)
    #[serde(default)]
    pub disable_rate: bool,

    /// Marks the step as an optional add-on, reported separately
    /// from the main estimate total
    #[serde(default)]
    pub is_additional: bool,

    /// Free-text notes, informational only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Order of the step within its parent (0-indexed)
    #[serde(default)]
    pub order: u32,

    /// Child steps (recursive; two levels deep in practice)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_steps: Vec<Step>,
}

fn default_color() -> String {
    "#000000".to_string()
}

impl Step {
    /// Creates a leaf step with the given identity and hour/complexity data.
    ///
    /// Remaining fields take their documented defaults; callers adjust them
    /// via struct update syntax or the editor commands.
    pub fn leaf(
        id: impl Into<String>,
        name: impl Into<String>,
        hours: f64,
        complexity: Complexity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            color: default_color(),
            complexity,
            hours,
            disable_rate: false,
            is_additional: false,
            notes: None,
            order: 0,
            sub_steps: Vec::new(),
        }
    }

    /// Whether this step is a leaf (contributes its own hours).
    pub fn is_leaf(&self) -> bool {
        self.sub_steps.is_empty()
    }
}
