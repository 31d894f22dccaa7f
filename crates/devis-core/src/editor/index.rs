//! ID-to-position index over an estimate's step tree.

use std::collections::HashMap;

use crate::models::Step;

/// Position of a step within the two-level authored tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPath {
    /// Index of the top-level step
    pub top: usize,
    /// Index within the parent's sub-steps, or `None` for a top-level step
    pub sub: Option<usize>,
}

impl StepPath {
    /// Whether the path points at a top-level step.
    pub fn is_top_level(&self) -> bool {
        self.sub.is_none()
    }
}

/// Lookup table from step ID to tree position.
///
/// Built fresh from the step list before every command application (the
/// editor keeps no state between invocations), so positions are always
/// consistent with the tree being edited. Lookups replace the linear scans
/// the mutation pathway would otherwise need.
#[derive(Debug, Default)]
pub struct StepIndex {
    positions: HashMap<String, StepPath>,
}

impl StepIndex {
    /// Builds the index over a top-level step list.
    pub fn build(steps: &[Step]) -> Self {
        let mut positions = HashMap::new();
        for (top, step) in steps.iter().enumerate() {
            positions.insert(step.id.clone(), StepPath { top, sub: None });
            for (sub, sub_step) in step.sub_steps.iter().enumerate() {
                positions.insert(
                    sub_step.id.clone(),
                    StepPath {
                        top,
                        sub: Some(sub),
                    },
                );
            }
        }
        Self { positions }
    }

    /// Looks up a step's position by ID.
    pub fn get(&self, id: &str) -> Option<StepPath> {
        self.positions.get(id).copied()
    }

    /// Whether the given ID exists anywhere in the tree.
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Looks up a position or reports the missing step.
    pub fn require(&self, id: &str) -> crate::Result<StepPath> {
        self.get(id)
            .ok_or_else(|| crate::EstimateError::step_not_found(id))
    }
}
