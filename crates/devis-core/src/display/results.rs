//! Operation result types for command application.

use std::fmt;

use super::money::Money;
use crate::calc::Totals;

/// Result of applying an estimate command, with refreshed totals.
///
/// Wraps the change list returned by the editor together with the totals
/// recomputed afterwards, so tool-call handlers can report both what
/// changed and where the estimate now stands.
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::Totals;
/// use devis_core::display::CommandResult;
///
/// let result = CommandResult::with_changes(
///     vec!["Set hours to 12".to_string()],
///     Totals {
///         hours_min: 12.0,
///         hours_max: 14.0,
///         cost_min: 1200.0,
///         cost_max: 1400.0,
///     },
/// );
/// let output = format!("{}", result);
/// assert!(output.contains("Changes made:"));
/// assert!(output.contains("$1,200"));
/// ```
pub struct CommandResult {
    changes: Vec<String>,
    totals: Totals,
}

impl CommandResult {
    /// Create a command result from a change list and refreshed totals.
    pub fn with_changes(changes: Vec<String>, totals: Totals) -> Self {
        Self { changes, totals }
    }
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Estimate now totals {}-{} hours ({} - {}).",
            self.totals.hours_min,
            self.totals.hours_max,
            Money(self.totals.cost_min),
            Money(self.totals.cost_max)
        )
    }
}
