//! Collection wrapper types for displaying computed results.
//!
//! This module provides newtype wrappers that format collections of derived
//! data with consistent structure and empty-collection handling.

use std::fmt;

use super::money::Money;
use crate::calc::{ComputedStep, MonthAllocation, MonthCost};

/// Newtype wrapper for displaying a table of computed steps.
///
/// Formats each step as a markdown line with its hour and cost bounds.
/// Handles empty collections gracefully.
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::ComputedStep;
/// use devis_core::display::ComputedSteps;
/// use devis_core::models::{Complexity, Step};
///
/// let step = Step::leaf("a", "Auth", 10.0, Complexity::Medium);
/// let rows = ComputedSteps(vec![ComputedStep::from_step(&step, 100.0, 1.2)]);
/// let output = format!("{}", rows);
/// assert!(output.contains("Auth"));
/// assert!(output.contains("$1,000"));
/// ```
pub struct ComputedSteps(pub Vec<ComputedStep>);

impl ComputedSteps {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of computed steps in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the computed steps.
    pub fn iter(&self) -> std::slice::Iter<'_, ComputedStep> {
        self.0.iter()
    }
}

impl fmt::Display for ComputedSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No steps found.")
        } else {
            for step in &self.0 {
                let m = &step.metrics;
                if m.hours_min == m.hours_max {
                    writeln!(
                        f,
                        "- {}: {}h, {}",
                        step.name,
                        m.hours_min,
                        Money(m.cost_min)
                    )?;
                } else {
                    writeln!(
                        f,
                        "- {}: {}-{}h, {} - {}",
                        step.name,
                        m.hours_min,
                        m.hours_max,
                        Money(m.cost_min),
                        Money(m.cost_max)
                    )?;
                }
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying monthly step allocations.
///
/// Produces one line per month in the "Month 2: Auth, Onboarding" style.
/// Months without allocated steps are shown as empty.
pub struct MonthAllocations(pub Vec<MonthAllocation>);

impl MonthAllocations {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of months in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the month allocations.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthAllocation> {
        self.0.iter()
    }
}

impl fmt::Display for MonthAllocations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No months scheduled.")
        } else {
            for month in &self.0 {
                if month.steps.is_empty() {
                    writeln!(f, "- Month {}: (none)", month.month)?;
                } else {
                    let names: Vec<&str> =
                        month.steps.iter().map(|s| s.name.as_str()).collect();
                    writeln!(f, "- Month {}: {}", month.month, names.join(", "))?;
                }
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying monthly cost projections.
///
/// One line per month with the rounded min/max spend and the cumulative
/// totals carried so far.
pub struct MonthCosts(pub Vec<MonthCost>);

impl MonthCosts {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of months in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the month costs.
    pub fn iter(&self) -> std::slice::Iter<'_, MonthCost> {
        self.0.iter()
    }
}

impl fmt::Display for MonthCosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No months scheduled.")
        } else {
            for month in &self.0 {
                if month.min == month.max {
                    writeln!(
                        f,
                        "- Month {}: {} (cumulative {})",
                        month.month,
                        Money(month.min),
                        Money(month.cum_min)
                    )?;
                } else {
                    writeln!(
                        f,
                        "- Month {}: {} - {} (cumulative {} - {})",
                        month.month,
                        Money(month.min),
                        Money(month.max),
                        Money(month.cum_min),
                        Money(month.cum_max)
                    )?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{allocate_steps_to_months, project_monthly_cost, ComputedStep};
    use crate::models::{Complexity, Repartition, Step};

    fn create_computed_steps() -> Vec<ComputedStep> {
        [
            Step::leaf("a", "Auth", 10.0, Complexity::Medium),
            Step::leaf("b", "Onboarding", 10.0, Complexity::Low),
        ]
        .iter()
        .map(|s| ComputedStep::from_step(s, 100.0, 1.2))
        .collect()
    }

    #[test]
    fn test_computed_steps_display() {
        let output = format!("{}", ComputedSteps(create_computed_steps()));
        assert!(output.contains("- Auth: 10-12h, $1,000 - $1,200"));

        let empty = format!("{}", ComputedSteps(vec![]));
        assert_eq!(empty, "No steps found.\n");
    }

    #[test]
    fn test_month_allocations_display() {
        let repartition = vec![
            Repartition {
                month: 1,
                percent: 100.0,
            },
            Repartition {
                month: 2,
                percent: 0.0,
            },
        ];
        let months = allocate_steps_to_months(&create_computed_steps(), &repartition, 20.0);

        let output = format!("{}", MonthAllocations(months));
        assert!(output.contains("- Month 1: Auth, Onboarding"));
        assert!(output.contains("- Month 2: (none)"));
    }

    #[test]
    fn test_month_costs_display() {
        let repartition = vec![Repartition {
            month: 1,
            percent: 100.0,
        }];
        let months = project_monthly_cost(&repartition, 2000.0, 2400.0);

        let output = format!("{}", MonthCosts(months));
        assert!(output.contains("- Month 1: $2,000 - $2,400 (cumulative $2,000 - $2,400)"));
    }

    #[test]
    fn test_month_costs_display_collapsed_range() {
        let repartition = vec![Repartition {
            month: 1,
            percent: 100.0,
        }];
        let months = project_monthly_cost(&repartition, 2000.0, 2000.0);

        let output = format!("{}", MonthCosts(months));
        assert!(output.contains("- Month 1: $2,000 (cumulative $2,000)"));
    }
}
