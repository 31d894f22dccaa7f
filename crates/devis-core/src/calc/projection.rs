//! Monthly cost projection over a schedule variant.

use serde::{Deserialize, Serialize};

use crate::models::Repartition;

/// Projected cost figures for one scheduled month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthCost {
    /// Month number from the repartition entry (1-based)
    pub month: u32,
    /// Minimum cost for the month, rounded
    pub min: f64,
    /// Maximum cost for the month, rounded
    pub max: f64,
    /// Running cumulative minimum across prior months, inclusive
    pub cum_min: f64,
    /// Running cumulative maximum across prior months, inclusive
    pub cum_max: f64,
}

/// Spreads the total cost bounds across months by percent share.
///
/// Each month receives `round(total * percent / 100)` for both bounds, and
/// running cumulative sums are carried forward in schedule order. Pure and
/// order-dependent; the per-month rounding means the final cumulative value
/// may drift slightly from the exact total.
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::project_monthly_cost;
/// use devis_core::models::Repartition;
///
/// let repartition = vec![
///     Repartition { month: 1, percent: 60.0 },
///     Repartition { month: 2, percent: 40.0 },
/// ];
///
/// let months = project_monthly_cost(&repartition, 1000.0, 1200.0);
/// assert_eq!(months[0].min, 600.0);
/// assert_eq!(months[1].cum_min, 1000.0);
/// assert_eq!(months[1].cum_max, 1200.0);
/// ```
pub fn project_monthly_cost(
    repartition: &[Repartition],
    total_cost_min: f64,
    total_cost_max: f64,
) -> Vec<MonthCost> {
    let mut cum_min = 0.0;
    let mut cum_max = 0.0;
    repartition
        .iter()
        .map(|entry| {
            let min = (total_cost_min * (entry.percent / 100.0)).round();
            let max = (total_cost_max * (entry.percent / 100.0)).round();
            cum_min += min;
            cum_max += max;
            MonthCost {
                month: entry.month,
                min,
                max,
                cum_min,
                cum_max,
            }
        })
        .collect()
}
