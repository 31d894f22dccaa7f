//! Greedy allocation of steps across scheduled months.

use serde::{Deserialize, Serialize};

use super::metrics::ComputedStep;
use crate::models::Repartition;

/// Display attributes of a step allocated to a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocatedStep {
    /// ID of the allocated step
    pub id: String,
    /// Display name of the allocated step
    pub name: String,
    /// Display color of the allocated step
    pub color: String,
}

/// The ordered, de-duplicated list of steps whose work falls in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAllocation {
    /// Month number from the repartition entry (1-based)
    pub month: u32,
    /// Steps allocated to this month, in declared step order
    pub steps: Vec<AllocatedStep>,
}

/// Assigns each step to the month(s) its work notionally occupies.
///
/// Greedy single-pass first-fit: steps are consumed strictly in declared
/// order, filling each month's hour capacity before moving on. A month's
/// capacity is `round(total_hours_min * percent / 100)`, floored at zero.
/// Step order is authored and meaningful, so no reordering or bin-packing
/// optimization takes place.
///
/// Behavior at the edges:
///
/// - `total_hours_min == 0` leaves every month empty (no division, no
///   unbounded loop)
/// - a step that does not finish within one month's capacity spans into the
///   next month and appears in both
/// - zero-hour steps are skipped without being recorded anywhere
/// - if the months run out before the steps do, the remainder is simply
///   never allocated
///
/// # Examples
///
/// ```rust
/// use devis_core::calc::{allocate_steps_to_months, ComputedStep};
/// use devis_core::models::{Complexity, Repartition, Step};
///
/// let steps: Vec<ComputedStep> = [
///     Step::leaf("a", "Auth", 10.0, Complexity::Low),
///     Step::leaf("b", "Onboarding", 10.0, Complexity::Low),
/// ]
/// .iter()
/// .map(|s| ComputedStep::from_step(s, 100.0, 1.0))
/// .collect();
///
/// let repartition = vec![
///     Repartition { month: 1, percent: 50.0 },
///     Repartition { month: 2, percent: 50.0 },
/// ];
///
/// let months = allocate_steps_to_months(&steps, &repartition, 20.0);
/// assert_eq!(months[0].steps[0].name, "Auth");
/// assert_eq!(months[1].steps[0].name, "Onboarding");
/// ```
pub fn allocate_steps_to_months(
    steps: &[ComputedStep],
    repartition: &[Repartition],
    total_hours_min: f64,
) -> Vec<MonthAllocation> {
    struct QueueEntry<'a> {
        step: &'a ComputedStep,
        remaining: f64,
    }

    let mut queue: Vec<QueueEntry<'_>> = steps
        .iter()
        .map(|step| QueueEntry {
            step,
            remaining: step.metrics.hours_min,
        })
        .collect();

    let mut allocations: Vec<MonthAllocation> = repartition
        .iter()
        .map(|entry| MonthAllocation {
            month: entry.month,
            steps: Vec::new(),
        })
        .collect();

    let mut head = 0;
    for (month_idx, entry) in repartition.iter().enumerate() {
        let mut capacity = (total_hours_min * (entry.percent / 100.0)).round().max(0.0);

        while capacity > 0.0 && head < queue.len() {
            let current = &mut queue[head];
            if current.remaining <= 0.0 {
                head += 1;
                continue;
            }

            let month = &mut allocations[month_idx];
            if month.steps.last().map(|s| s.id.as_str()) != Some(current.step.id.as_str()) {
                month.steps.push(AllocatedStep {
                    id: current.step.id.clone(),
                    name: current.step.name.clone(),
                    color: current.step.color.clone(),
                });
            }

            let consumed = capacity.min(current.remaining);
            capacity -= consumed;
            current.remaining -= consumed;
            if current.remaining <= 0.0 {
                head += 1;
            }
        }
    }

    allocations
}
