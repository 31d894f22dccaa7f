//! Schedule variant and repartition models.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One month's share of the budget within a schedule variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Repartition {
    /// Month number within the variant (1-based)
    pub month: u32,

    /// Percentage of the total budget/hours assigned to this month (0..100)
    pub percent: f64,
}

/// One possible project-duration option with its month-by-month split.
///
/// The percents across a variant's repartition should sum to 100, but this
/// is enforced by the editing UI, not structurally; consumers tolerate sums
/// that drift from 100 and never divide by a zero total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Schedule {
    /// Duration of the variant in months
    pub duration: u32,

    /// Ordered month/percent entries for the variant
    #[serde(default)]
    pub repartition: Vec<Repartition>,
}

impl Schedule {
    /// Creates a variant with the budget spread evenly across `duration`
    /// months.
    ///
    /// Percents are rounded to two decimals, so twelve months yields twelve
    /// entries of 8.33 rather than an exact 100 total. Consumers tolerate
    /// the drift.
    pub fn even(duration: u32) -> Self {
        let percent = if duration == 0 {
            0.0
        } else {
            (10_000.0 / f64::from(duration)).round() / 100.0
        };
        Self {
            duration,
            repartition: (1..=duration)
                .map(|month| Repartition { month, percent })
                .collect(),
        }
    }
}
