//! Complexity enumeration for steps and sub-steps.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of step complexity levels.
///
/// Complexity is an ordinal severity score used for display and averaging.
/// Each level carries a numeric score (`Low` = 1, `Medium` = 3, `High` = 5);
/// a parent step's complexity is the arithmetic mean of its children's
/// scores and is therefore a plain number, not necessarily one of the three
/// enum values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Low complexity (score 1)
    #[default]
    Low,

    /// Medium complexity (score 3)
    Medium,

    /// High complexity (score 5)
    High,
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(format!("Invalid complexity: {s}")),
        }
    }
}

impl Complexity {
    /// Numeric score used by the averaging computation.
    pub fn score(&self) -> f64 {
        match self {
            Complexity::Low => 1.0,
            Complexity::Medium => 3.0,
            Complexity::High => 5.0,
        }
    }

    /// Bucket an averaged score back into the nearest complexity level.
    ///
    /// Mean scores fall anywhere in the 1..=5 range; the buckets match the
    /// display thresholds (score ≤ 2 is low, ≤ 4 is medium, above is high).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devis_core::models::Complexity;
    ///
    /// assert_eq!(Complexity::from_score(1.0), Complexity::Low);
    /// assert_eq!(Complexity::from_score(3.0), Complexity::Medium);
    /// assert_eq!(Complexity::from_score(4.5), Complexity::High);
    /// ```
    pub fn from_score(score: f64) -> Self {
        if score <= 2.0 {
            Complexity::Low
        } else if score <= 4.0 {
            Complexity::Medium
        } else {
            Complexity::High
        }
    }

    /// Convert to string representation (for wire and storage formats)
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    /// Human-readable label for display contexts.
    pub fn label(&self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}
