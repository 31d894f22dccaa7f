//! Stored-record types and assembly into nested estimates.
//!
//! The surrounding application persists estimates as flat relational rows:
//! one `estimates` row, `steps` rows linked to their parent through
//! `parent_id`, `features` rows, and `schedule` rows. This module mirrors
//! those row shapes and rebuilds the nested [`Estimate`] the calculator
//! consumes. Assembly applies the documented defaults (missing multiplier →
//! 1.2, missing hours → 0, missing flags → false) and silently drops rows
//! whose `parent_id` does not resolve, matching the lenient reads of the
//! persistence layer.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{
    estimate::DEFAULT_HOUR_MAX_MULTIPLIER, Complexity, Estimate, Feature, Repartition, Schedule,
    Step,
};

/// Stored row shape for an estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateRecord {
    /// Unique identifier of the estimate
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Primary display color
    pub primary_color: String,
    /// Secondary display color (optional in storage)
    pub secondary_color: Option<String>,
    /// Hourly rate
    pub hourly_rate: f64,
    /// Maximum-hours multiplier (optional in storage, defaults to 1.2)
    pub hours_max_multiplier: Option<f64>,
    /// Optional signing link
    pub sign_link: Option<String>,
    /// Owning user
    pub user_id: String,
    /// Creation timestamp (UTC)
    pub created_at: Timestamp,
}

/// Stored row shape for a step or sub-step.
///
/// Parent/child structure is flat in storage: a sub-step row carries the
/// `id` of its parent in `parent_id`, and top-level rows carry `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    /// Unique identifier of the step
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Stored complexity score (1, 3, or 5)
    pub complexity: f64,
    /// Display color
    pub color: String,
    /// Whether the max multiplier is disabled for this step
    pub disable_max_multiplier: Option<bool>,
    /// Estimated hours (leaf rows)
    pub hours: Option<f64>,
    /// Whether the step is an optional add-on
    pub is_additional: Option<bool>,
    /// Free-text notes
    pub notes: Option<String>,
    /// Parent step ID, or `None` for top-level steps
    pub parent_id: Option<String>,
    /// Owning estimate
    pub estimate_id: String,
    /// Owning user
    pub user_id: String,
}

/// Stored row shape for a display feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Unique identifier of the feature
    pub id: String,
    /// Display label
    pub label: String,
    /// Icon identifier
    pub icon: String,
    /// Display color
    pub color: String,
    /// Owning estimate
    pub estimate_id: String,
    /// Owning user
    pub user_id: String,
}

/// Stored row shape for a schedule variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Unique identifier of the schedule variant
    pub id: String,
    /// Duration in months
    pub duration: u32,
    /// Month/percent entries (stored as JSON)
    pub repartition: Vec<Repartition>,
    /// Owning estimate
    pub estimate_id: String,
    /// Owning user
    pub user_id: String,
    /// Creation timestamp (UTC)
    pub created_at: Timestamp,
}

impl Estimate {
    /// Assembles a nested estimate from its stored rows.
    ///
    /// Top-level steps are the rows with no `parent_id`, in input order;
    /// each collects its sub-step rows by `parent_id` match, also in input
    /// order. Rows pointing at an unknown parent are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use devis_core::models::{Estimate, EstimateRecord, StepRecord};
    /// use jiff::Timestamp;
    ///
    /// let record = EstimateRecord {
    ///     id: "e1".to_string(),
    ///     name: "Mobile app".to_string(),
    ///     description: None,
    ///     primary_color: "#112233".to_string(),
    ///     secondary_color: None,
    ///     hourly_rate: 100.0,
    ///     hours_max_multiplier: None,
    ///     sign_link: None,
    ///     user_id: "u1".to_string(),
    ///     created_at: Timestamp::now(),
    /// };
    /// let estimate = Estimate::from_records(record, vec![], vec![], vec![]);
    /// assert_eq!(estimate.hour_max_multiplier, 1.2);
    /// assert!(estimate.steps.is_empty());
    /// ```
    pub fn from_records(
        estimate: EstimateRecord,
        steps: Vec<StepRecord>,
        features: Vec<FeatureRecord>,
        schedule: Vec<ScheduleRecord>,
    ) -> Self {
        let sub_steps_of = |parent_id: &str| -> Vec<Step> {
            steps
                .iter()
                .filter(|row| row.parent_id.as_deref() == Some(parent_id))
                .enumerate()
                .map(|(i, row)| Step {
                    order: i as u32,
                    ..Step::from_record(row)
                })
                .collect()
        };

        let top_level: Vec<Step> = steps
            .iter()
            .filter(|row| row.parent_id.is_none())
            .enumerate()
            .map(|(i, row)| Step {
                order: i as u32,
                sub_steps: sub_steps_of(&row.id),
                ..Step::from_record(row)
            })
            .collect();

        Self {
            id: estimate.id,
            name: estimate.name,
            description: estimate.description,
            primary_color: estimate.primary_color,
            secondary_color: estimate
                .secondary_color
                .unwrap_or_else(|| "#FFFFFF".to_string()),
            hourly_rate: estimate.hourly_rate,
            hour_max_multiplier: estimate
                .hours_max_multiplier
                .unwrap_or(DEFAULT_HOUR_MAX_MULTIPLIER),
            sign_link: estimate.sign_link,
            features: features
                .into_iter()
                .map(|row| Feature {
                    label: row.label,
                    icon: row.icon,
                    color: row.color,
                })
                .collect(),
            steps: top_level,
            schedule: schedule
                .into_iter()
                .map(|row| Schedule {
                    duration: row.duration,
                    repartition: row.repartition,
                })
                .collect(),
        }
    }
}

impl Step {
    /// Maps a single stored row to a step, without sub-step resolution.
    fn from_record(row: &StepRecord) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            description: row.description.clone(),
            color: row.color.clone(),
            complexity: Complexity::from_score(row.complexity),
            hours: row.hours.unwrap_or(0.0),
            disable_rate: row.disable_max_multiplier.unwrap_or(false),
            is_additional: row.is_additional.unwrap_or(false),
            notes: row.notes.clone(),
            order: 0,
            sub_steps: Vec::new(),
        }
    }
}
