use jiff::Timestamp;

use devis_core::models::{
    Estimate, EstimateRecord, Repartition, ScheduleRecord, StepRecord,
};

/// Helper function to create an estimate record with sensible defaults
pub fn estimate_record(id: &str, hourly_rate: f64) -> EstimateRecord {
    EstimateRecord {
        id: id.to_string(),
        name: "Fixture estimate".to_string(),
        description: None,
        primary_color: "#0F172A".to_string(),
        secondary_color: None,
        hourly_rate,
        hours_max_multiplier: Some(1.2),
        sign_link: None,
        user_id: "user-1".to_string(),
        created_at: Timestamp::from_second(1_700_000_000).expect("valid timestamp"),
    }
}

/// Helper function to create a step row
pub fn step_record(id: &str, name: &str, parent_id: Option<&str>, hours: Option<f64>) -> StepRecord {
    StepRecord {
        id: id.to_string(),
        name: name.to_string(),
        description: None,
        complexity: 3.0,
        color: "#2563EB".to_string(),
        disable_max_multiplier: None,
        hours,
        is_additional: None,
        notes: None,
        parent_id: parent_id.map(str::to_string),
        estimate_id: "e1".to_string(),
        user_id: "user-1".to_string(),
    }
}

/// Helper function to create a schedule row with an explicit percent split
pub fn schedule_record(duration: u32, percents: &[f64]) -> ScheduleRecord {
    ScheduleRecord {
        id: format!("sched-{duration}"),
        duration,
        repartition: percents
            .iter()
            .enumerate()
            .map(|(i, &percent)| Repartition {
                month: (i + 1) as u32,
                percent,
            })
            .collect(),
        estimate_id: "e1".to_string(),
        user_id: "user-1".to_string(),
        created_at: Timestamp::from_second(1_700_000_000).expect("valid timestamp"),
    }
}

/// Assemble the standard two-step fixture estimate used across suites:
/// Auth (sub-steps totalling 10h) and Onboarding (leaf, 20h), rate 100,
/// multiplier 1.2, a single 50/50 two-month schedule.
pub fn fixture_estimate() -> Estimate {
    let record = estimate_record("e1", 100.0);
    let steps = vec![
        step_record("auth", "Auth", None, None),
        step_record("auth-api", "Auth API", Some("auth"), Some(6.0)),
        step_record("auth-ui", "Auth UI", Some("auth"), Some(4.0)),
        step_record("onboarding", "Onboarding", None, Some(20.0)),
    ];
    let schedule = vec![schedule_record(2, &[50.0, 50.0])];
    Estimate::from_records(record, steps, vec![], schedule)
}
