use super::*;
use crate::models::{Complexity, Estimate, Repartition, Schedule, Step};

fn leaf(id: &str, hours: f64) -> Step {
    Step::leaf(id, format!("Step {id}"), hours, Complexity::Low)
}

fn parent(id: &str, children: Vec<Step>) -> Step {
    let mut step = Step::leaf(id, format!("Step {id}"), 0.0, Complexity::Low);
    step.sub_steps = children;
    step
}

fn computed(steps: &[Step], rate: f64, multiplier: f64) -> Vec<ComputedStep> {
    steps
        .iter()
        .map(|s| ComputedStep::from_step(s, rate, multiplier))
        .collect()
}

fn half_split() -> Vec<Repartition> {
    vec![
        Repartition {
            month: 1,
            percent: 50.0,
        },
        Repartition {
            month: 2,
            percent: 50.0,
        },
    ]
}

#[test]
fn test_step_hours_min_leaf_uses_own_hours() {
    let step = leaf("a", 12.5);
    assert_eq!(step_hours_min(&step), 12.5);
}

#[test]
fn test_step_hours_min_leaf_defaults_to_zero() {
    let step = leaf("a", 0.0);
    assert_eq!(step_hours_min(&step), 0.0);
}

#[test]
fn test_step_hours_min_parent_sums_children() {
    let step = parent("p", vec![leaf("a", 10.0), leaf("b", 6.0), leaf("c", 4.0)]);
    assert_eq!(step_hours_min(&step), 20.0);

    // The parent's own hours field is ignored once children exist
    let mut with_own_hours = parent("p", vec![leaf("a", 10.0)]);
    with_own_hours.hours = 99.0;
    assert_eq!(step_hours_min(&with_own_hours), 10.0);
}

#[test]
fn test_step_hours_min_recurses_through_deeper_nesting() {
    let tree = parent(
        "root",
        vec![
            parent("mid", vec![leaf("a", 3.0), leaf("b", 5.0)]),
            leaf("c", 2.0),
        ],
    );
    assert_eq!(step_hours_min(&tree), 10.0);
}

#[test]
fn test_step_complexity_leaf_reports_own_score() {
    let mut step = leaf("a", 4.0);
    step.complexity = Complexity::High;
    assert_eq!(step_complexity(&step), 5.0);
}

#[test]
fn test_step_complexity_parent_is_unrounded_mean_of_children() {
    let mut low = leaf("a", 1.0);
    low.complexity = Complexity::Low;
    let mut medium = leaf("b", 1.0);
    medium.complexity = Complexity::Medium;
    let mut high = leaf("c", 1.0);
    high.complexity = Complexity::High;

    // [1, 3, 5] averages to exactly 3, not an enum bucket
    let step = parent("p", vec![low.clone(), medium, high]);
    assert_eq!(step_complexity(&step), 3.0);

    // [1, 1] averages to 1; [1, 5] to an in-between 3.0 as raw mean
    let mut high2 = leaf("d", 1.0);
    high2.complexity = Complexity::High;
    let uneven = parent("q", vec![low, high2]);
    assert_eq!(step_complexity(&uneven), 3.0);
}

#[test]
fn test_step_complexity_mean_of_direct_children_at_every_level() {
    // Inner parent averages its two leaves (1 and 5 -> 3); the outer level
    // averages that 3 with a direct High leaf (5) to 4, which differs from
    // the mean over all three leaves (11/3).
    let mut low = leaf("a", 1.0);
    low.complexity = Complexity::Low;
    let mut high = leaf("b", 1.0);
    high.complexity = Complexity::High;
    let inner = parent("mid", vec![low, high]);

    let mut direct_high = leaf("c", 1.0);
    direct_high.complexity = Complexity::High;
    let outer = parent("root", vec![inner, direct_high]);

    assert_eq!(step_complexity(&outer), 4.0);
}

#[test]
fn test_step_complexity_empty_sub_steps_defaults_to_low() {
    let step = leaf("a", 0.0);
    assert_eq!(step_complexity(&step), Complexity::Low.score());
}

#[test]
fn test_compute_step_metrics_applies_multiplier() {
    let step = leaf("a", 10.0);
    let metrics = compute_step_metrics(&step, 100.0, 1.2);

    assert_eq!(metrics.hours_min, 10.0);
    assert_eq!(metrics.hours_max, 12.0);
    assert_eq!(metrics.cost_min, 1000.0);
    assert_eq!(metrics.cost_max, 1200.0);
}

#[test]
fn test_compute_step_metrics_rounds_hours_max_half_up() {
    // 7 * 1.07 = 7.49 -> 7;  7 * 1.5 = 10.5 -> 11
    let step = leaf("a", 7.0);
    assert_eq!(compute_step_metrics(&step, 0.0, 1.07).hours_max, 7.0);
    assert_eq!(compute_step_metrics(&step, 0.0, 1.5).hours_max, 11.0);
}

#[test]
fn test_compute_step_metrics_disable_rate_collapses_bounds() {
    let mut step = leaf("a", 10.0);
    step.disable_rate = true;

    for multiplier in [1.0, 1.2, 2.0, 10.0] {
        let metrics = compute_step_metrics(&step, 100.0, multiplier);
        assert_eq!(metrics.hours_max, metrics.hours_min);
        assert_eq!(metrics.cost_max, metrics.cost_min);
    }
}

#[test]
fn test_compute_step_metrics_monotonic_in_rate_and_multiplier() {
    let step = leaf("a", 13.0);

    let mut previous_cost = compute_step_metrics(&step, 0.0, 1.2);
    for rate in [10.0, 50.0, 135.0, 400.0] {
        let metrics = compute_step_metrics(&step, rate, 1.2);
        assert!(metrics.cost_min >= previous_cost.cost_min);
        assert!(metrics.cost_max >= previous_cost.cost_max);
        previous_cost = metrics;
    }

    let mut previous_hours = compute_step_metrics(&step, 100.0, 1.0);
    for multiplier in [1.1, 1.2, 1.5, 3.0] {
        let metrics = compute_step_metrics(&step, 100.0, multiplier);
        assert!(metrics.hours_max >= previous_hours.hours_max);
        previous_hours = metrics;
    }
}

#[test]
fn test_aggregate_totals_concrete_scenario() {
    // A: 10h, B: 20h, rate 100, multiplier 1.2
    let steps = vec![leaf("a", 10.0), leaf("b", 20.0)];
    let totals = aggregate_totals(&steps, 100.0, 1.2);

    assert_eq!(totals.hours_min, 30.0);
    assert_eq!(totals.hours_max, 36.0);
    assert_eq!(totals.cost_min, 3000.0);
    assert_eq!(totals.cost_max, 3600.0);
}

#[test]
fn test_aggregate_totals_empty_list_is_zero() {
    let totals = aggregate_totals(&[], 135.0, 1.2);
    assert_eq!(totals, Totals::default());
}

#[test]
fn test_aggregate_totals_excludes_additional_steps() {
    let mut option = leaf("opt", 40.0);
    option.is_additional = true;
    let steps = vec![leaf("a", 10.0), option];

    let totals = aggregate_totals(&steps, 100.0, 1.2);
    let option_totals = aggregate_option_totals(&steps, 100.0, 1.2);

    assert_eq!(totals.hours_min, 10.0);
    assert_eq!(option_totals.hours_min, 40.0);
    // No double counting between the two views
    assert_eq!(totals.hours_min + option_totals.hours_min, 50.0);
}

#[test]
fn test_allocation_two_step_even_split() {
    // Month 1 capacity 10 takes all of A, month 2 capacity 10 takes all of B
    let steps = computed(&[leaf("a", 10.0), leaf("b", 10.0)], 100.0, 1.0);
    let months = allocate_steps_to_months(&steps, &half_split(), 20.0);

    assert_eq!(months.len(), 2);
    assert_eq!(months[0].steps.len(), 1);
    assert_eq!(months[0].steps[0].id, "a");
    assert_eq!(months[1].steps.len(), 1);
    assert_eq!(months[1].steps[0].id, "b");
}

#[test]
fn test_allocation_step_spans_two_months() {
    // One 30h step against two months of capacity 15 each
    let steps = computed(&[leaf("c", 30.0)], 100.0, 1.0);
    let months = allocate_steps_to_months(&steps, &half_split(), 30.0);

    assert_eq!(months[0].steps.len(), 1);
    assert_eq!(months[0].steps[0].id, "c");
    assert_eq!(months[1].steps.len(), 1);
    assert_eq!(months[1].steps[0].id, "c");
}

#[test]
fn test_allocation_step_appears_at_most_once_per_month() {
    // Three small steps all land in month 1; none is listed twice
    let steps = computed(&[leaf("a", 2.0), leaf("b", 2.0), leaf("c", 2.0)], 1.0, 1.0);
    let repartition = vec![Repartition {
        month: 1,
        percent: 100.0,
    }];

    let months = allocate_steps_to_months(&steps, &repartition, 6.0);
    let ids: Vec<&str> = months[0].steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_allocation_zero_total_hours_leaves_months_empty() {
    let steps = computed(&[leaf("a", 0.0)], 100.0, 1.2);
    let months = allocate_steps_to_months(&steps, &half_split(), 0.0);

    assert!(months.iter().all(|m| m.steps.is_empty()));
}

#[test]
fn test_allocation_zero_percent_month_allocates_nothing() {
    let steps = computed(&[leaf("a", 10.0)], 100.0, 1.0);
    let repartition = vec![
        Repartition {
            month: 1,
            percent: 0.0,
        },
        Repartition {
            month: 2,
            percent: 100.0,
        },
    ];

    let months = allocate_steps_to_months(&steps, &repartition, 10.0);
    assert!(months[0].steps.is_empty());
    assert_eq!(months[1].steps.len(), 1);
}

#[test]
fn test_allocation_zero_hour_steps_are_skipped() {
    let steps = computed(&[leaf("zero", 0.0), leaf("a", 10.0)], 100.0, 1.0);
    let repartition = vec![Repartition {
        month: 1,
        percent: 100.0,
    }];

    let months = allocate_steps_to_months(&steps, &repartition, 10.0);
    let ids: Vec<&str> = months[0].steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn test_allocation_runs_out_of_months() {
    // 40h of work against 20h of scheduled capacity: B never finishes and C
    // is never allocated, without error
    let steps = computed(&[leaf("a", 10.0), leaf("b", 20.0), leaf("c", 10.0)], 1.0, 1.0);
    let months = allocate_steps_to_months(&steps, &half_split(), 20.0);

    let month1: Vec<&str> = months[0].steps.iter().map(|s| s.id.as_str()).collect();
    let month2: Vec<&str> = months[1].steps.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(month1, vec!["a"]);
    assert_eq!(month2, vec!["b"]);
}

#[test]
fn test_allocation_covers_every_nonzero_step_when_capacity_suffices() {
    let steps = computed(
        &[leaf("a", 7.0), leaf("b", 13.0), leaf("c", 5.0)],
        1.0,
        1.0,
    );
    let repartition = vec![
        Repartition {
            month: 1,
            percent: 40.0,
        },
        Repartition {
            month: 2,
            percent: 40.0,
        },
        Repartition {
            month: 3,
            percent: 20.0,
        },
    ];

    let months = allocate_steps_to_months(&steps, &repartition, 25.0);
    for step in &steps {
        assert!(
            months.iter().any(|m| m.steps.iter().any(|s| s.id == step.id)),
            "step {} missing from every month",
            step.id
        );
    }
}

#[test]
fn test_projection_rounds_and_accumulates() {
    let repartition = vec![
        Repartition {
            month: 1,
            percent: 33.0,
        },
        Repartition {
            month: 2,
            percent: 33.0,
        },
        Repartition {
            month: 3,
            percent: 34.0,
        },
    ];

    let months = project_monthly_cost(&repartition, 1000.0, 2000.0);
    assert_eq!(months[0].min, 330.0);
    assert_eq!(months[0].max, 660.0);
    assert_eq!(months[1].cum_min, 660.0);
    assert_eq!(months[2].cum_min, 1000.0);
    assert_eq!(months[2].cum_max, 2000.0);
}

#[test]
fn test_projection_empty_repartition() {
    assert!(project_monthly_cost(&[], 1000.0, 1200.0).is_empty());
}

#[test]
fn test_computed_estimate_splits_main_and_options() {
    let mut estimate = Estimate::new("e1", "Test");
    estimate.hourly_rate = 100.0;
    estimate.hour_max_multiplier = 1.2;
    estimate.steps.push(leaf("a", 10.0));
    let mut option = leaf("opt", 5.0);
    option.is_additional = true;
    estimate.steps.push(option);

    let computed = ComputedEstimate::from_estimate(&estimate);
    assert_eq!(computed.steps.len(), 1);
    assert_eq!(computed.options.len(), 1);
    assert_eq!(computed.totals.cost_min, 1000.0);
    assert_eq!(computed.option_totals.cost_min, 500.0);
}

#[test]
fn test_computed_estimate_never_mutates_input() {
    let mut estimate = Estimate::new("e1", "Test");
    estimate.steps.push(parent("p", vec![leaf("a", 4.0)]));
    estimate.schedule.push(Schedule::even(2));

    let before = estimate.clone();
    let computed = ComputedEstimate::from_estimate(&estimate);
    let _ = computed.allocation(0).unwrap();
    let _ = computed.cost_projection(0).unwrap();

    assert_eq!(estimate, before);
}

#[test]
fn test_computed_estimate_unknown_variant() {
    let estimate = Estimate::new("e1", "Test");
    let computed = ComputedEstimate::from_estimate(&estimate);

    match computed.allocation(0) {
        Err(crate::EstimateError::ScheduleNotFound { index, available }) => {
            assert_eq!(index, 0);
            assert_eq!(available, 0);
        }
        other => panic!("Expected ScheduleNotFound, got {other:?}"),
    }
}
