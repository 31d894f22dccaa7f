//! Command application against an estimate.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::index::StepIndex;
use crate::{
    models::{Estimate, Step, UpdateStepRequest},
    params::{AppendSubStep, Id, SetSchedule, StepCreate, SwapSteps, UpdateEstimate, UpdateStep},
    EstimateError, Result,
};

/// A single mutation applied to an estimate.
///
/// Commands are the explicit form of the tool-call mutation pathway: a
/// conversational agent (or any other interface) emits one command at a
/// time, the editor applies it by ID lookup, and the caller recomputes the
/// derived figures afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EstimateCommand {
    /// Append a new top-level step
    AddStep(StepCreate),
    /// Append a new sub-step under an existing top-level step
    AppendSubStep(AppendSubStep),
    /// Partially update an existing step or sub-step
    UpdateStep(UpdateStep),
    /// Remove a step (and its sub-steps) or a single sub-step
    RemoveStep(Id),
    /// Swap the order of two sibling steps
    SwapSteps(SwapSteps),
    /// Replace the schedule variants
    SetSchedule(SetSchedule),
    /// Partially update the estimate record (metadata and rates)
    UpdateEstimate(UpdateEstimate),
}

/// Applies a command to an estimate.
///
/// The ID index is rebuilt from the current tree on every call, so a
/// sequence of commands stays consistent without shared state. Returns a
/// human-readable change list suitable for
/// [`CommandResult`](crate::display::CommandResult) readback.
///
/// # Errors
///
/// * `EstimateError::StepNotFound` - When a referenced step ID does not
///   exist
/// * `EstimateError::InvalidInput` - When command parameters fail
///   validation (duplicate ID, negative hours, bad complexity string, ...)
pub fn apply(estimate: &mut Estimate, command: EstimateCommand) -> Result<Vec<String>> {
    let index = StepIndex::build(&estimate.steps);
    match command {
        EstimateCommand::AddStep(params) => add_step(estimate, &index, params),
        EstimateCommand::AppendSubStep(params) => append_sub_step(estimate, &index, params),
        EstimateCommand::UpdateStep(params) => update_step(estimate, &index, params),
        EstimateCommand::RemoveStep(params) => remove_step(estimate, &index, &params),
        EstimateCommand::SwapSteps(params) => swap_steps(estimate, &index, &params),
        EstimateCommand::SetSchedule(params) => set_schedule(estimate, params),
        EstimateCommand::UpdateEstimate(params) => update_estimate(estimate, params),
    }
}

fn ensure_new_id(index: &StepIndex, id: &str) -> Result<()> {
    if index.contains(id) {
        return Err(EstimateError::invalid_input("id")
            .with_reason(format!("Step ID '{id}' already exists in this estimate")));
    }
    Ok(())
}

fn add_step(estimate: &mut Estimate, index: &StepIndex, params: StepCreate) -> Result<Vec<String>> {
    ensure_new_id(index, &params.id)?;

    let mut step: Step = params.try_into()?;
    step.order = estimate.steps.len() as u32;
    let change = format!("Added step '{}' (ID '{}')", step.name, step.id);
    estimate.steps.push(step);

    Ok(vec![change])
}

fn append_sub_step(
    estimate: &mut Estimate,
    index: &StepIndex,
    params: AppendSubStep,
) -> Result<Vec<String>> {
    ensure_new_id(index, &params.sub.id)?;

    let path = index.require(&params.parent_id)?;
    if !path.is_top_level() {
        return Err(EstimateError::invalid_input("parent_id").with_reason(format!(
            "Step '{}' is a sub-step; sub-steps cannot be nested further",
            params.parent_id
        )));
    }

    let mut sub: Step = params.sub.try_into()?;
    let parent = &mut estimate.steps[path.top];
    sub.order = parent.sub_steps.len() as u32;
    let change = format!(
        "Added sub-step '{}' under step '{}'",
        sub.name, parent.name
    );
    parent.sub_steps.push(sub);

    Ok(vec![change])
}

fn update_step(
    estimate: &mut Estimate,
    index: &StepIndex,
    params: UpdateStep,
) -> Result<Vec<String>> {
    let path = index.require(&params.id)?;
    let request: UpdateStepRequest = params.try_into()?;

    let step = match path.sub {
        Some(sub) => &mut estimate.steps[path.top].sub_steps[sub],
        None => &mut estimate.steps[path.top],
    };

    let mut changes = Vec::new();
    if let Some(name) = request.name {
        changes.push(format!("Renamed step to '{name}'"));
        step.name = name;
    }
    if let Some(description) = request.description {
        step.description = Some(description);
        changes.push("Updated description".to_string());
    }
    if let Some(hours) = request.hours {
        changes.push(format!("Set hours to {hours}"));
        step.hours = hours;
    }
    if let Some(complexity) = request.complexity {
        changes.push(format!("Set complexity to {}", complexity.as_str()));
        step.complexity = complexity;
    }
    if let Some(color) = request.color {
        changes.push(format!("Set color to {color}"));
        step.color = color;
    }
    if let Some(disable_rate) = request.disable_rate {
        changes.push(if disable_rate {
            "Disabled the max-hour multiplier".to_string()
        } else {
            "Enabled the max-hour multiplier".to_string()
        });
        step.disable_rate = disable_rate;
    }
    if let Some(is_additional) = request.is_additional {
        changes.push(if is_additional {
            "Marked step as an optional add-on".to_string()
        } else {
            "Moved step into the main estimate".to_string()
        });
        step.is_additional = is_additional;
    }
    if let Some(notes) = request.notes {
        step.notes = Some(notes);
        changes.push("Updated notes".to_string());
    }

    Ok(changes)
}

fn remove_step(estimate: &mut Estimate, index: &StepIndex, params: &Id) -> Result<Vec<String>> {
    let path = index.require(&params.id)?;

    let removed = match path.sub {
        Some(sub) => {
            let parent = &mut estimate.steps[path.top];
            let removed = parent.sub_steps.remove(sub);
            renumber(&mut parent.sub_steps);
            removed
        }
        None => {
            let removed = estimate.steps.remove(path.top);
            renumber(&mut estimate.steps);
            removed
        }
    };

    Ok(vec![format!(
        "Removed step '{}' (ID '{}')",
        removed.name, removed.id
    )])
}

fn swap_steps(
    estimate: &mut Estimate,
    index: &StepIndex,
    params: &SwapSteps,
) -> Result<Vec<String>> {
    let first = index.require(&params.first_id)?;
    let second = index.require(&params.second_id)?;

    match (first.sub, second.sub) {
        (None, None) if first.top != second.top => {
            estimate.steps.swap(first.top, second.top);
            renumber(&mut estimate.steps);
        }
        (Some(a), Some(b)) if first.top == second.top && a != b => {
            let parent = &mut estimate.steps[first.top];
            parent.sub_steps.swap(a, b);
            renumber(&mut parent.sub_steps);
        }
        _ => {
            return Err(EstimateError::invalid_input("step_ids")
                .with_reason("Steps must be distinct siblings to be swapped"));
        }
    }

    Ok(vec![format!(
        "Swapped steps '{}' and '{}'",
        params.first_id, params.second_id
    )])
}

fn set_schedule(estimate: &mut Estimate, params: SetSchedule) -> Result<Vec<String>> {
    params.validate()?;
    let count = params.variants.len();
    estimate.schedule = params.variants;
    Ok(vec![format!("Replaced schedule with {count} variant(s)")])
}

fn update_estimate(estimate: &mut Estimate, params: UpdateEstimate) -> Result<Vec<String>> {
    params.validate()?;

    let mut changes = Vec::new();
    if let Some(name) = params.name {
        changes.push(format!("Renamed estimate to '{name}'"));
        estimate.name = name;
    }
    if let Some(description) = params.description {
        estimate.description = Some(description);
        changes.push("Updated description".to_string());
    }
    if let Some(color) = params.primary_color {
        changes.push(format!("Set primary color to {color}"));
        estimate.primary_color = color;
    }
    if let Some(color) = params.secondary_color {
        changes.push(format!("Set secondary color to {color}"));
        estimate.secondary_color = color;
    }
    if let Some(link) = params.sign_link {
        estimate.sign_link = Some(link);
        changes.push("Updated sign link".to_string());
    }
    if let Some(rate) = params.hourly_rate {
        estimate.hourly_rate = rate;
        changes.push(format!("Set hourly rate to {rate}"));
    }
    if let Some(multiplier) = params.hour_max_multiplier {
        estimate.hour_max_multiplier = multiplier;
        changes.push(format!("Set hour max multiplier to {multiplier}"));
    }

    Ok(changes)
}

fn renumber(steps: &mut [Step]) {
    for (i, step) in steps.iter_mut().enumerate() {
        step.order = i as u32;
    }
}
