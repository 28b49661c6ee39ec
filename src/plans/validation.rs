//! Plan and table validation.
//!
//! Both predicates fail closed: anything absent or malformed is invalid.

use serde_json::Value;

use super::types::{ExerciseTable, RoutineBody, TrainingPlan, EXERCISE_COLUMN};

/// Check a single routine's exercise table.
///
/// Valid iff present, rectangular, non-empty and carrying an
/// [`EXERCISE_COLUMN`] column.
pub fn is_table_valid(table: Option<&ExerciseTable>) -> bool {
    match table {
        Some(table) => {
            table.is_rectangular() && !table.is_empty() && table.has_column(EXERCISE_COLUMN)
        }
        None => false,
    }
}

/// Check whether a routine body counts as a training day.
pub fn is_routine_valid(body: &RoutineBody) -> bool {
    match body {
        RoutineBody::Table(table) => is_table_valid(Some(table)),
        RoutineBody::List(entries) => !entries.is_empty(),
    }
}

/// Check a generated plan has at least one training day with content.
pub fn is_plan_valid(plan: Option<&TrainingPlan>) -> bool {
    let Some(plan) = plan else {
        return false;
    };

    let valid = plan.routines().iter().any(|r| is_routine_valid(&r.body));
    if !valid {
        tracing::debug!("Plan with {} routine(s) has no valid training day", plan.len());
    }
    valid
}

/// Check an untyped plan, as received from upstream JSON.
///
/// Non-object values are invalid. Days whose bodies cannot be decoded do not
/// count but do not invalidate the remaining days.
pub fn is_plan_value_valid(value: &Value) -> bool {
    let Some(days) = value.as_object() else {
        return false;
    };

    days.iter().any(|(name, body)| match RoutineBody::from_value(body) {
        Ok(body) => is_routine_valid(&body),
        Err(e) => {
            tracing::debug!("Skipping routine '{}': {}", name, e);
            false
        }
    })
}
