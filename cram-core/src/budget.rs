//! Greedy first-fit trimming of a priority-ordered task list to an hour budget.

use tracing::debug;

use crate::task::Task;

/// Keep tasks, in order, while they fit into `available_hours`.
///
/// Single pass: a task that does not fit is skipped and scanning continues, so
/// a later smaller task can still take the leftover. Zero-length tasks are
/// dropped. This is not an optimal knapsack.
pub fn trim_to_budget(tasks: &[Task], available_hours: f64) -> Vec<Task> {
    let mut used = 0.0;
    let mut kept = Vec::new();

    for task in tasks {
        if task.duration_hours <= 0.0 {
            continue;
        }
        if used + task.duration_hours <= available_hours {
            used += task.duration_hours;
            kept.push(task.clone());
        }
    }

    debug!(
        kept = kept.len(),
        dropped = tasks.len() - kept.len(),
        used_hours = used,
        available_hours,
        "trimmed task list to budget"
    );
    kept
}
