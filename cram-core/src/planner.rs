//! Study planner: picks a planning mode from the time left before the exam
//! and drives task generation, trimming and day scheduling.

use chrono::NaiveDate;
use tracing::debug;

use crate::budget::trim_to_budget;
use crate::error::{validate_hours_per_day, Result};
use crate::levels::PlanStatus;
use crate::scheduler::{schedule_tasks, StudyPlan};
use crate::task::{build_task_list, total_hours};
use crate::topic::Topic;

/// Share of the task list kept when the exam is today or already past.
const LAST_MINUTE_FRACTION: f64 = 0.3;

/// Build a day-by-day plan for `topics` between `start_date` and `exam_date`.
///
/// - exam today or earlier: last-minute mode
/// - required hours fit the budget: realistic, nothing trimmed
/// - otherwise: compressed, trimmed to the budget
pub fn generate_study_plan(
    topics: &[Topic],
    start_date: NaiveDate,
    exam_date: NaiveDate,
    hours_per_day: f64,
) -> Result<StudyPlan> {
    let hours_per_day = validate_hours_per_day(hours_per_day)?;
    let days_left = (exam_date - start_date).num_days();

    if days_left <= 0 {
        return Ok(last_minute_plan(topics, start_date, exam_date, hours_per_day));
    }

    let mut tasks = build_task_list(topics);
    let required = total_hours(&tasks);
    let available = days_left as f64 * hours_per_day;

    let status = if required <= available {
        PlanStatus::Realistic
    } else {
        tasks = trim_to_budget(&tasks, available);
        PlanStatus::Compressed
    };

    debug!(
        days_left,
        required_hours = required,
        available_hours = available,
        status = %status,
        "selected planning mode"
    );

    Ok(schedule_tasks(&tasks, start_date, exam_date, hours_per_day, status))
}

/// Top 30% of tasks by priority (at least one), trimmed to the hours left.
fn last_minute_plan(
    topics: &[Topic],
    start_date: NaiveDate,
    exam_date: NaiveDate,
    hours_per_day: f64,
) -> StudyPlan {
    let mut tasks = build_task_list(topics);
    if tasks.is_empty() {
        debug!("last-minute mode with no tasks");
        return StudyPlan::empty(start_date, exam_date, hours_per_day, PlanStatus::LastMinute);
    }

    let keep = ((tasks.len() as f64 * LAST_MINUTE_FRACTION) as usize).max(1);
    tasks.truncate(keep);

    let days_left = (exam_date - start_date).num_days().max(1);
    let available = days_left as f64 * hours_per_day;
    let tasks = trim_to_budget(&tasks, available);

    debug!(
        kept = tasks.len(),
        available_hours = available,
        "selected last-minute mode"
    );

    schedule_tasks(&tasks, start_date, exam_date, hours_per_day, PlanStatus::LastMinute)
}
