//! Day scheduler: packs a priority-ordered task list into calendar days.
//!
//! A single cursor walks the task list across all days. A task that does not
//! fit the rest of a day is split: the day gets a new partial task sized to
//! the leftover hours and the remainder carries into the next day at the same
//! cursor position. Remaining durations live in a side vector indexed like the
//! input, so the caller's tasks are never mutated.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::levels::PlanStatus;
use crate::task::Task;

/// Remainders at or below this are treated as consumed.
pub const DURATION_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDay {
    pub date: NaiveDate,
    pub tasks: Vec<Task>,
    /// Hours used; never more than the plan's `hours_per_day`.
    pub total_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub days: Vec<PlanDay>,
    pub start_date: NaiveDate,
    pub exam_date: NaiveDate,
    pub hours_per_day: f64,
    pub status: PlanStatus,
}

impl StudyPlan {
    pub fn empty(
        start_date: NaiveDate,
        exam_date: NaiveDate,
        hours_per_day: f64,
        status: PlanStatus,
    ) -> Self {
        Self {
            days: Vec::new(),
            start_date,
            exam_date,
            hours_per_day,
            status,
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&PlanDay> {
        self.days.iter().find(|d| d.date == date)
    }

    pub fn scheduled_hours(&self) -> f64 {
        self.days.iter().map(|d| d.total_hours).sum()
    }

    pub fn task_count(&self) -> usize {
        self.days.iter().map(|d| d.tasks.len()).sum()
    }
}

/// Number of calendar days available before the exam; never less than one.
pub fn day_count(start_date: NaiveDate, exam_date: NaiveDate) -> u64 {
    (exam_date - start_date).num_days().max(1) as u64
}

/// Bin-pack `tasks` (already in priority order) into days starting at
/// `start_date`.
///
/// Stops early once every task is consumed. If tasks are left over and the
/// seed status is `Realistic`, the plan is escalated to `HighYieldOnly`.
pub fn schedule_tasks(
    tasks: &[Task],
    start_date: NaiveDate,
    exam_date: NaiveDate,
    hours_per_day: f64,
    seed_status: PlanStatus,
) -> StudyPlan {
    let mut remaining: Vec<f64> = tasks.iter().map(|t| t.duration_hours).collect();
    let mut cursor = 0;
    let mut days = Vec::new();

    for offset in 0..day_count(start_date, exam_date) {
        let Some(date) = start_date.checked_add_days(Days::new(offset)) else {
            break;
        };

        let mut hours_left = hours_per_day;
        let mut day_tasks = Vec::new();

        while hours_left > 0.0 && cursor < tasks.len() {
            let left_on_task = remaining[cursor];

            if left_on_task <= DURATION_EPSILON {
                cursor += 1;
                continue;
            }

            if left_on_task <= hours_left {
                day_tasks.push(tasks[cursor].portion(left_on_task));
                hours_left -= left_on_task;
                remaining[cursor] = 0.0;
                cursor += 1;
            } else {
                day_tasks.push(tasks[cursor].portion(hours_left));
                remaining[cursor] -= hours_left;
                hours_left = 0.0;
            }
        }

        days.push(PlanDay {
            date,
            tasks: day_tasks,
            total_hours: hours_per_day - hours_left,
        });

        if cursor >= tasks.len() {
            break;
        }
    }

    let mut status = seed_status;
    if cursor < tasks.len() && status == PlanStatus::Realistic {
        warn!(
            unscheduled = tasks.len() - cursor,
            "realistic plan left tasks unscheduled, escalating to high_yield_only"
        );
        status = PlanStatus::HighYieldOnly;
    }

    StudyPlan {
        days,
        start_date,
        exam_date,
        hours_per_day,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::TaskType;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(name: &str, task_type: TaskType, hours: f64) -> Task {
        Task::new(name, "S", task_type)
            .with_duration(hours)
            .with_priority(0.5)
    }

    #[test]
    fn test_whole_tasks_fill_days_in_order() {
        let tasks = vec![
            task("a", TaskType::Theory, 1.0),
            task("b", TaskType::Theory, 1.0),
            task("c", TaskType::Theory, 1.0),
        ];
        let plan = schedule_tasks(
            &tasks,
            date(2026, 3, 1),
            date(2026, 3, 10),
            2.0,
            PlanStatus::Realistic,
        );

        assert_eq!(plan.days.len(), 2);
        assert_eq!(plan.days[0].date, date(2026, 3, 1));
        assert_eq!(plan.days[1].date, date(2026, 3, 2));
        assert_eq!(plan.days[0].tasks.len(), 2);
        assert_eq!(plan.days[0].total_hours, 2.0);
        assert_eq!(plan.days[1].tasks[0].topic_name, "c");
        assert_eq!(plan.days[1].total_hours, 1.0);
        assert_eq!(plan.status, PlanStatus::Realistic);
    }

    #[test]
    fn test_split_across_days_conserves_hours() {
        let tasks = vec![
            task("long", TaskType::Practice, 5.0),
            task("short", TaskType::Revision, 0.5),
        ];
        let plan = schedule_tasks(
            &tasks,
            date(2026, 3, 1),
            date(2026, 3, 10),
            2.0,
            PlanStatus::Realistic,
        );

        assert_eq!(plan.days.len(), 3);
        let long_total: f64 = plan
            .days
            .iter()
            .flat_map(|d| d.tasks.iter())
            .filter(|t| t.topic_name == "long")
            .map(|t| t.duration_hours)
            .sum();
        assert!((long_total - 5.0).abs() < 1e-9);

        assert_eq!(plan.days[0].tasks.len(), 1);
        assert_eq!(plan.days[0].tasks[0].duration_hours, 2.0);
        assert_eq!(plan.days[2].tasks.len(), 2);
        assert!((plan.days[2].tasks[0].duration_hours - 1.0).abs() < 1e-9);
        assert_eq!(plan.days[2].tasks[1].topic_name, "short");
        assert!((plan.days[2].total_hours - 1.5).abs() < 1e-9);

        // caller's list untouched
        assert_eq!(tasks[0].duration_hours, 5.0);
    }

    #[test]
    fn test_budget_and_contiguity_hold() {
        let tasks: Vec<Task> = (0..7)
            .map(|i| task(&format!("t{i}"), TaskType::Theory, 0.7 + i as f64 * 0.3))
            .collect();
        let start = date(2026, 2, 27);
        let plan = schedule_tasks(&tasks, start, date(2026, 3, 20), 1.5, PlanStatus::Realistic);

        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(day.date, start + chrono::Duration::days(i as i64));
            assert!(day.total_hours <= plan.hours_per_day + 1e-9);
            let sum: f64 = day.tasks.iter().map(|t| t.duration_hours).sum();
            assert!((sum - day.total_hours).abs() < 1e-9);
        }
    }

    #[test]
    fn test_leftover_escalates_realistic_only() {
        let tasks = vec![task("a", TaskType::Theory, 3.0)];
        let start = date(2026, 3, 1);
        let exam = date(2026, 3, 2);

        let plan = schedule_tasks(&tasks, start, exam, 1.0, PlanStatus::Realistic);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.status, PlanStatus::HighYieldOnly);

        let plan = schedule_tasks(&tasks, start, exam, 1.0, PlanStatus::Compressed);
        assert_eq!(plan.status, PlanStatus::Compressed);

        let plan = schedule_tasks(&tasks, start, exam, 1.0, PlanStatus::LastMinute);
        assert_eq!(plan.status, PlanStatus::LastMinute);
    }

    #[test]
    fn test_tiny_tasks_are_skipped() {
        let tasks = vec![task("dust", TaskType::Theory, 1e-9), task("a", TaskType::Theory, 1.0)];
        let plan = schedule_tasks(
            &tasks,
            date(2026, 3, 1),
            date(2026, 3, 5),
            2.0,
            PlanStatus::Realistic,
        );
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].tasks.len(), 1);
        assert_eq!(plan.days[0].tasks[0].topic_name, "a");
    }

    #[test]
    fn test_day_count_floors_to_one() {
        assert_eq!(day_count(date(2026, 3, 1), date(2026, 3, 1)), 1);
        assert_eq!(day_count(date(2026, 3, 5), date(2026, 3, 1)), 1);
        assert_eq!(day_count(date(2026, 3, 1), date(2026, 3, 8)), 7);
    }

    #[test]
    fn test_empty_task_list_gives_one_empty_day() {
        let plan = schedule_tasks(
            &[],
            date(2026, 3, 1),
            date(2026, 3, 8),
            2.0,
            PlanStatus::Realistic,
        );
        assert_eq!(plan.days.len(), 1);
        assert!(plan.days[0].tasks.is_empty());
        assert_eq!(plan.days[0].total_hours, 0.0);
        assert_eq!(plan.status, PlanStatus::Realistic);
    }

    #[test]
    fn test_plan_queries() {
        let tasks = vec![task("a", TaskType::Theory, 1.5), task("b", TaskType::Theory, 1.0)];
        let plan = schedule_tasks(
            &tasks,
            date(2026, 3, 1),
            date(2026, 3, 8),
            2.0,
            PlanStatus::Realistic,
        );
        assert!((plan.scheduled_hours() - 2.5).abs() < 1e-9);
        assert_eq!(plan.task_count(), 3);
        assert_eq!(plan.day(date(2026, 3, 2)).map(|d| d.tasks.len()), Some(1));
        assert!(plan.day(date(2026, 3, 7)).is_none());
    }
}
