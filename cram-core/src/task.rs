//! Study tasks: theory / practice / revision units carved out of a topic.

use serde::{Deserialize, Serialize};

use crate::levels::TaskType;
use crate::scoring::{priority_score, required_hours};
use crate::topic::Topic;

/// Shares of a topic's required hours, in emission order.
const SPLIT: [(TaskType, f64); 3] = [
    (TaskType::Theory, 0.4),
    (TaskType::Practice, 0.4),
    (TaskType::Revision, 0.2),
];

/// Shares at or below this many hours (6 minutes) are dropped.
const MIN_TASK_HOURS: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub topic_name: String,
    pub subject_name: String,
    pub task_type: TaskType,
    pub duration_hours: f64,
    /// Inherited from the parent topic; fixed at creation.
    pub priority_score: f64,
}

impl Task {
    pub fn new(
        topic_name: impl Into<String>,
        subject_name: impl Into<String>,
        task_type: TaskType,
    ) -> Self {
        Self {
            topic_name: topic_name.into(),
            subject_name: subject_name.into(),
            task_type,
            duration_hours: 0.0,
            priority_score: 0.0,
        }
    }

    pub fn with_duration(mut self, hours: f64) -> Self {
        self.duration_hours = hours;
        self
    }

    pub fn with_priority(mut self, score: f64) -> Self {
        self.priority_score = score;
        self
    }

    /// Same topic/type/priority, different duration.
    pub fn portion(&self, hours: f64) -> Self {
        Self {
            duration_hours: hours,
            ..self.clone()
        }
    }
}

/// Split one topic into up to three tasks (theory, practice, revision).
pub fn generate_tasks(topic: &Topic) -> Vec<Task> {
    let total = required_hours(topic);
    if total <= 0.0 {
        return Vec::new();
    }

    let priority = priority_score(topic);
    SPLIT
        .iter()
        .map(|(task_type, share)| (*task_type, total * share))
        .filter(|(_, hours)| *hours > MIN_TASK_HOURS)
        .map(|(task_type, hours)| {
            Task::new(&topic.name, &topic.subject_name, task_type)
                .with_duration(hours)
                .with_priority(priority)
        })
        .collect()
}

/// All tasks for all topics, highest priority first.
///
/// The sort is stable, so equal priorities keep topic input order and the
/// theory/practice/revision order within a topic.
pub fn build_task_list(topics: &[Topic]) -> Vec<Task> {
    let mut tasks: Vec<Task> = topics.iter().flat_map(generate_tasks).collect();
    tasks.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
    tasks
}

pub fn total_hours(tasks: &[Task]) -> f64 {
    tasks.iter().map(|t| t.duration_hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::{Difficulty, Weakness, Weight};

    #[test]
    fn test_split_40_40_20() {
        let topic = Topic::new("Algebra", "Math").with_base_hours(10.0);
        let tasks = generate_tasks(&topic);
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].task_type, TaskType::Theory);
        assert_eq!(tasks[1].task_type, TaskType::Practice);
        assert_eq!(tasks[2].task_type, TaskType::Revision);
        assert!((tasks[0].duration_hours - 4.0).abs() < 1e-9);
        assert!((tasks[1].duration_hours - 4.0).abs() < 1e-9);
        assert!((tasks[2].duration_hours - 2.0).abs() < 1e-9);
        assert!(tasks.iter().all(|t| t.priority_score == priority_score(&topic)));
        assert!(tasks.iter().all(|t| t.subject_name == "Math" && t.topic_name == "Algebra"));
    }

    #[test]
    fn test_small_shares_dropped_not_rounded() {
        // 0.4h total: theory/practice 0.16h kept, revision 0.08h dropped
        let topic = Topic::new("Units", "Physics").with_base_hours(0.4);
        let tasks = generate_tasks(&topic);
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.task_type != TaskType::Revision));

        // exactly 0.1h shares are dropped too
        let tiny = Topic::new("Tiny", "Physics").with_base_hours(0.25);
        assert!(generate_tasks(&tiny).is_empty());
    }

    #[test]
    fn test_finished_topic_yields_nothing() {
        let done = Topic::new("Done", "Math").with_progress(1.0);
        assert!(generate_tasks(&done).is_empty());
    }

    #[test]
    fn test_task_list_sorted_and_stable() {
        let low = Topic::new("Low", "S").with_weight(Weight::Low);
        let high_a = Topic::new("HighA", "S")
            .with_weight(Weight::High)
            .with_weakness(Weakness::Weak)
            .with_difficulty(Difficulty::Medium);
        let high_b = high_a.clone().with_base_hours(3.0);
        let high_b = Topic { name: "HighB".into(), ..high_b };

        let tasks = build_task_list(&[low, high_a, high_b]);
        let order: Vec<_> = tasks
            .iter()
            .map(|t| (t.topic_name.as_str(), t.task_type))
            .collect();
        assert_eq!(
            order,
            vec![
                ("HighA", TaskType::Theory),
                ("HighA", TaskType::Practice),
                ("HighA", TaskType::Revision),
                ("HighB", TaskType::Theory),
                ("HighB", TaskType::Practice),
                ("HighB", TaskType::Revision),
                ("Low", TaskType::Theory),
                ("Low", TaskType::Practice),
                ("Low", TaskType::Revision),
            ]
        );
        for w in tasks.windows(2) {
            assert!(w[0].priority_score >= w[1].priority_score);
        }
    }

    #[test]
    fn test_portion_keeps_identity() {
        let t = Task::new("A", "S", TaskType::Practice)
            .with_duration(3.0)
            .with_priority(0.8);
        let p = t.portion(1.25);
        assert_eq!(p.topic_name, "A");
        assert_eq!(p.task_type, TaskType::Practice);
        assert_eq!(p.priority_score, 0.8);
        assert_eq!(p.duration_hours, 1.25);
        assert_eq!(t.duration_hours, 3.0);
    }
}
