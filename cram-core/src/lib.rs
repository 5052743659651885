//! cram-core: exam study planner.
//!
//! Turns topics (weight, difficulty, self-reported weakness and progress) into
//! a day-by-day task schedule that fits the hours left before an exam.

pub mod budget;
pub mod error;
pub mod levels;
pub mod normalize;
pub mod planner;
pub mod request;
pub mod scheduler;
pub mod scoring;
pub mod serialize;
pub mod session;
pub mod task;
pub mod topic;

pub use budget::trim_to_budget;
pub use error::{PlanError, Result};
pub use levels::{Difficulty, PlanStatus, TaskType, Weakness, Weight};
pub use normalize::{
    normalize, normalize_difficulty, normalize_weakness, normalize_weight, FuzzyLevel,
};
pub use planner::generate_study_plan;
pub use request::PlanRequest;
pub use scheduler::{schedule_tasks, PlanDay, StudyPlan};
pub use scoring::{
    priority_score, required_hours, select_high_yield, HighYieldSelection, RankedTopic,
};
pub use serialize::{plan_to_value, to_value, topic_to_value};
pub use session::{StudySession, TopicPerformance, TopicStats};
pub use task::{build_task_list, generate_tasks, Task};
pub use topic::{build_topics, find_topic, RawTopic, Topic};
