//! Caller-owned study session: topics, the current plan, and practice
//! performance per topic.
//!
//! Nothing here is global. Whoever stores sessions owns the value and passes
//! it in; the planner itself stays stateless between calls.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::levels::Difficulty;
use crate::planner::generate_study_plan;
use crate::scheduler::{PlanDay, StudyPlan};
use crate::topic::{build_topics, find_topic, RawTopic, Topic};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicPerformance {
    pub topic_name: String,
    pub attempts: u32,
    pub correct: u32,
    pub last_difficulty: Difficulty,
    pub last_updated: DateTime<Utc>,
}

impl TopicPerformance {
    fn new(topic_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            topic_name: topic_name.to_string(),
            attempts: 0,
            correct: 0,
            last_difficulty: Difficulty::Medium,
            last_updated: now,
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.correct as f64 / self.attempts as f64
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TopicStats {
    pub attempts: u32,
    pub correct: u32,
    pub accuracy: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub topics: Vec<Topic>,
    pub plan: Option<StudyPlan>,
    /// Keyed by trimmed topic name as given to `record_attempt`.
    pub performance: BTreeMap<String, TopicPerformance>,
}

impl StudySession {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self {
            topics,
            ..Self::default()
        }
    }

    pub fn from_raw(records: &[RawTopic]) -> Result<Self> {
        Ok(Self::new(build_topics(records)?))
    }

    pub fn find_topic(&self, name: &str) -> Option<&Topic> {
        find_topic(&self.topics, name)
    }

    /// Generate a plan over this session's topics and keep it.
    pub fn generate_plan(
        &mut self,
        start_date: NaiveDate,
        exam_date: NaiveDate,
        hours_per_day: f64,
    ) -> Result<&StudyPlan> {
        let plan = generate_study_plan(&self.topics, start_date, exam_date, hours_per_day)?;
        Ok(self.plan.insert(plan))
    }

    pub fn plan_for(&self, date: NaiveDate) -> Option<&PlanDay> {
        self.plan.as_ref()?.day(date)
    }

    /// Record one practice answer for `topic_name`.
    ///
    /// `difficulty` only updates the stored level when it is exactly one of
    /// `easy`, `medium`, `hard` (case-insensitive).
    pub fn record_attempt(
        &mut self,
        topic_name: &str,
        was_correct: bool,
        difficulty: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<&TopicPerformance> {
        let key = topic_name.trim();
        if key.is_empty() {
            return Err(PlanError::MissingTopicName);
        }

        let perf = self
            .performance
            .entry(key.to_string())
            .or_insert_with(|| TopicPerformance::new(key, now));

        perf.attempts += 1;
        if was_correct {
            perf.correct += 1;
        }
        let level = difficulty.and_then(|d| Difficulty::from_name(&d.trim().to_lowercase()));
        if let Some(level) = level {
            perf.last_difficulty = level;
        }
        perf.last_updated = now;

        Ok(perf)
    }

    pub fn topic_stats(&self, topic_name: &str) -> TopicStats {
        match self.performance.get(topic_name.trim()) {
            Some(perf) => TopicStats {
                attempts: perf.attempts,
                correct: perf.correct,
                accuracy: perf.accuracy(),
            },
            None => TopicStats {
                attempts: 0,
                correct: 0,
                accuracy: 0.0,
            },
        }
    }

    /// Next practice level from past accuracy: >= 80% hard, <= 40% easy.
    pub fn suggest_difficulty(&self, topic_name: &str) -> Difficulty {
        let Some(perf) = self.performance.get(topic_name.trim()) else {
            return Difficulty::Medium;
        };
        if perf.attempts == 0 {
            return Difficulty::Medium;
        }

        let accuracy = perf.accuracy();
        if accuracy >= 0.8 {
            Difficulty::Hard
        } else if accuracy <= 0.4 {
            Difficulty::Easy
        } else {
            Difficulty::Medium
        }
    }

    /// Like [`find_topic`](Self::find_topic) but an error when absent.
    pub fn require_topic(&self, name: &str) -> Result<&Topic> {
        self.find_topic(name)
            .ok_or_else(|| PlanError::UnknownTopic(name.trim().to_string()))
    }
}
