//! Schedule request document as sent by callers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::planner::generate_study_plan;
use crate::scheduler::StudyPlan;
use crate::topic::{build_topics, RawTopic, Topic};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub topics: Vec<RawTopic>,
    pub start_date: NaiveDate,
    pub exam_date: NaiveDate,
    /// Falls back to the caller's configured default when absent.
    #[serde(default)]
    pub hours_per_day: Option<f64>,
}

impl PlanRequest {
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn topics(&self) -> Result<Vec<Topic>> {
        build_topics(&self.topics)
    }

    /// Validate topics and generate the plan in one step.
    pub fn plan(&self, default_hours_per_day: f64) -> Result<StudyPlan> {
        let topics = self.topics()?;
        let hours = self.hours_per_day.unwrap_or(default_hours_per_day);
        generate_study_plan(&topics, self.start_date, self.exam_date, hours)
    }
}
