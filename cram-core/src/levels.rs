//! Closed enumerations shared by topics, tasks and plans.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Exam importance of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weight {
    High,
    Medium,
    Low,
}

/// Student's current command of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weakness {
    Weak,
    Moderate,
    Strong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Theory,
    Practice,
    Revision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    /// All estimated work fits in the available hours.
    Realistic,
    /// Work exceeded the budget and was trimmed to fit.
    Compressed,
    /// A realistic plan that still failed to drain the task list.
    HighYieldOnly,
    /// Exam is today (or already past): top-priority subset only.
    LastMinute,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Strict parse of the wire names only; fuzzy text goes through `normalize`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

impl Weight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weight::High => "high",
            Weight::Medium => "medium",
            Weight::Low => "low",
        }
    }
}

impl Weakness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weakness::Weak => "weak",
            Weakness::Moderate => "moderate",
            Weakness::Strong => "strong",
        }
    }
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Theory => "theory",
            TaskType::Practice => "practice",
            TaskType::Revision => "revision",
        }
    }
}

impl PlanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanStatus::Realistic => "realistic",
            PlanStatus::Compressed => "compressed",
            PlanStatus::HighYieldOnly => "high_yield_only",
            PlanStatus::LastMinute => "last_minute",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(Difficulty, Weight, Weakness, TaskType, PlanStatus);
