//! Topic model and the boundary that turns raw caller records into topics.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlanError, Result};
use crate::levels::{Difficulty, Weakness, Weight};
use crate::normalize::{normalize_difficulty, normalize_weakness, normalize_weight};

const DEFAULT_BASE_HOURS: f64 = 2.0;

/// One syllabus unit. Built once from caller input and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub subject_name: String,
    pub weight: Weight,
    pub difficulty: Difficulty,
    pub weakness: Weakness,
    /// Fraction of mastery already achieved. Nominally 0.0 - 1.0, not clamped.
    pub progress: f64,
    /// Nominal effort in hours when starting from zero progress.
    pub base_hours: f64,
}

impl Topic {
    pub fn new(name: impl Into<String>, subject_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject_name: subject_name.into(),
            weight: Weight::Medium,
            difficulty: Difficulty::Medium,
            weakness: Weakness::Moderate,
            progress: 0.0,
            base_hours: DEFAULT_BASE_HOURS,
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_weakness(mut self, weakness: Weakness) -> Self {
        self.weakness = weakness;
        self
    }

    pub fn with_progress(mut self, progress: f64) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_base_hours(mut self, base_hours: f64) -> Self {
        self.base_hours = base_hours;
        self
    }
}

/// A topic record exactly as the caller sent it.
///
/// Every field is optional so that missing names are reported by
/// [`build_topics`] rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTopic {
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub topic_name: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub weakness: Option<String>,
    #[serde(default)]
    pub progress: Option<f64>,
    #[serde(default)]
    pub base_hours: Option<f64>,
}

impl RawTopic {
    pub fn new(subject_name: impl Into<String>, topic_name: impl Into<String>) -> Self {
        Self {
            subject_name: Some(subject_name.into()),
            topic_name: Some(topic_name.into()),
            ..Self::default()
        }
    }
}

/// Validate and default raw records into topics, preserving input order.
///
/// Fails on the first record missing `subject_name` or `topic_name`; no
/// partial list is returned.
pub fn build_topics(records: &[RawTopic]) -> Result<Vec<Topic>> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| build_topic(index, raw))
        .collect()
}

fn build_topic(index: usize, raw: &RawTopic) -> Result<Topic> {
    let subject_name = required(index, "subject_name", raw.subject_name.as_deref())?;
    let topic_name = required(index, "topic_name", raw.topic_name.as_deref())?;

    let difficulty = normalize_difficulty(raw.difficulty.as_deref().unwrap_or("medium"));
    let weight = normalize_weight(raw.weight.as_deref().unwrap_or("medium"));
    let weakness = normalize_weakness(raw.weakness.as_deref().unwrap_or("moderate"));

    // Values above 1.0 are read as percentages.
    let mut progress = raw.progress.unwrap_or(0.0);
    if progress > 1.0 {
        progress /= 100.0;
    }

    Ok(Topic {
        name: topic_name.to_string(),
        subject_name: subject_name.to_string(),
        weight,
        difficulty,
        weakness,
        progress,
        base_hours: raw.base_hours.unwrap_or(DEFAULT_BASE_HOURS),
    })
}

fn required<'a>(index: usize, field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => {
            warn!(index, field, "topic record rejected");
            Err(PlanError::MissingField { index, field })
        }
    }
}

/// Case-insensitive, whitespace-trimmed exact lookup by topic name.
pub fn find_topic<'a>(topics: &'a [Topic], name: &str) -> Option<&'a Topic> {
    let target = name.trim().to_lowercase();
    topics
        .iter()
        .find(|t| t.name.trim().to_lowercase() == target)
}
