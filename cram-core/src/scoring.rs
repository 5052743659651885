//! Priority scoring and effort estimation per topic, plus high-yield ranking.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::levels::{Difficulty, Weakness, Weight};
use crate::topic::Topic;

fn weight_value(weight: Weight) -> f64 {
    match weight {
        Weight::High => 1.0,
        Weight::Medium => 0.6,
        Weight::Low => 0.3,
    }
}

fn weakness_value(weakness: Weakness) -> f64 {
    match weakness {
        Weakness::Weak => 1.0,
        Weakness::Moderate => 0.6,
        Weakness::Strong => 0.3,
    }
}

fn difficulty_value(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Hard => 1.0,
        Difficulty::Medium => 0.7,
        Difficulty::Easy => 0.4,
    }
}

fn difficulty_factor(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Easy => 0.8,
        Difficulty::Medium => 1.0,
        Difficulty::Hard => 1.2,
    }
}

/// Higher means schedule earlier. Range is 0.32 - 1.0.
pub fn priority_score(topic: &Topic) -> f64 {
    0.5 * weight_value(topic.weight)
        + 0.3 * weakness_value(topic.weakness)
        + 0.2 * difficulty_value(topic.difficulty)
}

/// Estimated hours still needed for a topic.
pub fn required_hours(topic: &Topic) -> f64 {
    let remaining = (1.0 - topic.progress).max(0.0);
    topic.base_hours * remaining * difficulty_factor(topic.difficulty)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTopic {
    pub rank: usize,
    pub topic: Topic,
    pub priority_score: f64,
    pub estimated_remaining_hours: f64,
    pub combined_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighYieldSelection {
    pub total_topics: usize,
    pub selected_count: usize,
    pub topics: Vec<RankedTopic>,
}

/// Rank topics by `priority * (1 + remaining hours)` and keep the top
/// `max(min_count, round(fraction * n))`, capped at `n`.
pub fn select_high_yield(
    topics: &[Topic],
    fraction: f64,
    min_count: usize,
) -> Result<HighYieldSelection> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(PlanError::InvalidFraction(fraction));
    }

    let n = topics.len();
    let mut scored: Vec<RankedTopic> = topics
        .iter()
        .map(|t| {
            let priority = priority_score(t);
            let remaining = required_hours(t);
            RankedTopic {
                rank: 0,
                topic: t.clone(),
                priority_score: priority,
                estimated_remaining_hours: remaining,
                combined_score: priority * (1.0 + remaining),
            }
        })
        .collect();

    // stable: ties keep input order
    scored.sort_by(|a, b| b.combined_score.total_cmp(&a.combined_score));

    let top_n = min_count.max((fraction * n as f64).round() as usize).min(n);
    scored.truncate(top_n);
    for (i, entry) in scored.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    Ok(HighYieldSelection {
        total_topics: n,
        selected_count: top_n,
        topics: scored,
    })
}
