//! Error type for the planning core.

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("topic record {index} is missing required field {field:?}")]
    MissingField { index: usize, field: &'static str },

    #[error("practice attempt requires a non-blank topic name")]
    MissingTopicName,

    #[error("hours_per_day must be a positive number, got {0}")]
    InvalidHoursPerDay(f64),

    #[error("high-yield fraction must be within [0, 1], got {0}")]
    InvalidFraction(f64),

    #[error("unknown topic: {0:?}")]
    UnknownTopic(String),

    #[error("invalid request document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;

/// Reject non-finite or non-positive daily budgets.
pub fn validate_hours_per_day(hours_per_day: f64) -> Result<f64> {
    if hours_per_day.is_finite() && hours_per_day > 0.0 {
        Ok(hours_per_day)
    } else {
        warn!(hours_per_day, "rejected daily study budget");
        Err(PlanError::InvalidHoursPerDay(hours_per_day))
    }
}
