//! Conversion of plans and topics into plain JSON values for transmission.
//!
//! Enums become their snake_case names, dates become `YYYY-MM-DD`, structs
//! become objects keyed by field name.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::scheduler::StudyPlan;
use crate::topic::Topic;

/// Serialize any core entity. Core types only carry string keys, so this
/// does not fail in practice; a failure degrades to `Value::Null`.
pub fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        warn!(error = %err, "serialization failed");
        Value::Null
    })
}

pub fn plan_to_value(plan: &StudyPlan) -> Value {
    to_value(plan)
}

pub fn topic_to_value(topic: &Topic) -> Value {
    to_value(topic)
}

/// Parse a value produced by [`to_value`] back into its entity.
pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
