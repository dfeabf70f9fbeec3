// File: ttvpubsub-core/src/messages/hype_train.rs

use serde_json::Value;
use tracing::trace;

use crate::fields::{int_or_zero, object_field, str_field, string_or_empty};
use crate::models::{
    HypeTrainAction, HypeTrainEvent, HypeTrainLevel, HypeTrainProgress, HypeTrainReward,
    HypeTrainSource, HypeTrainType,
};
use crate::{Error, Result};

/// Decodes the payload of a `hype-train-events-v1` message:
///
/// ```text
/// { "type": "hype-train-progression",
///   "data": { "sequence_id": …, "action": "CHEER", "source": "BITS", "quantity": …,
///             "user_id": "…", "progress": { …, "level": { …, "rewards": [ … ] } } } }
/// ```
///
/// Only invalid JSON and a missing `data` / `data.progress` object are errors.
/// Every leaf field falls back to its default instead.
pub fn decode(raw: &str) -> Result<HypeTrainEvent> {
    trace!("decoding hype-train payload ({} bytes)", raw.len());
    let json: Value = serde_json::from_str(raw)
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;
    decode_value(&json)
}

/// Like [`decode`], for a payload that has already been parsed.
pub fn decode_value(json: &Value) -> Result<HypeTrainEvent> {
    if !json.is_object() {
        return Err(Error::MalformedPayload(
            "hype-train payload must be a JSON object".into(),
        ));
    }

    let data = object_field(json, "data")
        .ok_or_else(|| Error::MissingRequiredStructure("data".into()))?;
    let progress = object_field(data, "progress")
        .ok_or_else(|| Error::MissingRequiredStructure("data.progress".into()))?;

    Ok(HypeTrainEvent {
        event_type: HypeTrainType::from_wire(str_field(json, "type")),
        action: HypeTrainAction::from_wire(str_field(data, "action")),
        source: HypeTrainSource::from_wire(str_field(data, "source")),
        quantity: int_or_zero(data, "quantity"),
        user_id: string_or_empty(data, "user_id"),
        sequence_id: int_or_zero(data, "sequence_id"),
        progress: decode_progress(progress),
    })
}

fn decode_progress(progress: &Value) -> HypeTrainProgress {
    HypeTrainProgress {
        level: object_field(progress, "level").map(decode_level).unwrap_or_default(),
        value: int_or_zero(progress, "value"),
        goal: int_or_zero(progress, "goal"),
        total: int_or_zero(progress, "total"),
        remaining_seconds: int_or_zero(progress, "remaining_seconds"),
    }
}

fn decode_level(level: &Value) -> HypeTrainLevel {
    let rewards = level
        .get("rewards")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(decode_reward).collect())
        .unwrap_or_default();

    HypeTrainLevel {
        value: int_or_zero(level, "value"),
        goal: int_or_zero(level, "goal"),
        rewards,
    }
}

// Non-object entries still produce a (default) reward so positions line up with the payload.
fn decode_reward(reward: &Value) -> HypeTrainReward {
    HypeTrainReward {
        id: string_or_empty(reward, "id"),
        group_id: string_or_empty(reward, "group_id"),
        reward_type: string_or_empty(reward, "type"),
        reward_level: int_or_zero(reward, "reward_level"),
    }
}
