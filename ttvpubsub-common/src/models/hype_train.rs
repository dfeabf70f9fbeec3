// File: ttvpubsub-common/src/models/hype_train.rs

use std::fmt;
use serde::{Deserialize, Serialize};

/// Decoded payload of a `hype-train-events-v1.<channel_id>` message.
///
/// The tolerant decoder lives in `ttvpubsub_core::messages::hype_train`; the serde
/// derives here are strict and only meant for forwarding an already-decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HypeTrainEvent {
    #[serde(rename = "type")]
    pub event_type: HypeTrainType,
    pub action: HypeTrainAction,
    pub source: HypeTrainSource,
    /// Bits, subs, etc. contributed by the triggering action.
    pub quantity: i64,
    /// Empty when the sender is not known.
    pub user_id: String,
    pub sequence_id: i64,
    pub progress: HypeTrainProgress,
}

/// Current progress of the ongoing hype train.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HypeTrainProgress {
    pub level: HypeTrainLevel,
    pub value: i64,
    pub goal: i64,
    pub total: i64,
    pub remaining_seconds: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HypeTrainLevel {
    pub value: i64,
    pub goal: i64,
    /// In the order the rewards appear in the payload.
    pub rewards: Vec<HypeTrainReward>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HypeTrainReward {
    pub id: String,
    pub group_id: String,
    #[serde(rename = "type")]
    pub reward_type: String, // e.g. "EMOTE", "BADGE"
    pub reward_level: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HypeTrainType {
    #[default]
    #[serde(rename = "hype-train-progression")]
    Progression,
    #[serde(rename = "hype-train-level-up")]
    LevelUp,
}

impl HypeTrainType {
    /// `"hype-train-level-up"` is the only value that yields `LevelUp`;
    /// anything else, including an absent field, is `Progression`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("hype-train-level-up") => HypeTrainType::LevelUp,
            _ => HypeTrainType::Progression,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HypeTrainType::Progression => "hype-train-progression",
            HypeTrainType::LevelUp => "hype-train-level-up",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HypeTrainAction {
    Cheer,
    #[default]
    Sub,
}

impl HypeTrainAction {
    /// Exactly `"CHEER"` maps to `Cheer`, everything else falls back to `Sub`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("CHEER") => HypeTrainAction::Cheer,
            _ => HypeTrainAction::Sub,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HypeTrainAction::Cheer => "CHEER",
            HypeTrainAction::Sub => "SUB",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HypeTrainSource {
    Bits,
    #[default]
    Sub,
}

impl HypeTrainSource {
    /// Exactly `"BITS"` maps to `Bits`, everything else falls back to `Sub`.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("BITS") => HypeTrainSource::Bits,
            _ => HypeTrainSource::Sub,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HypeTrainSource::Bits => "BITS",
            HypeTrainSource::Sub => "SUB",
        }
    }
}

impl fmt::Display for HypeTrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HypeTrainAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for HypeTrainSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
