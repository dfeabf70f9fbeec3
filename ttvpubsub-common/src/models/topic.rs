// File: ttvpubsub-common/src/models/topic.rs

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const HYPE_TRAIN_TOPIC_PREFIX: &str = "hype-train-events-v1";

/// A PubSub topic string, e.g. `hype-train-events-v1.44322889`.
///
/// Only topics this crate can decode get their own variant; everything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    HypeTrain { channel_id: String },
    Other(String),
}

impl Topic {
    pub fn parse(s: &str) -> Self {
        match s.split_once('.') {
            Some((HYPE_TRAIN_TOPIC_PREFIX, id)) if !id.is_empty() => Topic::HypeTrain {
                channel_id: id.to_string(),
            },
            _ => Topic::Other(s.to_string()),
        }
    }

    pub fn hype_train(channel_id: impl Into<String>) -> Self {
        Topic::HypeTrain { channel_id: channel_id.into() }
    }

    /// Channel the topic is scoped to, if the topic kind is known.
    pub fn channel_id(&self) -> Option<&str> {
        match self {
            Topic::HypeTrain { channel_id } => Some(channel_id),
            Topic::Other(_) => None,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::HypeTrain { channel_id } => write!(f, "{}.{}", HYPE_TRAIN_TOPIC_PREFIX, channel_id),
            Topic::Other(raw) => f.write_str(raw),
        }
    }
}

impl FromStr for Topic {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Topic::parse(s))
    }
}
