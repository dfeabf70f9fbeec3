// File: ttvpubsub-core/src/messages/frame.rs

use serde_json::Value;
use tracing::trace;

use crate::fields::{object_field, str_field, string_or_empty};
use crate::models::Topic;
use crate::{Error, Result};

/// One server -> client text frame, keyed by its top-level `type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubSubFrame {
    /// `{"type":"MESSAGE","data":{"topic":"…","message":"<json text>"}}`
    /// The message stays as text; the topic decides which decoder reads it.
    Message { topic: Topic, message: String },
    /// Reply to a LISTEN/UNLISTEN. `error` is `None` on success.
    Response { nonce: Option<String>, error: Option<String> },
    Pong,
    /// Server is about to drop the connection; client should reconnect.
    Reconnect,
    AuthRevoked { nonce: Option<String>, topics: Vec<String> },
    /// Any frame type this crate does not know. Holds the `type` value.
    Unknown(String),
}

impl PubSubFrame {
    pub fn parse(raw: &str) -> Result<Self> {
        let json: Value = serde_json::from_str(raw)
            .map_err(|e| Error::MalformedPayload(e.to_string()))?;
        Self::from_value(&json)
    }

    pub fn from_value(json: &Value) -> Result<Self> {
        let frame_type = str_field(json, "type")
            .ok_or_else(|| Error::MalformedPayload("frame has no 'type' string".into()))?;
        trace!("frame type={}", frame_type);

        let frame = match frame_type {
            "MESSAGE" => {
                let data = object_field(json, "data")
                    .ok_or_else(|| Error::MissingRequiredStructure("data".into()))?;
                let topic = str_field(data, "topic")
                    .ok_or_else(|| Error::MissingRequiredStructure("data.topic".into()))?;
                let message = str_field(data, "message")
                    .ok_or_else(|| Error::MissingRequiredStructure("data.message".into()))?;
                PubSubFrame::Message {
                    topic: Topic::parse(topic),
                    message: message.to_string(),
                }
            }
            "RESPONSE" => PubSubFrame::Response {
                nonce: non_empty(string_or_empty(json, "nonce")),
                error: non_empty(string_or_empty(json, "error")),
            },
            "PONG" => PubSubFrame::Pong,
            "RECONNECT" => PubSubFrame::Reconnect,
            "AUTH_REVOKED" => {
                let topics = json
                    .pointer("/data/topics")
                    .and_then(Value::as_array)
                    .map(|items| {
                        items
                            .iter()
                            .filter_map(Value::as_str)
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default();
                PubSubFrame::AuthRevoked {
                    nonce: non_empty(string_or_empty(json, "nonce")),
                    topics,
                }
            }
            other => PubSubFrame::Unknown(other.to_string()),
        };
        Ok(frame)
    }

    /// Frames that only keep the connection healthy and carry no data.
    pub fn is_health_check(&self) -> bool {
        matches!(self, PubSubFrame::Pong)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
