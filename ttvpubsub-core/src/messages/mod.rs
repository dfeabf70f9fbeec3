// File: ttvpubsub-core/src/messages/mod.rs

pub mod frame;
pub mod hype_train;
pub mod request;

pub use frame::PubSubFrame;
pub use request::{ClientFrame, ListenData};

use tracing::debug;

use crate::models::{HypeTrainEvent, Topic};
use crate::Result;

/// Typed payload of a MESSAGE frame. One variant per topic kind this crate decodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PubSubMessageData {
    HypeTrain(HypeTrainEvent),
}

/// Picks the decoder for `topic` and runs it over `message`.
///
/// `Ok(None)` means the topic is not one we decode. Decoder errors are passed through.
pub fn parse_pubsub_message(topic: &str, message: &str) -> Result<Option<PubSubMessageData>> {
    parse_topic_message(&Topic::parse(topic), message)
}

pub fn parse_topic_message(topic: &Topic, message: &str) -> Result<Option<PubSubMessageData>> {
    match topic {
        Topic::HypeTrain { channel_id } => {
            debug!("hype-train message for channel {}", channel_id);
            hype_train::decode(message).map(|evt| Some(PubSubMessageData::HypeTrain(evt)))
        }
        Topic::Other(raw) => {
            debug!("unhandled topic={:?}", raw);
            Ok(None)
        }
    }
}

/// Decodes the payload of a MESSAGE frame; every other frame kind yields `Ok(None)`.
pub fn route_frame(frame: &PubSubFrame) -> Result<Option<PubSubMessageData>> {
    match frame {
        PubSubFrame::Message { topic, message } => parse_topic_message(topic, message),
        other => {
            debug!("frame carries no message: {:?}", other);
            Ok(None)
        }
    }
}
