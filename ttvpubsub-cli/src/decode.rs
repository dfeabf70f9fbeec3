//! src/decode.rs

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use ttvpubsub_core::messages::{hype_train, PubSubFrame};
use ttvpubsub_core::models::HypeTrainEvent;
use ttvpubsub_core::{route_frame, PubSubMessageData};

use crate::config::InputSource;

pub async fn read_input(source: &InputSource) -> anyhow::Result<String> {
    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading stdin")?;
            Ok(buf)
        }
        InputSource::File(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display())),
    }
}

/// Bare payloads always yield an event. A frame yields one only if it is a
/// MESSAGE on a hype-train topic.
pub fn decode_input(raw: &str, is_frame: bool) -> ttvpubsub_core::Result<Option<HypeTrainEvent>> {
    if !is_frame {
        return hype_train::decode(raw).map(Some);
    }

    let frame = PubSubFrame::parse(raw)?;
    debug!("decoded frame: {:?}", frame);
    match route_frame(&frame)? {
        Some(PubSubMessageData::HypeTrain(evt)) => Ok(Some(evt)),
        None => {
            info!("frame carries no hype-train event");
            Ok(None)
        }
    }
}
