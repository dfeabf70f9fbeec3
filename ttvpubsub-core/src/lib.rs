// src/lib.rs

pub mod fields;
pub mod messages;

pub use ttvpubsub_common::error::{Error, Result};
pub use ttvpubsub_common::models;
pub use messages::{parse_pubsub_message, route_frame, PubSubMessageData};
