// File: ttvpubsub-core/src/messages/request.rs

use serde::Serialize;
use uuid::Uuid;

use crate::models::Topic;
use crate::{Error, Result};

/// Client -> server frames. Serializes to the wire shape, e.g.
/// `{"type":"LISTEN","nonce":"…","data":{"topics":["…"],"auth_token":"…"}}` or `{"type":"PING"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum ClientFrame {
    Listen { nonce: String, data: ListenData },
    Unlisten { nonce: String, data: ListenData },
    Ping,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListenData {
    pub topics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

impl ClientFrame {
    pub fn listen(topics: &[Topic], auth_token: Option<&str>) -> Result<Self> {
        Ok(ClientFrame::Listen {
            nonce: new_nonce(),
            data: ListenData::new(topics, auth_token)?,
        })
    }

    pub fn unlisten(topics: &[Topic], auth_token: Option<&str>) -> Result<Self> {
        Ok(ClientFrame::Unlisten {
            nonce: new_nonce(),
            data: ListenData::new(topics, auth_token)?,
        })
    }

    pub fn ping() -> Self {
        ClientFrame::Ping
    }

    /// Echoed back by the server in the matching RESPONSE frame.
    pub fn nonce(&self) -> Option<&str> {
        match self {
            ClientFrame::Listen { nonce, .. } | ClientFrame::Unlisten { nonce, .. } => Some(nonce.as_str()),
            ClientFrame::Ping => None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl ListenData {
    fn new(topics: &[Topic], auth_token: Option<&str>) -> Result<Self> {
        if topics.is_empty() {
            return Err(Error::InvalidRequest("at least one topic is required".into()));
        }
        Ok(Self {
            topics: topics.iter().map(Topic::to_string).collect(),
            auth_token: auth_token.map(String::from),
        })
    }
}

fn new_nonce() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_listen_shape() {
        let frame = ClientFrame::listen(&[Topic::hype_train("123")], Some("tok")).unwrap();
        let nonce = frame.nonce().unwrap().to_string();
        let v: Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(
            v,
            json!({
                "type": "LISTEN",
                "nonce": nonce,
                "data": { "topics": ["hype-train-events-v1.123"], "auth_token": "tok" }
            })
        );
    }

    #[test]
    fn test_unlisten_without_token() {
        let frame = ClientFrame::unlisten(&[Topic::Other("foo.1".into())], None).unwrap();
        let v: Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(v["type"], "UNLISTEN");
        assert_eq!(v["data"], json!({ "topics": ["foo.1"] }));
    }

    #[test]
    fn test_nonces_are_fresh() {
        let topics = [Topic::hype_train("1")];
        let a = ClientFrame::listen(&topics, None).unwrap();
        let b = ClientFrame::listen(&topics, None).unwrap();
        assert_ne!(a.nonce(), b.nonce());
    }

    #[test]
    fn test_empty_topics_rejected() {
        assert!(matches!(ClientFrame::listen(&[], None), Err(Error::InvalidRequest(_))));
        assert!(matches!(ClientFrame::unlisten(&[], Some("t")), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_ping() {
        let ping = ClientFrame::ping();
        assert_eq!(ping.nonce(), None);
        assert_eq!(ping.to_json().unwrap(), r#"{"type":"PING"}"#);
    }
}
