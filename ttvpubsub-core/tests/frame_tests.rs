// tests/frame_tests.rs

use serde_json::json;
use ttvpubsub_core::messages::{ClientFrame, PubSubFrame};
use ttvpubsub_core::models::{HypeTrainAction, HypeTrainType, Topic};
use ttvpubsub_core::{route_frame, Error, PubSubMessageData};

fn message_frame(topic: &str, message: &serde_json::Value) -> String {
    json!({
        "type": "MESSAGE",
        "data": { "topic": topic, "message": message.to_string() }
    })
    .to_string()
}

#[test]
fn test_full_frame_to_hype_train_event() -> Result<(), Error> {
    let inner = json!({
        "type": "hype-train-level-up",
        "data": {
            "sequence_id": "17",
            "action": "CHEER",
            "source": "BITS",
            "quantity": "100",
            "user_id": "777",
            "progress": {
                "value": 50, "goal": 1600, "total": 3050, "remaining_seconds": 290,
                "level": {
                    "value": 2, "goal": 1600,
                    "rewards": [{ "id": "301739462", "group_id": "", "type": "EMOTE", "reward_level": 0 }]
                }
            }
        }
    });
    let frame = PubSubFrame::parse(&message_frame("hype-train-events-v1.44322889", &inner))?;

    match &frame {
        PubSubFrame::Message { topic, .. } => assert_eq!(topic.channel_id(), Some("44322889")),
        other => panic!("expected MESSAGE, got {:?}", other),
    }

    let Some(PubSubMessageData::HypeTrain(evt)) = route_frame(&frame)? else {
        panic!("hype-train frame was not decoded");
    };
    assert_eq!(evt.event_type, HypeTrainType::LevelUp);
    assert_eq!(evt.action, HypeTrainAction::Cheer);
    assert_eq!(evt.sequence_id, 17);
    assert_eq!(evt.user_id, "777");
    assert_eq!(evt.progress.total, 3050);
    assert_eq!(evt.progress.level.rewards[0].reward_type, "EMOTE");
    Ok(())
}

#[test]
fn test_other_topic_frames_are_not_decoded() -> Result<(), Error> {
    let frame = PubSubFrame::parse(&message_frame("video-playback-by-id.1", &json!({ "type": "viewcount" })))?;
    assert_eq!(route_frame(&frame)?, None);
    Ok(())
}

#[test]
fn test_bad_inner_payload_surfaces_error() -> Result<(), Error> {
    let frame = PubSubFrame::parse(
        &json!({
            "type": "MESSAGE",
            "data": { "topic": "hype-train-events-v1.5", "message": "{oops" }
        })
        .to_string(),
    )?;
    assert!(matches!(route_frame(&frame), Err(Error::MalformedPayload(_))));
    Ok(())
}

#[test]
fn test_listen_then_response_nonce_matches() -> Result<(), Error> {
    let listen = ClientFrame::listen(&[Topic::hype_train("44322889")], Some("oauth-token"))?;
    let nonce = listen.nonce().map(String::from);

    let reply = json!({ "type": "RESPONSE", "nonce": nonce, "error": "" }).to_string();
    assert_eq!(PubSubFrame::parse(&reply)?, PubSubFrame::Response { nonce, error: None });
    Ok(())
}
