//! src/output.rs

use ttvpubsub_core::models::HypeTrainEvent;

use crate::config::OutputFormat;

pub fn render(evt: &HypeTrainEvent, format: OutputFormat) -> ttvpubsub_core::Result<String> {
    match format {
        OutputFormat::Debug => Ok(format!("{:#?}", evt)),
        OutputFormat::Json => Ok(serde_json::to_string(evt)?),
        OutputFormat::Pretty => Ok(pretty(evt)),
    }
}

fn pretty(evt: &HypeTrainEvent) -> String {
    let progress = &evt.progress;
    let level = &progress.level;
    let user = if evt.user_id.is_empty() { "-" } else { evt.user_id.as_str() };

    let mut lines = vec![
        format!(
            "{} #{}: {} via {} x{} (user {})",
            evt.event_type, evt.sequence_id, evt.action, evt.source, evt.quantity, user
        ),
        format!(
            "progress {}/{} total {} ({}s left)",
            progress.value, progress.goal, progress.total, progress.remaining_seconds
        ),
        format!("level {} goal {}, {} reward(s)", level.value, level.goal, level.rewards.len()),
    ];
    lines.extend(level.rewards.iter().map(|reward| {
        format!(
            "  - {} {} (group {:?}, level {})",
            reward.reward_type, reward.id, reward.group_id, reward.reward_level
        )
    }));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttvpubsub_core::models::{HypeTrainAction, HypeTrainReward, HypeTrainSource};

    fn sample() -> HypeTrainEvent {
        let mut evt = HypeTrainEvent {
            action: HypeTrainAction::Cheer,
            source: HypeTrainSource::Bits,
            quantity: 500,
            user_id: "u1".into(),
            sequence_id: 3,
            ..Default::default()
        };
        evt.progress.value = 500;
        evt.progress.goal = 1000;
        evt.progress.total = 500;
        evt.progress.remaining_seconds = 120;
        evt.progress.level.value = 2;
        evt.progress.level.goal = 3;
        evt.progress.level.rewards.push(HypeTrainReward {
            id: "r1".into(),
            group_id: "g1".into(),
            reward_type: "emote".into(),
            reward_level: 1,
        });
        evt
    }

    #[test]
    fn test_pretty() {
        let text = render(&sample(), OutputFormat::Pretty).unwrap();
        assert_eq!(
            text,
            "hype-train-progression #3: CHEER via BITS x500 (user u1)\n\
             progress 500/1000 total 500 (120s left)\n\
             level 2 goal 3, 1 reward(s)\n  - emote r1 (group \"g1\", level 1)"
        );
    }

    #[test]
    fn test_pretty_without_user() {
        let text = render(&HypeTrainEvent::default(), OutputFormat::Pretty).unwrap();
        assert!(text.starts_with("hype-train-progression #0: SUB via SUB x0 (user -)"));
        assert!(text.ends_with("0 reward(s)"));
    }

    #[test]
    fn test_pretty_lists_rewards_in_order() {
        let mut evt = sample();
        evt.progress.level.rewards.push(HypeTrainReward {
            id: "r2".into(),
            reward_type: "badge".into(),
            ..Default::default()
        });
        let text = render(&evt, OutputFormat::Pretty).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "level 2 goal 3, 2 reward(s)");
        assert_eq!(lines[3], "  - emote r1 (group \"g1\", level 1)");
        assert_eq!(lines[4], "  - badge r2 (group \"\", level 0)");
    }

    #[test]
    fn test_json_round_trips() {
        let evt = sample();
        let text = render(&evt, OutputFormat::Json).unwrap();
        let back: HypeTrainEvent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, evt);
    }
}
