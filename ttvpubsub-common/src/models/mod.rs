// File: ttvpubsub-common/src/models/mod.rs
pub mod hype_train;
pub mod topic;

pub use hype_train::{
    HypeTrainAction, HypeTrainEvent, HypeTrainLevel, HypeTrainProgress, HypeTrainReward,
    HypeTrainSource, HypeTrainType,
};
pub use topic::Topic;
