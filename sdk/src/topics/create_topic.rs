use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `CreateTopic` command is used to create a new topic.
/// It has additional payload:
/// - `topic` - unique name of the topic.
/// - `partition_num` - number of partitions in the topic.
/// - `retention_days` - how long messages are retained, in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopic {
    pub topic: String,
    pub partition_num: u32,
    pub retention_days: u32,
}

impl Default for CreateTopic {
    fn default() -> Self {
        CreateTopic {
            topic: "topic".to_string(),
            partition_num: 1,
            retention_days: 7,
        }
    }
}

impl Display for CreateTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.topic, self.partition_num, self.retention_days
        )
    }
}
