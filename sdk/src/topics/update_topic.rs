use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `UpdateTopic` command replaces the mutable settings of an existing topic.
/// It has additional payload:
/// - `topic` - name of the topic, sent in the request path and never in the body.
/// - `partition_num` - number of partitions in the topic.
/// - `retention_days` - how long messages are retained, in days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTopic {
    #[serde(skip)]
    pub topic: String,
    pub partition_num: u32,
    pub retention_days: u32,
}

impl Display for UpdateTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}",
            self.topic, self.partition_num, self.retention_days
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_name_should_not_be_serialized() {
        let command = UpdateTopic {
            topic: "orders".to_string(),
            partition_num: 4,
            retention_days: 14,
        };

        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value, json!({"partitionNum": 4, "retentionDays": 14}));
    }
}
