use serde::{Deserialize, Serialize};

/// `Topic` represents a named, partitioned message stream as reported by the broker.
/// It consists of the following fields:
/// - `topic`: the unique name of the topic.
/// - `partition_num`: the number of partitions in the topic.
/// - `retention_days`: how long messages are retained, in days.
/// - `message_total`: the total number of messages across all the partitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub topic: String,
    pub partition_num: u32,
    pub retention_days: u32,
    #[serde(default)]
    pub message_total: u64,
}
