use serde::{Deserialize, Serialize};

/// `ConsumerGroup` is a named set of consumer instances tracking progress over a topic.
/// - `group`: the group name, unique within the topic.
/// - `client_count`: the number of live clients in the group.
/// - `delay`: the backlog computed by the broker from committed and max offsets.
///   It is an opaque value and is never re-derived on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerGroup {
    pub group: String,
    #[serde(default)]
    pub client_count: u32,
    #[serde(default)]
    pub delay: i64,
}
