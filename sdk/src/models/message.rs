use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `Message` is an immutable record stored by the broker, read back through a query.
/// - `message_id`: the broker-assigned identifier, unique within the topic.
/// - `tag`: free-form classification string.
/// - `key`: application-defined routing or deduplication key.
/// - `body`: the payload, transported as text.
/// - `born_time`: the creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub message_id: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub body: String,
    pub born_time: DateTime<Utc>,
}

/// A single page of messages together with the number of messages matching the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessagesPage {
    pub total: u64,
    pub messages: Vec<Message>,
}
