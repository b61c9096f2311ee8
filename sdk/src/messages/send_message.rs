use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// `SendMessage` command publishes a single message to a topic.
/// It has additional payload:
/// - `topic` - target topic, sent in the request path.
/// - `tag` - free-form classification string.
/// - `key` - application-defined routing or deduplication key.
/// - `body` - message payload as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessage {
    #[serde(skip)]
    pub topic: String,
    pub tag: String,
    pub key: String,
    pub body: String,
}

impl Display for SendMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}|{}|{}|{}", self.topic, self.tag, self.key, self.body)
    }
}
