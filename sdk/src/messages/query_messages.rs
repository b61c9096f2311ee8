use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::Range;

/// `QueryMessages` command reads one page of messages from a topic partition.
/// It has additional payload:
/// - `page_no` - 1-based page number.
/// - `page_size` - number of messages per page.
/// - `topic` - topic to read from.
/// - `partition` - partition ordinal within the topic.
/// - `message_id` - optional filter on the message identifier.
/// - `tag` - optional filter on the message tag.
///
/// Filters can be combined. A filter set to `None` is left out of the request entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryMessages {
    pub page_no: u32,
    pub page_size: u32,
    pub topic: String,
    pub partition: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl QueryMessages {
    pub fn new(topic: &str, partition: u32, page_no: u32, page_size: u32) -> Self {
        Self {
            page_no,
            page_size,
            topic: topic.to_string(),
            partition,
            message_id: None,
            tag: None,
        }
    }

    pub fn with_message_id(mut self, message_id: &str) -> Self {
        self.message_id = Some(message_id.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    /// Positions covered by the page: `[(page_no - 1) * page_size, page_no * page_size)`.
    pub fn window(&self) -> Range<u64> {
        let page_size = self.page_size as u64;
        let start = (self.page_no as u64).saturating_sub(1) * page_size;
        start..start + page_size
    }
}

impl Display for QueryMessages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}",
            self.topic,
            self.partition,
            self.page_no,
            self.page_size,
            self.message_id.as_deref().unwrap_or_default(),
            self.tag.as_deref().unwrap_or_default()
        )
    }
}
