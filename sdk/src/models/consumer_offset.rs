use serde::{Deserialize, Serialize};

/// `ConsumerOffset` is the committed position of a consumer group on a single partition,
/// together with the instance owning it and the partition offset window.
///
/// A committed offset outside `[min_offset, max_offset]` is kept as reported:
/// an offset behind `min_offset` means retention removed messages before they were consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsumerOffset {
    pub partition: u32,
    pub offset: i64,
    #[serde(default)]
    pub instance_id: String,
    #[serde(default)]
    pub hostname: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub max_offset: i64,
    #[serde(default)]
    pub min_offset: i64,
}

impl ConsumerOffset {
    /// Messages between the committed offset and the partition head.
    pub fn lag(&self) -> u64 {
        self.max_offset.saturating_sub(self.offset).max(0) as u64
    }

    pub fn is_behind_retention(&self) -> bool {
        self.offset < self.min_offset
    }

    pub fn is_within_range(&self) -> bool {
        (self.min_offset..=self.max_offset).contains(&self.offset)
    }
}
