use crate::models::null_as_default;
use serde::{Deserialize, Serialize};

/// `Partition` is the read-only projection of a single partition of a topic.
/// - `partition`: the 0-based ordinal of the partition within the topic.
/// - `stat`: the offset window and message count currently retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    pub partition: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stat: PartitionStat,
}

/// Offsets are signed to mirror the broker, which reports them as 64-bit integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionStat {
    pub max_offset: i64,
    pub min_offset: i64,
    pub total: u64,
}

impl Partition {
    pub fn min_offset(&self) -> i64 {
        self.stat.min_offset
    }

    pub fn max_offset(&self) -> i64 {
        self.stat.max_offset
    }

    /// Size of the offset window `[min, max]`, zero when the window is inverted.
    pub fn retained(&self) -> u64 {
        if self.stat.max_offset < self.stat.min_offset {
            return 0;
        }
        (self.stat.max_offset - self.stat.min_offset) as u64 + 1
    }

    /// Number of offsets inside the window that no longer hold a message.
    pub fn trimmed(&self) -> u64 {
        self.retained().saturating_sub(self.stat.total)
    }
}
