pub mod consumer_group;
pub mod consumer_offset;
pub mod message;
pub mod partition;
pub mod topic;

use serde::{Deserialize, Deserializer};

/// Treats an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
