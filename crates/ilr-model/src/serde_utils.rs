//! Serde helpers shared by the record types.

use serde::{Deserialize, Deserializer};

/// Deserialize a collection that may be absent or explicitly `null` in the
/// source document. Both cases yield an empty `Vec`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
