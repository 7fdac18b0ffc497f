//! Request and response bodies exchanged with the mobile client.

pub mod api;
pub mod notification;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default so it reaches validation like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
