mod activity;
mod catalog;
mod event;
mod invitation;
mod moderation;
mod notification;
mod participant;
mod social;
mod team;

pub use activity::*;
pub use catalog::*;
pub use event::*;
pub use invitation::*;
pub use moderation::*;
pub use notification::*;
pub use participant::*;
pub use social::*;
pub use team::*;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
