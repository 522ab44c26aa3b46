//! Concrete actions
//!
//! Each action is a typed view of one entry's `args`, registered under its
//! command-type name in [`crate::registry::ActionRegistry::builtin`].

use serde::{Deserialize, Deserializer};

pub mod apt;
pub mod user;

pub use apt::PackageAction;
pub use user::UserAction;

/// Decode a field, reading JSON `null` as the type's default
///
/// Pair with `#[serde(default)]` so a missing field and a `null` one end up
/// the same.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
