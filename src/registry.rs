//! Action registry and command decoder
//!
//! Maps a command-type name (`apt`, `user`) to the function that turns an
//! entry's raw `args` into a typed [`Action`]. Entries are decoded in two
//! phases: the envelope is parsed by the config loader with `args` kept as
//! raw JSON, and only here, once the command type is known, is `args`
//! parsed into the concrete action.

use declarative::{Action, BoxedAction, Step};
use serde::de::{DeserializeOwned, Error as _};
use serde_json::value::RawValue;
use std::collections::HashMap;

use crate::actions::{PackageAction, UserAction};
use crate::config::RawCommandEntry;
use crate::error::{Error, Result};

/// Builds an action from an entry's raw `args`
pub type ActionFactory = fn(&RawValue) -> serde_json::Result<BoxedAction>;

/// Read-only table of known command types
///
/// Filled during construction; lookups only need `&self`, so a registry
/// can be shared freely once built.
#[derive(Default)]
pub struct ActionRegistry {
    factories: HashMap<&'static str, ActionFactory>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in action
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("apt", decode_as::<PackageAction>);
        registry.register("user", decode_as::<UserAction>);
        registry
    }

    /// Add a command type, replacing any earlier factory with the same name
    pub fn register(&mut self, name: &'static str, factory: ActionFactory) {
        if self.factories.insert(name, factory).is_some() {
            log::warn!("Command type {} registered twice", name);
        }
    }

    pub fn lookup(&self, name: &str) -> Option<ActionFactory> {
        self.factories.get(name).copied()
    }

    /// Registered command-type names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Decode one configuration entry into a ready-to-apply step
    pub fn decode(&self, entry: RawCommandEntry) -> Result<Step> {
        let Some(factory) = self.lookup(&entry.command) else {
            log::debug!(
                "No action for {:?}; known: {}",
                entry.command,
                self.names().join(", ")
            );
            return Err(Error::UnknownCommand(entry.command));
        };

        let action = match entry.args.as_deref() {
            Some(raw) => factory(raw),
            None => Err(serde_json::Error::custom("missing field `args`")),
        }
        .map_err(|source| Error::MalformedArgs {
            command: entry.command.clone(),
            source,
        })?;

        Ok(Step::new(entry.command, entry.description, action))
    }
}

/// Factory for any action that deserializes straight from `args`
fn decode_as<A>(raw: &RawValue) -> serde_json::Result<BoxedAction>
where
    A: Action + DeserializeOwned + 'static,
{
    let action: A = serde_json::from_str(raw.get())?;
    Ok(Box::new(action))
}
