//! Configuration document and loader

use declarative::{ApplyContext, ExecuteSummary, ProgressCallback, execute};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::ActionRegistry;

/// One entry of the `configuration` list
///
/// `args` is kept as raw JSON until the command type picks a concrete action.
#[derive(Debug, Deserialize)]
pub struct RawCommandEntry {
    pub command: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub args: Option<Box<RawValue>>,
}

/// Top-level configuration document
#[derive(Debug, Default, Deserialize)]
pub struct Configuration {
    /// Entries in the order they are applied
    #[serde(default, rename = "configuration")]
    pub commands: Vec<RawCommandEntry>,
}

impl Configuration {
    /// Load a configuration file
    ///
    /// The file is read through a buffered stream and closed before this
    /// returns, whatever the outcome.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::JsonDecode {
                path: path.to_path_buf(),
                source,
            })?;

        log::info!(
            "Loaded {} command(s) from {}",
            config.commands.len(),
            path.display()
        );
        Ok(config)
    }

    /// Decode and apply every entry in order, stopping at the first failure
    ///
    /// Each entry is decoded only after the previous one has been applied.
    pub fn apply<P: ProgressCallback>(
        self,
        registry: &ActionRegistry,
        ctx: &mut ApplyContext<'_>,
        progress: &mut P,
    ) -> Result<ExecuteSummary> {
        let steps = self
            .commands
            .into_iter()
            .map(|entry| registry.decode(entry));

        execute(steps, ctx, progress)
    }
}

/// Load `path` and apply it
pub fn apply_file<P: ProgressCallback>(
    path: &Path,
    registry: &ActionRegistry,
    ctx: &mut ApplyContext<'_>,
    progress: &mut P,
) -> Result<ExecuteSummary> {
    Configuration::load(path)?.apply(registry, ctx, progress)
}
