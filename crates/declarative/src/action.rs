//! Action trait for declarative host changes
//!
//! An Action is one desired-state assertion taken from configuration
//! (packages present, an account with a given shell) together with the
//! single operation that pushes the host toward it.

use crate::context::ApplyContext;
use crate::error::ApplyError;
use crate::types::ApplyResult;
use std::fmt;

/// Core trait for declarative actions
///
/// # Example
///
/// ```ignore
/// use declarative::{Action, ApplyContext, ApplyError, ApplyResult};
///
/// #[derive(Debug)]
/// struct Touch { path: String }
///
/// impl Action for Touch {
///     fn kind(&self) -> &'static str { "touch" }
///
///     fn apply(&self, ctx: &mut ApplyContext) -> Result<ApplyResult, ApplyError> {
///         ctx.run("/usr/bin/touch", &[&self.path])?;
///         Ok(ApplyResult::Created)
///     }
/// }
/// ```
pub trait Action: Send + Sync + fmt::Debug {
    /// Command-type name this action was decoded from (e.g. "apt", "user")
    fn kind(&self) -> &'static str;

    /// Apply changes to reach the desired state
    ///
    /// Implementations should spawn processes only through `ctx`, and
    /// return on the first failing one.
    fn apply(&self, ctx: &mut ApplyContext) -> Result<ApplyResult, ApplyError>;
}

/// A boxed action for type-erased storage
pub type BoxedAction = Box<dyn Action>;

/// A decoded configuration entry, ready to apply
#[derive(Debug)]
pub struct Step {
    /// Command-type name as written in the configuration
    pub command: String,
    /// Human-readable description from the configuration
    pub description: String,
    pub action: BoxedAction,
}

impl Step {
    pub fn new(
        command: impl Into<String>,
        description: impl Into<String>,
        action: BoxedAction,
    ) -> Self {
        Self {
            command: command.into(),
            description: description.into(),
            action,
        }
    }
}
