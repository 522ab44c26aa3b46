//! # Declarative
//!
//! A small framework for applying declared host state in order.
//!
//! Configuration entries are decoded into [`Action`]s, wrapped in [`Step`]s
//! and handed to [`execute`], which applies them one by one and stops at the
//! first failure.
//!
//! ## Core Concepts
//!
//! - **Action**: one desired-state assertion with a single `apply` operation
//! - **Step**: a decoded entry (command name, description, action)
//! - **ApplyContext**: the host as seen by an action (process runner, account database)
//! - **Executor**: sequential, fail-fast application of steps
//!
//! ## Provider Traits
//!
//! The crate uses traits for dependency injection:
//!
//! - [`CommandRunner`]: Spawns external commands and reports their exit status
//! - [`AccountLookup`]: Reads the host's account database
//! - [`ProgressCallback`]: Receives progress updates
//!
//! This allows actions to be tested against recording fakes instead of
//! touching the real system.

pub mod action;
pub mod context;
pub mod error;
pub mod executor;
pub mod types;

// Re-export main types at crate root
pub use action::{Action, BoxedAction, Step};
pub use context::{AccountLookup, ApplyContext, CommandRunner, ProgressCallback, command_line};
pub use error::ApplyError;
pub use executor::execute;
pub use types::{Account, ApplyResult, CommandStatus, ExecuteSummary};
