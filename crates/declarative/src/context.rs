//! Apply context and provider traits
//!
//! These traits keep the host out of the actions: process spawning and
//! account lookups are injected, so the same action code runs against the
//! real system or against recording fakes.

use crate::error::ApplyError;
use crate::types::{Account, ApplyResult, CommandStatus};
use std::io;

/// Provider for running external commands
///
/// Implementations block until the child exits.
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and report how it exited
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandStatus>;
}

/// Provider for reading the host's account database
pub trait AccountLookup: Send + Sync {
    /// Look up an account by name
    ///
    /// Returns `Ok(None)` when no such account exists. Any other failure is
    /// reported as an error.
    fn lookup(&self, name: &str) -> io::Result<Option<Account>>;
}

/// Progress callback for execution operations
///
/// Implement this trait to receive progress updates during a run.
pub trait ProgressCallback {
    /// Called after a step is decoded and before it is applied
    fn on_step_start(&mut self, command: &str, description: &str);

    /// Called when a step applied successfully
    fn on_step_complete(&mut self, command: &str, result: &ApplyResult);

    /// Called when a step failed to apply
    fn on_step_failed(&mut self, command: &str, error: &ApplyError);
}

/// Context passed to action apply operations
pub struct ApplyContext<'a> {
    runner: &'a dyn CommandRunner,
    accounts: &'a dyn AccountLookup,
}

impl<'a> ApplyContext<'a> {
    /// Create a new apply context
    pub fn new(runner: &'a dyn CommandRunner, accounts: &'a dyn AccountLookup) -> Self {
        Self { runner, accounts }
    }

    /// Run a command and require a zero exit status
    pub fn run(&mut self, program: &str, args: &[&str]) -> Result<(), ApplyError> {
        let command = command_line(program, args);
        log::debug!("Running: {}", command);

        let status = self
            .runner
            .run(program, args)
            .map_err(|source| ApplyError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ApplyError::ExternalCommandFailed { command, status });
        }

        log::trace!("{} exited cleanly", program);
        Ok(())
    }

    /// Look up an account, folding "not found" into `None`
    pub fn lookup_account(&self, name: &str) -> Result<Option<Account>, ApplyError> {
        let account = self
            .accounts
            .lookup(name)
            .map_err(|source| ApplyError::AccountLookupFailed {
                user: name.to_string(),
                source,
            })?;

        match &account {
            Some(found) => log::debug!(
                "User {} exists (uid {}, home {})",
                found.name,
                found.uid,
                found.home
            ),
            None => log::debug!("User {} does not exist", name),
        }

        Ok(account)
    }
}

/// Render a program and its arguments as a single display string
pub fn command_line(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}
