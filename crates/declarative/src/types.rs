//! Core types for declarative host actions

use std::fmt;
use std::process::ExitStatus;

/// Result of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyResult {
    /// Something was brought into existence (packages installed, account created)
    Created,
    /// An existing thing was reconciled in place
    Modified,
    /// Something was taken away (packages removed or purged)
    Removed,
}

impl ApplyResult {
    /// Short lowercase label, used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteSummary {
    pub created: usize,
    pub modified: usize,
    pub removed: usize,
}

impl ExecuteSummary {
    /// Total number of steps applied
    pub fn total(&self) -> usize {
        self.created + self.modified + self.removed
    }

    /// Add a result to the summary
    pub fn add_result(&mut self, result: &ApplyResult) {
        match result {
            ApplyResult::Created => self.created += 1,
            ApplyResult::Modified => self.modified += 1,
            ApplyResult::Removed => self.removed += 1,
        }
    }
}

impl fmt::Display for ExecuteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} applied ({} created, {} modified, {} removed)",
            self.total(),
            self.created,
            self.modified,
            self.removed
        )
    }
}

/// Exit information of a finished child process
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    /// A zero exit status
    pub const SUCCESS: Self = Self { code: Some(0) };

    /// Status with the given exit code
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Whether the process exited with status zero
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit status {}", code),
            None => f.write_str("termination by signal"),
        }
    }
}

/// A host account as recorded in the user database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    pub uid: u32,
    pub home: String,
}
