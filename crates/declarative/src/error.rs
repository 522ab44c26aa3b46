//! Errors raised while applying an action

use crate::types::CommandStatus;
use std::io;
use thiserror::Error;

/// Why an action could not bring the host into its desired state
#[derive(Debug, Error)]
pub enum ApplyError {
    /// The declared state is not one the action understands
    #[error("Unknown state {state} (must be {expected})")]
    UnsupportedState {
        state: String,
        expected: &'static str,
    },

    /// The account database could not answer, for a reason other than "no such user"
    #[error("failed to look up user {user}: {source}")]
    AccountLookupFailed {
        user: String,
        #[source]
        source: io::Error,
    },

    /// A child process ran and exited unsuccessfully
    #[error("{command} failed with {status}")]
    ExternalCommandFailed {
        command: String,
        status: CommandStatus,
    },

    /// A child process could not be started at all
    #[error("failed to execute {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl ApplyError {
    /// Whether the failure came from an external command (spawned or not)
    pub fn is_external(&self) -> bool {
        matches!(
            self,
            Self::ExternalCommandFailed { .. } | Self::Spawn { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_state_message() {
        let err = ApplyError::UnsupportedState {
            state: "enabled".to_string(),
            expected: "present or absent",
        };
        assert_eq!(
            err.to_string(),
            "Unknown state enabled (must be present or absent)"
        );
        assert!(!err.is_external());
    }

    #[test]
    fn test_external_failure_message() {
        let err = ApplyError::ExternalCommandFailed {
            command: "/usr/bin/apt-get -y install vim".to_string(),
            status: CommandStatus::exited(100),
        };
        assert_eq!(
            err.to_string(),
            "/usr/bin/apt-get -y install vim failed with exit status 100"
        );
        assert!(err.is_external());
    }
}
