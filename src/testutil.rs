//! Test fakes for the host providers

use declarative::{Account, AccountLookup, CommandRunner, CommandStatus, command_line};
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// One recorded process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
}

/// Runner that records every invocation instead of spawning anything
///
/// Every program exits 0 unless given another code with [`Self::with_exit`].
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<Call>>,
    exits: HashMap<String, i32>,
}

impl RecordingRunner {
    pub fn with_exit(mut self, program: &str, code: i32) -> Self {
        self.exits.insert(program.to_string(), code);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded invocations rendered as command lines
    pub fn commands(&self) -> Vec<String> {
        self.calls()
            .iter()
            .map(|call| {
                let args: Vec<&str> = call.args.iter().map(String::as_str).collect();
                command_line(&call.program, &args)
            })
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<CommandStatus> {
        self.calls.lock().unwrap().push(Call {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        });
        let code = self.exits.get(program).copied().unwrap_or(0);
        Ok(CommandStatus::exited(code))
    }
}

/// In-memory account database
#[derive(Default)]
pub struct FakeAccounts {
    accounts: HashMap<String, Account>,
    broken: bool,
}

impl FakeAccounts {
    pub fn with_account(mut self, name: &str, home: &str) -> Self {
        let uid = 1000 + self.accounts.len() as u32;
        self.accounts.insert(
            name.to_string(),
            Account {
                name: name.to_string(),
                uid,
                home: home.to_string(),
            },
        );
        self
    }

    /// Make every lookup fail as if the user database were unreadable
    pub fn failing(mut self) -> Self {
        self.broken = true;
        self
    }
}

impl AccountLookup for FakeAccounts {
    fn lookup(&self, name: &str) -> io::Result<Option<Account>> {
        if self.broken {
            return Err(io::Error::other("user database unavailable"));
        }
        Ok(self.accounts.get(name).cloned())
    }
}
