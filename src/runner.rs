use declarative::{CommandRunner, CommandStatus};
use std::io;
use std::process::{Command, Stdio};

/// Runs commands on the local host
///
/// Children inherit stdio, so package manager output shows in real-time.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, cmd: &str, args: &[&str]) -> io::Result<CommandStatus> {
        let status = Command::new(cmd)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        Ok(status.into())
    }
}
