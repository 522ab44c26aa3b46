//! Console status lines
//!
//! The per-entry lines are a stable contract:
//!
//! ```text
//! [ <command>: <description> ]
//!   OK
//!   Error: <message>
//! ```
//!
//! and a failed run ends with `Error: <message>`. Only the `OK` and `Error:`
//! markers are ever colorized.

use colored::Colorize;
use declarative::{ApplyError, ApplyResult, ProgressCallback};
use std::io::{self, Write};

/// Progress reporter that writes status lines to a stream
pub struct ConsoleReporter<W: Write> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter on stdout, colorized when `colored` allows it
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            color: true,
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reporter without any color codes
    pub fn plain(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ok_marker(&self) -> String {
        if self.color {
            "OK".green().to_string()
        } else {
            "OK".to_string()
        }
    }

    fn error_marker(&self) -> String {
        if self.color {
            "Error:".red().to_string()
        } else {
            "Error:".to_string()
        }
    }

    /// Write the top-level line that ends a failed run
    pub fn failure(&mut self, msg: &str) {
        let marker = if self.color {
            "Error:".red().bold().to_string()
        } else {
            "Error:".to_string()
        };
        self.line(&format!("{} {}", marker, msg));
    }

    fn line(&mut self, text: &str) {
        // A closed stdout must not abort a half-applied run
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|()| self.out.flush()) {
            log::warn!("Could not write status line: {}", e);
        }
    }
}

impl<W: Write> ProgressCallback for ConsoleReporter<W> {
    fn on_step_start(&mut self, command: &str, description: &str) {
        self.line(&format!("[ {}: {} ]", command, description));
    }

    fn on_step_complete(&mut self, _command: &str, _result: &ApplyResult) {
        let marker = self.ok_marker();
        self.line(&format!("  {}", marker));
    }

    fn on_step_failed(&mut self, _command: &str, error: &ApplyError) {
        let marker = self.error_marker();
        self.line(&format!("  {} {}", marker, error));
    }
}
