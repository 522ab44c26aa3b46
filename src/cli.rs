use clap::Parser;
use std::path::PathBuf;

/// Configuration file used when no path is given
pub const DEFAULT_CONFIG: &str = "desktop.json";

#[derive(Parser)]
#[command(name = "dotconf")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(about = "Apply a declarative JSON host configuration", long_about = None)]
pub struct Cli {
    /// Configuration file to apply
    #[arg(short, long, env = "DOTCONF_CONFIG", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
