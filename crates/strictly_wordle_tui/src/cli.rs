//! Command-line interface for strictly_wordle.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Wordle - two players, one keyboard, six guesses
#[derive(Parser, Debug)]
#[command(name = "strictly_wordle")]
#[command(about = "Two-player word guessing in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "strictly_wordle.toml")]
    pub config: PathBuf,

    /// Word file to validate against, one word per line (overrides the config file)
    #[arg(short, long)]
    pub dictionary: Option<PathBuf>,
}
