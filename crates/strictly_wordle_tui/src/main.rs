//! Strictly Wordle - two-player word guessing in the terminal.

#![warn(missing_docs)]

mod cli;
mod config;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::WordleConfig;
use std::path::Path;
use std::sync::Arc;
use strictly_wordle::{GameSession, SYSTEM_WORD_FILE, WordList};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use tui::App;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = WordleConfig::load(&cli.config)?;
    let overridden = cli.dictionary.is_some();
    let config = config.with_dictionary(cli.dictionary);

    init_tracing(config.log_file())?;
    info!(
        path = %cli.config.display(),
        %source,
        dictionary_overridden = overridden,
        ?config,
        "Starting Strictly Wordle"
    );

    let dictionary = load_dictionary(config.dictionary().as_deref())?;
    let session = GameSession::new(dictionary);
    tui::run(App::new(session, *config.mask_secret()))
}

/// Sends tracing output to a file so it does not interfere with the TUI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_wordle=debug")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[instrument]
fn load_dictionary(path: Option<&Path>) -> Result<WordList> {
    let dictionary = match path {
        Some(path) => WordList::from_file(path)?,
        None => WordList::builtin_with(SYSTEM_WORD_FILE),
    };
    info!(words = dictionary.len(), "Dictionary loaded");
    Ok(dictionary)
}
