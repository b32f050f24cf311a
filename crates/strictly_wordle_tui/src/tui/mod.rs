//! Terminal UI for Strictly Wordle.

mod app;
mod input;
mod ui;

pub use app::App;

use anyhow::Result;
use app::Control;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use strictly_wordle::Dictionary;
use tracing::{debug, error, info, instrument};

/// Runs the game until the players quit.
///
/// The terminal is restored on every exit path. A failed loop's error is
/// returned after the restore.
pub fn run<D: Dictionary>(mut app: App<D>) -> Result<()> {
    info!("Starting Strictly Wordle TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);
    let restored = restore_terminal(&mut terminal);

    info!("Strictly Wordle TUI exited");
    finish(res, restored)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Combines the loop result with the terminal restore; a loop error wins.
fn finish(res: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    res.and(restored)
}

#[instrument(skip_all)]
fn run_loop<D: Dictionary>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };

        let Some(command) = input::translate(key) else {
            debug!(?key, "Ignoring key");
            continue;
        };

        if app.handle(command) == Control::Quit {
            return Ok(());
        }
    }
}
