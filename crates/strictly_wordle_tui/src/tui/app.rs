//! Application state: the adapter between key commands and the session.

use super::input::Command;
use strictly_wordle::{
    Dictionary, GAME_WORD_LENGTH, GameSession, Outcome, Phase, Submission, SubmitError,
};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep reading input.
    Continue,
    /// Leave the game.
    Quit,
}

/// A blocking dialog; input goes to the dialog until it is answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Dismissed with Enter or Esc.
    Notice {
        /// Dialog title.
        title: String,
        /// Dialog body.
        message: String,
    },
    /// Yes starts a new round; no quits.
    Replay {
        /// Dialog title.
        title: String,
        /// Dialog body.
        message: String,
    },
}

impl Modal {
    fn notice(title: &str, message: impl Into<String>) -> Self {
        Modal::Notice {
            title: title.to_string(),
            message: message.into(),
        }
    }

    fn replay(outcome: Outcome) -> Self {
        let (title, message) = match outcome {
            Outcome::Win => ("Winner!", "You win! Would you like to play again?"),
            Outcome::Loss => ("Game over", "Game over man! Would you like to play again?"),
        };
        Modal::Replay {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Returns the dialog title.
    pub fn title(&self) -> &str {
        match self {
            Modal::Notice { title, .. } | Modal::Replay { title, .. } => title,
        }
    }

    /// Returns the dialog body.
    pub fn message(&self) -> &str {
        match self {
            Modal::Notice { message, .. } | Modal::Replay { message, .. } => message,
        }
    }

    /// Returns the key hint shown under the body.
    pub fn hint(&self) -> &'static str {
        match self {
            Modal::Notice { .. } => "[Enter] OK",
            Modal::Replay { .. } => "[Y]es / [N]o",
        }
    }
}

/// Main application state.
pub struct App<D> {
    session: GameSession<D>,
    input: String,
    modal: Option<Modal>,
    mask_secret: bool,
}

impl<D: Dictionary> App<D> {
    /// Creates the application around a fresh session.
    pub fn new(session: GameSession<D>, mask_secret: bool) -> Self {
        Self {
            session,
            input: String::new(),
            modal: None,
            mask_secret,
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession<D> {
        &self.session
    }

    /// Returns the open dialog, if any.
    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    /// Returns the entry line as it should be shown.
    pub fn input_display(&self) -> String {
        let masked = self.mask_secret && self.session.phase() == Phase::AwaitingSecret;
        if masked {
            "*".repeat(self.input.chars().count())
        } else {
            self.input.to_uppercase()
        }
    }

    /// Returns the prompt above the board.
    pub fn status_line(&self) -> String {
        match self.session.phase() {
            Phase::AwaitingSecret => {
                format!("Player 1, enter a {}-character word:", GAME_WORD_LENGTH)
            }
            _ => format!("Guesses remaining: {}", self.session.guesses_remaining()),
        }
    }

    /// Handles one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Control {
        if command == Command::Interrupt {
            info!("Interrupted");
            return Control::Quit;
        }

        match self.modal.take() {
            Some(modal @ Modal::Notice { .. }) => {
                if !matches!(command, Command::Confirm | Command::Cancel) {
                    self.modal = Some(modal);
                }
                Control::Continue
            }
            Some(modal @ Modal::Replay { .. }) => match command {
                Command::Confirm | Command::Letter('y' | 'Y') => {
                    self.new_round();
                    Control::Continue
                }
                Command::Cancel | Command::Letter('n' | 'N') => {
                    info!("Player declined another round");
                    Control::Quit
                }
                _ => {
                    self.modal = Some(modal);
                    Control::Continue
                }
            },
            None => {
                match command {
                    Command::Letter(c) => {
                        if self.input.chars().count() < GAME_WORD_LENGTH {
                            self.input.push(c);
                        }
                    }
                    Command::Erase => {
                        self.input.pop();
                    }
                    Command::Confirm => self.submit(),
                    Command::Cancel => self.input.clear(),
                    Command::Interrupt => {}
                }
                Control::Continue
            }
        }
    }

    /// Sends the entry line to the session and opens the matching dialog.
    fn submit(&mut self) {
        let entered = std::mem::take(&mut self.input);

        match self.session.submit_word(&entered) {
            Ok(Submission::SecretSet) => {
                self.modal = Some(Modal::notice(
                    "Game start!",
                    "Player 2, it's your turn to guess!",
                ));
            }
            Ok(Submission::Guessed(report)) => {
                debug!(evaluation = %report.evaluation(), "Guess rendered");
                if let Some(outcome) = report.outcome() {
                    self.modal = Some(Modal::replay(outcome));
                }
            }
            Err(e) => {
                debug!(error = %e, "Submission rejected");
                // The entry keeps its text so the player can correct it.
                self.input = entered;
                self.modal = Some(match e {
                    SubmitError::InvalidWord(_) => Modal::notice(
                        "Invalid word",
                        format!(
                            "You did not enter a valid {}-character word. Try again.",
                            GAME_WORD_LENGTH
                        ),
                    ),
                    SubmitError::InvalidGuess(_) => Modal::notice(
                        "Invalid word",
                        "Your guess was not a valid word! Try again.",
                    ),
                    other => Modal::notice("Error", other.to_string()),
                });
            }
        }
    }

    fn new_round(&mut self) {
        self.session.start_new_round();
        self.input.clear();
        self.modal = None;
    }
}
