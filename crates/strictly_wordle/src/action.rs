//! First-class guess actions and submission errors.
//!
//! A guess is a domain event, not a side effect. It can be validated
//! against a round before it is applied.

use super::phases::Outcome;
use super::word::{GAME_WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A guess in the round: Player 2 proposing a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Guess {
    /// The proposed word.
    pub word: Word,
}

impl Guess {
    /// Creates a new guess.
    #[instrument]
    pub fn new(word: Word) -> Self {
        Self { word }
    }

    /// Returns the guessed word.
    pub fn word(&self) -> &Word {
        &self.word
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "guess {}", self.word)
    }
}

/// Why a submission failed the generic word check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum WordRejection {
    /// Not exactly five characters.
    #[display("expected {} characters, got {}", GAME_WORD_LENGTH, _0)]
    WrongLength(usize),

    /// Five characters, but not a dictionary word.
    #[display("not a dictionary word")]
    NotInDictionary,
}

/// A rejected submission.
///
/// Every variant is recoverable: the session is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SubmitError {
    /// Input failed the length or dictionary check.
    #[display("Invalid word: {}", _0)]
    InvalidWord(WordRejection),

    /// The guessing-phase dictionary re-check rejected the word.
    #[display("Invalid guess: {}", _0)]
    InvalidGuess(Word),

    /// The round is over; start a new one before submitting.
    #[display("Round is already over: {}", _0)]
    RoundOver(Outcome),

    /// The round has no guesses left.
    #[display("No guesses remaining")]
    OutOfGuesses,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SubmitError {}

impl SubmitError {
    /// Returns true for failures of the generic word check.
    pub fn is_invalid_word(&self) -> bool {
        matches!(self, SubmitError::InvalidWord(_))
    }

    /// Returns true for failures of the guessing-phase re-check.
    pub fn is_invalid_guess(&self) -> bool {
        matches!(self, SubmitError::InvalidGuess(_))
    }
}
