//! Strictly Wordle - pure two-player word-guessing logic.
//!
//! Player 1 secretly sets a five-letter word; Player 2 has six guesses to
//! find it. Each guess is scored letter by letter.
//!
//! # Architecture
//!
//! - **Session**: [`GameSession`] owns one round and arbitrates secret-setting
//!   vs. guessing input
//! - **Typestate**: [`RoundSetup`] → [`RoundInProgress`] → [`RoundFinished`],
//!   wrapped by [`AnyRound`]
//! - **Contracts**: preconditions on every submission, postconditions and
//!   [`invariants`] on every guess (debug builds)
//! - **Dictionary**: the [`Dictionary`] oracle seam and the [`WordList`]
//!   implementation
//!
//! # Example
//!
//! ```
//! use strictly_wordle::{Classification, GameSession, Submission, WordList};
//!
//! let mut session = GameSession::new(WordList::from_words(["crane", "train"]));
//! assert_eq!(session.submit_word("crane"), Ok(Submission::SecretSet));
//!
//! let Ok(Submission::Guessed(report)) = session.submit_word("train") else {
//!     panic!("guess should be scored");
//! };
//! assert_eq!(report.evaluation().get(4), Some(Classification::Present));
//! assert_eq!(report.guesses_remaining(), 5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod dictionary;
mod feedback;
pub mod invariants;
mod phases;
mod rules;
mod session;
mod typestate;
mod word;
mod wrapper;

// Crate-level exports - Words and actions
pub use action::{Guess, SubmitError, WordRejection};
pub use word::{GAME_WORD_LENGTH, Word};

// Crate-level exports - Feedback and rules
pub use feedback::{Classification, Evaluation, GuessRecord};
pub use rules::{MAX_GUESSES, check_outcome, evaluate};

// Crate-level exports - Dictionary oracle
pub use dictionary::{Dictionary, DictionaryError, SYSTEM_WORD_FILE, WordList};

// Crate-level exports - Round phases
pub use phases::{Outcome, Phase};
pub use typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
pub use wrapper::AnyRound;

// Crate-level exports - Contracts
pub use contracts::{
    Contract, GuessContract, GuessIsWord, HasGuessesLeft, InDictionary, ValidWord, WordLength,
};

// Crate-level exports - Session
pub use session::{GameSession, GuessReport, Submission, SubmitResult};
