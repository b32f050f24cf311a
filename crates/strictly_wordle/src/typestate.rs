//! Phase-specific typestate structs for a round.
//!
//! Each phase is its own type with phase-specific fields. A
//! `RoundFinished` ALWAYS has an outcome, and only a `RoundInProgress`
//! can accept guesses.

use super::action::{Guess, SubmitError};
use super::contracts::{Contract, GuessContract};
use super::feedback::GuessRecord;
use super::phases::Outcome;
use super::rules::{self, MAX_GUESSES};
use super::word::Word;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Round waiting for Player 1 to choose the secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSetup;

impl RoundSetup {
    /// Creates a new round in setup phase.
    #[instrument]
    pub fn new() -> Self {
        Self
    }

    /// Fixes the secret (consumes setup, returns in-progress).
    #[instrument(skip_all)]
    pub fn set_secret(self, secret: Word) -> RoundInProgress {
        debug!("Secret fixed for this round");
        RoundInProgress {
            secret,
            history: Vec::new(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Round in progress - can accept guesses.
///
/// Invariants enforced by type:
/// - the secret never changes (no setter)
/// - fewer than `MAX_GUESSES` guesses recorded, none of them winning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInProgress {
    pub(crate) secret: Word,
    pub(crate) history: Vec<GuessRecord>,
}

impl RoundInProgress {
    /// Applies a guess, consuming self and transitioning to the next state.
    ///
    /// Contract enforcement:
    /// - Preconditions checked always
    /// - Postconditions checked in debug builds only
    #[instrument(skip(self), fields(guess_count = self.history.len()))]
    pub fn make_guess(self, action: Guess) -> Result<RoundResult, SubmitError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        GuessContract::pre(&self, &action)?;

        let mut round = self;
        let evaluation = rules::evaluate(action.word(), &round.secret);
        round.history.push(GuessRecord::new(*action.word(), evaluation));
        debug!(%evaluation, "Guess scored");

        if let Some(outcome) = rules::check_outcome(action.word(), &round.secret, round.history.len()) {
            return Ok(RoundResult::Finished(RoundFinished {
                secret: round.secret,
                history: round.history,
                outcome,
            }));
        }

        #[cfg(debug_assertions)]
        GuessContract::post(&before, &round)?;

        Ok(RoundResult::InProgress(round))
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Returns accepted guesses in order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses still available.
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Replays guesses against a secret from a fresh round.
    #[instrument(skip(secret))]
    pub fn replay(secret: Word, guesses: &[Word]) -> Result<RoundResult, SubmitError> {
        let mut round = RoundSetup::new().set_secret(secret);

        for word in guesses {
            match round.make_guess(Guess::new(*word))? {
                RoundResult::InProgress(r) => round = r,
                RoundResult::Finished(r) => return Ok(RoundResult::Finished(r)),
            }
        }

        Ok(RoundResult::InProgress(round))
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Round finished - outcome determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundFinished {
    secret: Word,
    history: Vec<GuessRecord>,
    outcome: Outcome,
}

impl RoundFinished {
    /// Returns the outcome. Never optional.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the secret word.
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// Returns accepted guesses in order.
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Number of guesses left unused.
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Starts over (consumes finished, returns setup).
    #[instrument(skip(self))]
    pub fn restart(self) -> RoundSetup {
        RoundSetup::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a guess.
#[derive(Debug)]
pub enum RoundResult {
    /// Round continues.
    InProgress(RoundInProgress),
    /// Round finished.
    Finished(RoundFinished),
}
