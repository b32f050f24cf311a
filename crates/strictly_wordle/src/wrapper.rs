//! Wrapper holding a round in any typestate phase.

use super::feedback::GuessRecord;
use super::phases::{Outcome, Phase};
use super::rules::MAX_GUESSES;
use super::typestate::{RoundFinished, RoundInProgress, RoundResult, RoundSetup};
use super::word::Word;
use serde::{Deserialize, Serialize};

/// A round in any phase.
///
/// The session owns exactly one of these and swaps it on every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnyRound {
    /// Waiting for the secret.
    AwaitingSecret(RoundSetup),
    /// Secret set, guesses being made.
    Guessing(RoundInProgress),
    /// Round decided.
    Over(RoundFinished),
}

impl Default for AnyRound {
    fn default() -> Self {
        AnyRound::AwaitingSecret(RoundSetup::new())
    }
}

impl From<RoundSetup> for AnyRound {
    fn from(round: RoundSetup) -> Self {
        AnyRound::AwaitingSecret(round)
    }
}

impl From<RoundInProgress> for AnyRound {
    fn from(round: RoundInProgress) -> Self {
        AnyRound::Guessing(round)
    }
}

impl From<RoundFinished> for AnyRound {
    fn from(round: RoundFinished) -> Self {
        AnyRound::Over(round)
    }
}

impl From<RoundResult> for AnyRound {
    fn from(result: RoundResult) -> Self {
        match result {
            RoundResult::InProgress(r) => r.into(),
            RoundResult::Finished(r) => r.into(),
        }
    }
}

impl AnyRound {
    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        match self {
            AnyRound::AwaitingSecret(_) => Phase::AwaitingSecret,
            AnyRound::Guessing(_) => Phase::Guessing,
            AnyRound::Over(round) => Phase::RoundOver(round.outcome()),
        }
    }

    /// Returns the secret, once set.
    pub fn secret(&self) -> Option<&Word> {
        match self {
            AnyRound::AwaitingSecret(_) => None,
            AnyRound::Guessing(round) => Some(round.secret()),
            AnyRound::Over(round) => Some(round.secret()),
        }
    }

    /// Returns accepted guesses in order.
    pub fn history(&self) -> &[GuessRecord] {
        match self {
            AnyRound::AwaitingSecret(_) => &[],
            AnyRound::Guessing(round) => round.history(),
            AnyRound::Over(round) => round.history(),
        }
    }

    /// Number of accepted guesses.
    pub fn guess_count(&self) -> usize {
        self.history().len()
    }

    /// Number of guesses still available.
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guess_count())
    }

    /// Returns true once the round is decided.
    pub fn is_over(&self) -> bool {
        matches!(self, AnyRound::Over(_))
    }

    /// Returns the outcome, once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            AnyRound::Over(round) => Some(round.outcome()),
            _ => None,
        }
    }

    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self {
            AnyRound::AwaitingSecret(_) => "Waiting for the secret word".to_string(),
            AnyRound::Guessing(_) => format!("Guesses remaining: {}", self.guesses_remaining()),
            AnyRound::Over(round) => format!("Round over. {}", round.outcome()),
        }
    }
}
