//! Round phases and outcomes.

use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The secret word was guessed.
    Win,
    /// All guesses were used without finding the secret.
    Loss,
}

impl Outcome {
    /// Returns true if the guesser won.
    pub fn is_win(&self) -> bool {
        matches!(self, Outcome::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "Guesser wins"),
            Outcome::Loss => write!(f, "Guesser loses"),
        }
    }
}

/// Which kind of input the session expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Player 1 has not set the secret yet.
    AwaitingSecret,
    /// Player 2 is guessing.
    Guessing,
    /// The round ended with the given outcome.
    RoundOver(Outcome),
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingSecret => write!(f, "Awaiting secret"),
            Phase::Guessing => write!(f, "Guessing"),
            Phase::RoundOver(outcome) => write!(f, "Round over ({})", outcome),
        }
    }
}
