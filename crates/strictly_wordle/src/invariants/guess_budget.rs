//! Guess budget invariant: an open round always has a guess left.

use super::super::rules::MAX_GUESSES;
use super::super::typestate::RoundInProgress;
use super::Invariant;

/// Invariant: fewer than `MAX_GUESSES` guesses recorded.
///
/// The sixth accepted guess always finishes the round, so an in-progress
/// round can never hold that many.
pub struct GuessBudgetInvariant;

impl Invariant<RoundInProgress> for GuessBudgetInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        round.history().len() < MAX_GUESSES
    }

    fn description() -> &'static str {
        "Open round has used fewer than MAX_GUESSES guesses"
    }
}
