//! Unsolved invariant: an open round contains no winning guess.

use super::super::typestate::RoundInProgress;
use super::Invariant;

/// Invariant: no recorded guess equals the secret.
pub struct UnsolvedInvariant;

impl Invariant<RoundInProgress> for UnsolvedInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        round
            .history()
            .iter()
            .all(|record| record.guess() != round.secret())
    }

    fn description() -> &'static str {
        "Open round has no guess matching the secret"
    }
}
