//! History consistency invariant: recorded feedback matches the rules.

use super::super::rules;
use super::super::typestate::RoundInProgress;
use super::Invariant;

/// Invariant: every recorded evaluation is what the rules give for that
/// guess against the current secret.
pub struct HistoryConsistentInvariant;

impl Invariant<RoundInProgress> for HistoryConsistentInvariant {
    fn holds(round: &RoundInProgress) -> bool {
        round
            .history()
            .iter()
            .all(|record| *record.evaluation() == rules::evaluate(record.guess(), round.secret()))
    }

    fn description() -> &'static str {
        "Recorded feedback matches the secret"
    }
}
