//! First-class invariants for an open round.
//!
//! Invariants are logical properties that must hold while Player 2 is
//! guessing. They are checked as postconditions in debug builds and can be
//! tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check_one<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        check_one::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check_one::<S, I1>(state, &mut violations);
        check_one::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod guess_budget;
pub mod history_consistent;
pub mod unsolved;

pub use guess_budget::GuessBudgetInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use unsolved::UnsolvedInvariant;

/// All open-round invariants as a composable set.
pub type RoundInvariants = (
    GuessBudgetInvariant,
    UnsolvedInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Guess, RoundInProgress, RoundResult, RoundSetup, Word};

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_round() {
        let round = RoundSetup::new().set_secret(word("crane"));
        assert!(RoundInvariants::check_all(&round).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_guesses() {
        let guesses = [word("train"), word("slide"), word("north")];
        if let Ok(RoundResult::InProgress(round)) = RoundInProgress::replay(word("crane"), &guesses) {
            assert!(RoundInvariants::check_all(&round).is_ok());
        } else {
            panic!("Expected in-progress round");
        }
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let round = RoundSetup::new().set_secret(word("crane"));
        if let Ok(RoundResult::InProgress(mut round)) = round.make_guess(Guess::new(word("train"))) {
            // Swap the secret so the recorded feedback is stale and the
            // recorded guess now matches it.
            round.secret = word("train");

            let violations = RoundInvariants::check_all(&round).unwrap_err();
            assert_eq!(violations.len(), 2);
        } else {
            panic!("Expected in-progress round");
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let round = RoundSetup::new().set_secret(word("crane"));

        type TwoInvariants = (GuessBudgetInvariant, UnsolvedInvariant);
        assert!(TwoInvariants::check_all(&round).is_ok());
    }
}
