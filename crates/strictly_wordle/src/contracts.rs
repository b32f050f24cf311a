//! Contract-based validation for submissions and guesses.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}.

use super::action::{Guess, SubmitError, WordRejection};
use super::dictionary::Dictionary;
use super::invariants::{InvariantSet, RoundInvariants};
use super::rules::MAX_GUESSES;
use super::typestate::RoundInProgress;
use super::word::Word;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SubmitError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SubmitError>;
}

// ─────────────────────────────────────────────────────────────
//  Word Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: exactly five characters after canonicalization.
pub struct WordLength;

impl WordLength {
    /// Parses `text` into a canonical [`Word`].
    #[instrument(skip(text))]
    pub fn check(text: &str) -> Result<Word, SubmitError> {
        Word::parse(text)
    }
}

/// Precondition: the dictionary knows the word.
pub struct InDictionary;

impl InDictionary {
    /// Asks the dictionary about `word`.
    #[instrument(skip_all)]
    pub fn check<D: Dictionary>(word: &Word, dictionary: &D) -> Result<(), SubmitError> {
        if dictionary.is_valid_word(&word.to_string()) {
            Ok(())
        } else {
            Err(SubmitError::InvalidWord(WordRejection::NotInDictionary))
        }
    }
}

/// Composite precondition applied to every submission, in either phase.
pub struct ValidWord;

impl ValidWord {
    /// Validates length, then dictionary membership.
    #[instrument(skip_all)]
    pub fn check<D: Dictionary>(text: &str, dictionary: &D) -> Result<Word, SubmitError> {
        let word = WordLength::check(text)?;
        InDictionary::check(&word, dictionary)?;
        Ok(word)
    }
}

/// Precondition: the guessing phase asks the dictionary again.
///
/// With a pure dictionary this always agrees with [`ValidWord`]; it only
/// differs when the oracle changes its mind between the two calls.
pub struct GuessIsWord;

impl GuessIsWord {
    /// Re-checks a guess against the dictionary.
    #[instrument(skip(dictionary), fields(guess = %word))]
    pub fn check<D: Dictionary>(word: &Word, dictionary: &D) -> Result<(), SubmitError> {
        if dictionary.is_valid_word(&word.to_string()) {
            Ok(())
        } else {
            Err(SubmitError::InvalidGuess(*word))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the round still has a guess to spend.
pub struct HasGuessesLeft;

impl HasGuessesLeft {
    /// Fails once `MAX_GUESSES` guesses are recorded.
    #[instrument(skip_all)]
    pub fn check(round: &RoundInProgress) -> Result<(), SubmitError> {
        if round.history().len() >= MAX_GUESSES {
            Err(SubmitError::OutOfGuesses)
        } else {
            Ok(())
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Guess Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for guess actions.
///
/// Preconditions:
/// - At least one guess left
///
/// Postconditions:
/// - Secret unchanged
/// - History extended by exactly one record, older records untouched
/// - All round invariants hold
pub struct GuessContract;

impl Contract<RoundInProgress, Guess> for GuessContract {
    fn pre(round: &RoundInProgress, _action: &Guess) -> Result<(), SubmitError> {
        HasGuessesLeft::check(round)
    }

    fn post(before: &RoundInProgress, after: &RoundInProgress) -> Result<(), SubmitError> {
        if before.secret() != after.secret() {
            warn!("Secret changed during a guess");
            return Err(SubmitError::InvariantViolation(
                "Postcondition failed: secret changed".to_string(),
            ));
        }

        let extended = after.history().len() == before.history().len() + 1
            && after.history().starts_with(before.history());
        if !extended {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History not extended by one guess"
            );
            return Err(SubmitError::InvariantViolation(
                "Postcondition failed: history not extended by one guess".to_string(),
            ));
        }

        RoundInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SubmitError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
