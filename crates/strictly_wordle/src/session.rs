//! Game session: one round of state and the operations that drive it.
//!
//! The session is the only mutable state in the game. A presentation layer
//! forwards each line of input to [`GameSession::submit_word`] and renders
//! the result; the session never touches presentation concerns.

use super::action::{Guess, SubmitError};
use super::contracts::{GuessIsWord, ValidWord};
use super::dictionary::Dictionary;
use super::feedback::{Evaluation, GuessRecord};
use super::phases::{Outcome, Phase};
use super::typestate::RoundSetup;
use super::word::Word;
use super::wrapper::AnyRound;
use tracing::{debug, info, instrument, warn};

/// Successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The word became the secret; guessing may begin.
    SecretSet,
    /// The word was scored as a guess.
    Guessed(GuessReport),
}

/// Result of [`GameSession::submit_word`].
///
/// `Err` values are classified rejections. The session is unchanged after
/// any of them and stays usable.
pub type SubmitResult = Result<Submission, SubmitError>;

/// Feedback for an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessReport {
    record: GuessRecord,
    guesses_remaining: usize,
    outcome: Option<Outcome>,
}

impl GuessReport {
    /// The guess and its per-letter feedback.
    pub fn record(&self) -> &GuessRecord {
        &self.record
    }

    /// The per-letter feedback.
    pub fn evaluation(&self) -> &Evaluation {
        self.record.evaluation()
    }

    /// Guesses left after this one.
    pub fn guesses_remaining(&self) -> usize {
        self.guesses_remaining
    }

    /// Set when this guess ended the round.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

/// State for one playthrough, plus the dictionary used to validate input.
#[derive(Debug, Clone)]
pub struct GameSession<D> {
    dictionary: D,
    round: AnyRound,
}

impl<D: Dictionary> GameSession<D> {
    /// Creates a session awaiting the secret word.
    #[instrument(skip(dictionary))]
    pub fn new(dictionary: D) -> Self {
        Self {
            dictionary,
            round: AnyRound::default(),
        }
    }

    /// Submits a line of input.
    ///
    /// Every submission must be five letters and a dictionary word. The
    /// first accepted word becomes the secret. Later words are guesses:
    /// they are checked against the dictionary again, scored, and counted.
    #[instrument(
        skip(self, candidate),
        fields(phase = %self.round.phase(), chars = candidate.chars().count())
    )]
    pub fn submit_word(&mut self, candidate: &str) -> SubmitResult {
        let word = ValidWord::check(candidate, &self.dictionary).inspect_err(|e| {
            info!(error = %e, "Submission rejected");
        })?;

        let (round, result) = advance(std::mem::take(&mut self.round), word, &self.dictionary);
        self.round = round;
        result
    }

    /// Discards the current round and awaits a new secret.
    ///
    /// Safe to call in any phase.
    #[instrument(skip(self), fields(phase = %self.round.phase()))]
    pub fn start_new_round(&mut self) {
        self.round = RoundSetup::new().into();
        info!("New round started");
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.round.phase()
    }

    /// Returns the secret, once set.
    pub fn secret_word(&self) -> Option<&Word> {
        self.round.secret()
    }

    /// Number of accepted guesses this round.
    pub fn guess_count(&self) -> usize {
        self.round.guess_count()
    }

    /// Number of guesses still available this round.
    pub fn guesses_remaining(&self) -> usize {
        self.round.guesses_remaining()
    }

    /// Returns true once the round is won or lost.
    pub fn is_over(&self) -> bool {
        self.round.is_over()
    }

    /// Returns the outcome, once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        self.round.outcome()
    }

    /// Returns accepted guesses in order.
    pub fn history(&self) -> &[GuessRecord] {
        self.round.history()
    }

    /// Returns the round in its current phase.
    pub fn round(&self) -> &AnyRound {
        &self.round
    }

    /// Returns the dictionary.
    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }
}

/// Applies a validated word to a round, returning the next round.
///
/// Every branch hands a round back, so a rejection leaves the caller's
/// state exactly as it was.
fn advance<D: Dictionary>(round: AnyRound, word: Word, dictionary: &D) -> (AnyRound, SubmitResult) {
    match round {
        AnyRound::AwaitingSecret(setup) => {
            info!("Secret set, guessing may begin");
            (setup.set_secret(word).into(), Ok(Submission::SecretSet))
        }
        AnyRound::Guessing(round) => {
            if let Err(e) = GuessIsWord::check(&word, dictionary) {
                info!(error = %e, "Guess rejected");
                return (round.into(), Err(e));
            }

            let snapshot = round.clone();
            match round.make_guess(Guess::new(word)) {
                Ok(result) => {
                    let next = AnyRound::from(result);
                    match next.history().last().copied() {
                        Some(record) => {
                            let report = GuessReport {
                                record,
                                guesses_remaining: next.guesses_remaining(),
                                outcome: next.outcome(),
                            };
                            info!(
                                guess = %word,
                                evaluation = %record.evaluation(),
                                guesses_remaining = report.guesses_remaining,
                                outcome = ?report.outcome,
                                "Guess scored"
                            );
                            (next, Ok(Submission::Guessed(report)))
                        }
                        None => {
                            warn!("Accepted guess missing from history");
                            (
                                snapshot.into(),
                                Err(SubmitError::InvariantViolation(
                                    "Accepted guess missing from history".to_string(),
                                )),
                            )
                        }
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Guess failed contract check");
                    (snapshot.into(), Err(e))
                }
            }
        }
        AnyRound::Over(round) => {
            let outcome = round.outcome();
            debug!(%outcome, "Submission after round end");
            (round.into(), Err(SubmitError::RoundOver(outcome)))
        }
    }
}
