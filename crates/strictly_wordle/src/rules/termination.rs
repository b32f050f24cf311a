//! Round termination logic.

use super::super::phases::Outcome;
use super::super::word::Word;
use tracing::instrument;

/// Number of guesses Player 2 gets per round.
pub const MAX_GUESSES: usize = 6;

/// Decides whether the round ends after an accepted guess.
///
/// `guess_count` includes the guess being checked. A matching guess wins
/// even when it is the last one.
#[instrument(skip(secret), fields(guess = %guess))]
pub fn check_outcome(guess: &Word, secret: &Word, guess_count: usize) -> Option<Outcome> {
    if guess == secret {
        Some(Outcome::Win)
    } else if guess_count >= MAX_GUESSES {
        Some(Outcome::Loss)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_wins() {
        let crane = Word::parse("crane").unwrap();
        assert_eq!(check_outcome(&crane, &crane, 1), Some(Outcome::Win));
    }

    #[test]
    fn test_match_on_last_guess_wins() {
        let crane = Word::parse("crane").unwrap();
        assert_eq!(check_outcome(&crane, &crane, MAX_GUESSES), Some(Outcome::Win));
    }

    #[test]
    fn test_last_miss_loses() {
        let crane = Word::parse("crane").unwrap();
        let train = Word::parse("train").unwrap();
        assert_eq!(check_outcome(&train, &crane, MAX_GUESSES), Some(Outcome::Loss));
    }

    #[test]
    fn test_early_miss_continues() {
        let crane = Word::parse("crane").unwrap();
        let train = Word::parse("train").unwrap();
        assert_eq!(check_outcome(&train, &crane, 3), None);
    }
}
