//! Letter-by-letter guess scoring.

use super::super::feedback::{Classification, Evaluation};
use super::super::word::Word;
use tracing::instrument;

/// Scores `guess` against `secret`.
///
/// Each position is classified on its own:
/// - same letter at the same position is [`Classification::Correct`]
/// - otherwise a letter found anywhere in the secret is [`Classification::Present`]
/// - otherwise [`Classification::Absent`]
///
/// Occurrences are not counted. A letter repeated in the guess is marked
/// `Present` at every misplaced position even if the secret holds it once.
#[instrument(skip(secret), fields(guess = %guess))]
pub fn evaluate(guess: &Word, secret: &Word) -> Evaluation {
    let guess_letters = guess.letters();
    let secret_letters = secret.letters();

    Evaluation::new(std::array::from_fn(|i| {
        let letter = guess_letters[i];
        if letter == secret_letters[i] {
            Classification::Correct
        } else if secret.contains(letter) {
            Classification::Present
        } else {
            Classification::Absent
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Classification::*;

    fn word(text: &str) -> Word {
        Word::parse(text).unwrap()
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let evaluation = evaluate(&word("crane"), &word("crane"));
        assert_eq!(evaluation.classifications(), &[Correct; 5]);
        assert!(evaluation.is_solved());
    }

    #[test]
    fn test_mixed_feedback() {
        let evaluation = evaluate(&word("train"), &word("crane"));
        assert_eq!(
            evaluation.classifications(),
            &[Absent, Correct, Correct, Absent, Present]
        );
    }

    #[test]
    fn test_repeated_letters_are_not_rationed() {
        // APPLE has two P's; PEPPY has three and every misplaced one is Present.
        let evaluation = evaluate(&word("peppy"), &word("apple"));
        assert_eq!(
            evaluation.classifications(),
            &[Present, Present, Correct, Present, Absent]
        );
    }

    #[test]
    fn test_nothing_shared_is_all_absent() {
        let evaluation = evaluate(&word("study"), &word("crane"));
        assert_eq!(evaluation.classifications(), &[Absent; 5]);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let guess = word("peach");
        let secret = word("cheap");
        assert_eq!(evaluate(&guess, &secret), evaluate(&guess, &secret));
    }
}
