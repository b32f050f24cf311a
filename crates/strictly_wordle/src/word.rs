//! Canonical five-letter words.

use super::action::{SubmitError, WordRejection};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of letters in every secret word and guess.
pub const GAME_WORD_LENGTH: usize = 5;

/// A word of exactly [`GAME_WORD_LENGTH`] letters, stored uppercase.
///
/// Every comparison in the game happens on this canonical form, so
/// `"crane"`, `"Crane"` and `"CRANE"` parse to the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Word {
    letters: [char; GAME_WORD_LENGTH],
}

impl Word {
    /// Canonicalizes `text` to uppercase and checks its length.
    ///
    /// Length is counted in characters after canonicalization. Dictionary
    /// membership is not checked here.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Self, SubmitError> {
        let upper: Vec<char> = text.to_uppercase().chars().collect();
        let letters: [char; GAME_WORD_LENGTH] = upper.as_slice().try_into().map_err(|_| {
            SubmitError::InvalidWord(WordRejection::WrongLength(upper.len()))
        })?;
        Ok(Self { letters })
    }

    /// Returns the letters in order.
    pub fn letters(&self) -> &[char; GAME_WORD_LENGTH] {
        &self.letters
    }

    /// Returns the letter at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    /// Returns true if `letter` occurs at any position.
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for letter in self.letters {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Word {
    type Err = SubmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonicalizes_case() {
        let lower = Word::parse("crane").unwrap();
        let mixed = Word::parse("CrAnE").unwrap();
        assert_eq!(lower, mixed);
        assert_eq!(lower.to_string(), "CRANE");
    }

    #[test]
    fn test_parse_rejects_short_and_long() {
        assert_eq!(
            Word::parse("AB"),
            Err(SubmitError::InvalidWord(WordRejection::WrongLength(2)))
        );
        assert_eq!(
            Word::parse("CRANES"),
            Err(SubmitError::InvalidWord(WordRejection::WrongLength(6)))
        );
        assert_eq!(
            Word::parse(""),
            Err(SubmitError::InvalidWord(WordRejection::WrongLength(0)))
        );
    }

    #[test]
    fn test_contains_any_position() {
        let word: Word = "apple".parse().unwrap();
        assert!(word.contains('P'));
        assert!(word.contains('E'));
        assert!(!word.contains('Z'));
        assert_eq!(word.get(4), Some('E'));
        assert_eq!(word.get(5), None);
    }
}
