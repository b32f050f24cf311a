//! Per-letter feedback for a guess.

use super::word::{GAME_WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Feedback for one letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Classification {
    /// Right letter, right position.
    Correct,
    /// Letter occurs in the secret at some other position.
    Present,
    /// Letter does not occur in the secret.
    Absent,
}

impl Classification {
    /// Single-character symbol used in logs and plain-text boards.
    pub fn symbol(self) -> char {
        match self {
            Classification::Correct => 'G',
            Classification::Present => 'Y',
            Classification::Absent => '.',
        }
    }
}

/// Ordered feedback for a whole guess, one entry per letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    classifications: [Classification; GAME_WORD_LENGTH],
}

impl Evaluation {
    /// Wraps a classification array.
    pub fn new(classifications: [Classification; GAME_WORD_LENGTH]) -> Self {
        Self { classifications }
    }

    /// Returns the classifications in letter order.
    pub fn classifications(&self) -> &[Classification; GAME_WORD_LENGTH] {
        &self.classifications
    }

    /// Returns the classification at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<Classification> {
        self.classifications.get(index).copied()
    }

    /// Iterates over the classifications in letter order.
    pub fn iter(&self) -> impl Iterator<Item = Classification> + '_ {
        self.classifications.iter().copied()
    }

    /// Returns true if every letter is [`Classification::Correct`].
    pub fn is_solved(&self) -> bool {
        self.iter().all(|c| c == Classification::Correct)
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for classification in self.classifications {
            write!(f, "{}", classification.symbol())?;
        }
        Ok(())
    }
}

/// An accepted guess together with its feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    guess: Word,
    evaluation: Evaluation,
}

impl GuessRecord {
    /// Creates a record.
    pub fn new(guess: Word, evaluation: Evaluation) -> Self {
        Self { guess, evaluation }
    }

    /// Returns the guessed word.
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// Returns the feedback for the guess.
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Pairs each letter with its classification.
    pub fn tiles(&self) -> impl Iterator<Item = (char, Classification)> + '_ {
        self.guess
            .letters()
            .iter()
            .copied()
            .zip(self.evaluation.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_are_distinct() {
        let symbols: std::collections::HashSet<char> =
            Classification::iter().map(Classification::symbol).collect();
        assert_eq!(symbols.len(), 3);
    }

    #[test]
    fn test_display_uses_symbols() {
        use Classification::*;
        let evaluation = Evaluation::new([Absent, Correct, Correct, Absent, Present]);
        assert_eq!(evaluation.to_string(), ".GG.Y");
        assert!(!evaluation.is_solved());
    }

    #[test]
    fn test_tiles_pair_letters_with_feedback() {
        use Classification::*;
        let record = GuessRecord::new(
            Word::parse("train").unwrap(),
            Evaluation::new([Absent, Correct, Correct, Absent, Present]),
        );
        let tiles: Vec<_> = record.tiles().collect();
        assert_eq!(tiles[0], ('T', Absent));
        assert_eq!(tiles[4], ('N', Present));
    }
}
