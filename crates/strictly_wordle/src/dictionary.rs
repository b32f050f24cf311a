//! Dictionary oracle: "is this a real word?"

use derive_more::{Display, Error};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Common U.S. English five-letter words shipped with the crate.
const BUILTIN_WORDS: &str = include_str!("../data/words.txt");

/// Word file most Unix systems ship.
pub const SYSTEM_WORD_FILE: &str = "/usr/share/dict/words";

/// Answers whether a string is a valid word.
///
/// Implementations must be case-insensitive and free of side effects, and
/// must return a definite answer for input of any length. The session
/// applies its own length check, so a plain membership test is enough.
pub trait Dictionary {
    /// Returns true if `text` is a word in this dictionary.
    fn is_valid_word(&self, text: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_valid_word(&self, text: &str) -> bool {
        (**self).is_valid_word(text)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_valid_word(&self, text: &str) -> bool {
        (**self).is_valid_word(text)
    }
}

/// In-memory word list, stored uppercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Creates an empty word list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the embedded list of common five-letter words.
    #[instrument]
    pub fn builtin() -> Self {
        let list = Self::parse(BUILTIN_WORDS);
        debug!(words = list.len(), "Loaded builtin word list");
        list
    }

    /// Loads the embedded list plus every word in `path`, if it can be read.
    ///
    /// A missing or unreadable file leaves just the embedded list.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn builtin_with(path: impl AsRef<Path>) -> Self {
        let mut list = Self::builtin();
        match Self::from_file(path.as_ref()) {
            Ok(extra) => list.words.extend(extra.words),
            Err(e) => warn!(error = %e, "Using the embedded word list only"),
        }
        list
    }

    /// Builds a list from any sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::new();
        for word in words {
            list.insert(word.as_ref());
        }
        list
    }

    /// Parses a newline-separated word file.
    ///
    /// Blank lines, `#` comments and entries containing anything other than
    /// letters (possessives, hyphenated forms) are skipped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .filter(|line| line.chars().all(char::is_alphabetic)),
        )
    }

    /// Loads a word file such as `/usr/share/dict/words`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        debug!("Loading word list from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DictionaryError::new(format!(
                "Failed to read word list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let list = Self::parse(&content);
        if list.is_empty() {
            return Err(DictionaryError::new(format!(
                "Word list {} contains no words",
                path.as_ref().display()
            )));
        }

        info!(words = list.len(), "Word list loaded");
        Ok(list)
    }

    /// Adds a word, returning true if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_uppercase())
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, text: &str) -> bool {
        self.words.contains(&text.to_uppercase())
    }
}

/// Failure to build a dictionary.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let list = WordList::from_words(["crane"]);
        assert!(list.is_valid_word("crane"));
        assert!(list.is_valid_word("CRANE"));
        assert!(list.is_valid_word("CrAnE"));
        assert!(!list.is_valid_word("train"));
    }

    #[test]
    fn test_any_length_gets_an_answer() {
        let list = WordList::from_words(["crane"]);
        assert!(!list.is_valid_word(""));
        assert!(!list.is_valid_word("AB"));
        assert!(!list.is_valid_word("cranes"));
    }

    #[test]
    fn test_parse_skips_comments_and_punctuation() {
        let list = WordList::parse("# header\n\ncrane\nTRAIN\nAlice's\nwell-being\n  apple  \n");
        assert_eq!(list.len(), 3);
        assert!(list.is_valid_word("APPLE"));
        assert!(!list.is_valid_word("ALICE'S"));
    }

    #[test]
    fn test_builtin_list_has_common_words() {
        let list = WordList::builtin();
        assert!(list.len() > 800);
        for word in ["CRANE", "TRAIN", "APPLE", "PEPPY"] {
            assert!(list.is_valid_word(word), "{} missing", word);
        }
    }

    #[test]
    fn test_builtin_accepts_everyday_words() {
        let mut session = crate::GameSession::new(WordList::builtin());
        for word in ["cloud", "tiger", "pizza", "grape", "zebra", "plumb"] {
            assert!(
                session.submit_word(word).is_ok(),
                "{} rejected by the embedded list",
                word
            );
            session.start_new_round();
        }
    }

    #[test]
    fn test_builtin_with_merges_word_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Aaron's\nfjord\nquirk").unwrap();

        let list = WordList::builtin_with(file.path());
        assert_eq!(list.len(), WordList::builtin().len() + 2);
        assert!(list.is_valid_word("fjord"));
        assert!(list.is_valid_word("crane"));
    }

    #[test]
    fn test_builtin_with_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let list = WordList::builtin_with(dir.path().join("missing.txt"));
        assert_eq!(list, WordList::builtin());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate\nirate").unwrap();

        let list = WordList::from_file(file.path()).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.is_valid_word("slate"));
    }

    #[test]
    fn test_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = WordList::from_file(dir.path().join("missing.txt")).unwrap_err();
        assert!(err.message.contains("Failed to read word list"));
    }

    #[test]
    fn test_from_empty_file_fails() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = WordList::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("contains no words"));
    }

    #[test]
    fn test_references_and_boxes_are_dictionaries() {
        let list = WordList::from_words(["crane"]);
        let boxed: Box<dyn Dictionary> = Box::new(list.clone());
        assert!((&list).is_valid_word("crane"));
        assert!(boxed.is_valid_word("crane"));
    }
}
