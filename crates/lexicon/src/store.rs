//! In-memory vocabulary store.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LexiconError, Result};

// Words are purely alphabetic. This is what makes the persisted format safe:
// the first comma on a line is always the field separator.
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\p{Alphabetic}+$").unwrap());

/// Check whether a candidate word is non-empty and purely alphabetic.
pub fn is_valid_word(word: &str) -> bool {
    WORD_PATTERN.is_match(word)
}

/// A stored key must additionally be lowercase.
fn is_stored_word(word: &str) -> bool {
    is_valid_word(word) && !word.chars().any(char::is_uppercase)
}

/// In-memory mapping from words to their descriptions.
///
/// Every key is a non-empty, lowercase, purely alphabetic word. Uniqueness
/// is structural: the map cannot hold the same word twice, so there is no
/// way for the word set and the description keys to drift apart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabStore {
    entries: HashMap<String, String>,
}

impl VocabStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new word with its description.
    ///
    /// Returns [`LexiconError::DuplicateWord`] if the word is already
    /// present. The caller is expected to have validated and lowercased the
    /// word beforehand.
    pub fn add(
        &mut self,
        word: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let word = word.into();
        debug_assert!(is_stored_word(&word), "unvalidated word: {word:?}");

        if self.entries.contains_key(&word) {
            return Err(LexiconError::DuplicateWord { word });
        }
        self.entries.insert(word, description.into());
        Ok(())
    }

    /// Remove a word, returning its description.
    ///
    /// Returns [`LexiconError::WordNotFound`] if the word is absent.
    pub fn remove(&mut self, word: &str) -> Result<String> {
        self.entries.remove(word).ok_or_else(|| LexiconError::WordNotFound {
            word: word.to_string(),
        })
    }

    /// Whether the word is in the store.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Look up the description for a word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(String::as_str)
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(word, description)` pairs, unordered.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(w, d)| (w.as_str(), d.as_str()))
    }

    /// Iterate over the stored words, unordered.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// Self-check: every stored key is a valid lowercase alphabetic word.
    ///
    /// A violation is a programming error and panics; it is never expected
    /// in normal operation.
    pub fn assert_invariants(&self) {
        for word in self.entries.keys() {
            assert!(
                is_stored_word(word),
                "vocabulary invariant violated: invalid stored word {word:?}"
            );
        }
    }
}
