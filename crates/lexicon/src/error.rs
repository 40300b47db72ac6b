//! Error types for the lexicon library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lexicon operations.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Error reading or writing a vocabulary file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted line did not match the `word,description` format.
    #[error("wrong format at line {line}")]
    WrongFormat { line: usize },

    /// The same word appeared on more than one line of a loaded file.
    #[error("duplicate word '{word}' at line {line}")]
    DuplicateEntry { word: String, line: usize },

    /// Tried to add a word that is already in the store.
    #[error("word '{word}' is already in the vocabulary")]
    DuplicateWord { word: String },

    /// Tried to remove a word that is not in the store.
    #[error("word '{word}' is not in the vocabulary")]
    WordNotFound { word: String },
}

/// Result type alias for lexicon operations.
pub type Result<T> = std::result::Result<T, LexiconError>;
