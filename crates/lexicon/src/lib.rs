//! Lexicon: an interactive vocabulary manager.
//!
//! Lexicon keeps a set of unique words paired with free-form descriptions,
//! persists them to a line-oriented text file, renders sorted listings, and
//! runs recall quizzes over random samples of the vocabulary.
//!
//! # Core Principles
//!
//! - **Structural uniqueness**: a word can never appear twice; the store is
//!   a plain mapping from word to description
//! - **Whole-file-or-nothing loads**: a malformed vocabulary file never
//!   produces a partial store
//! - **Explicit failures**: every file or format problem surfaces as a
//!   tagged error the caller can report and recover from
//!
//! # Example
//!
//! ```
//! use lexicon::VocabStore;
//!
//! let mut store = VocabStore::new();
//! store.add("cat", "Very good home tiger").unwrap();
//!
//! assert!(store.contains("cat"));
//! assert_eq!(store.len(), 1);
//! ```

pub mod error;
pub mod persist;
pub mod quiz;
pub mod render;
pub mod store;

pub use error::{LexiconError, Result};
pub use quiz::{QuizConfig, QuizResult};
pub use render::RenderOptions;
pub use store::VocabStore;
