//! Property-based tests for the vocabulary store, persistence, and
//! rendering.
//!
//! These tests use proptest to generate random vocabularies and verify:
//!
//! 1. **Round-trip**: save followed by load reproduces the store
//! 2. **No panics**: loading arbitrary text never crashes
//! 3. **Bounds**: rendered listings never exceed their limit

use std::collections::HashMap;
use std::io::Write;

use proptest::prelude::*;
use tempfile::NamedTempFile;

use lexicon::render::{RenderOptions, render};
use lexicon::{VocabStore, persist};

// =============================================================================
// Strategies
// =============================================================================

/// Lowercase alphabetic words, as stored.
fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,12}"
}

/// Printable single-line descriptions; commas are allowed.
fn description() -> impl Strategy<Value = String> {
    "[ -~]{0,60}"
}

fn vocabulary() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(word(), description(), 0..16)
}

fn build_store(entries: &HashMap<String, String>) -> VocabStore {
    let mut store = VocabStore::new();
    for (word, description) in entries {
        store.add(word.clone(), description.clone()).unwrap();
    }
    store
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Saving and reloading reproduces the same word set, with the
    /// descriptions trimmed on the way back in.
    #[test]
    fn save_load_round_trip(entries in vocabulary()) {
        let store = build_store(&entries);

        let file = NamedTempFile::new().unwrap();
        persist::save(file.path(), &store).unwrap();
        let loaded = persist::load(file.path()).unwrap();

        prop_assert_eq!(loaded.len(), store.len());
        for (word, description) in &entries {
            prop_assert_eq!(loaded.get(word), Some(description.trim()));
        }
        loaded.assert_invariants();
    }

    /// Loading arbitrary printable text never panics; it produces either a
    /// store or a tagged error.
    #[test]
    fn load_never_panics(content in "[ -~\\n]{0,200}") {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();

        let _ = persist::load(file.path());
    }

    /// The rendered listing shows exactly the expected number of lines:
    /// header, entries up to the limit, and the hint when cut short.
    #[test]
    fn render_respects_limit(entries in vocabulary(), limit in 0usize..10) {
        let store = build_store(&entries);
        let text = render(&store, &RenderOptions { limit, word_width: 15 });

        let shown = if limit == 0 { store.len() } else { limit.min(store.len()) };
        let hint = usize::from(shown < store.len());
        prop_assert_eq!(text.lines().count(), 1 + shown + hint);
    }
}
