//! Vocabulary file persistence: line-oriented `word,description` text.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{LexiconError, Result};
use crate::store::{VocabStore, is_valid_word};

/// Load a vocabulary from a line-oriented text file.
///
/// Each line is split on its first comma into a word and a description.
/// The word is trimmed and lowercased, the description is trimmed. The load
/// is whole-file-or-nothing: the first malformed line or repeated word
/// aborts it, so a partially valid file never produces a partial store.
pub fn load(path: impl AsRef<Path>) -> Result<VocabStore> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| LexiconError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut store = VocabStore::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| LexiconError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let Some((word_part, description)) = line.split_once(',') else {
            return Err(LexiconError::WrongFormat { line: line_no });
        };
        let word_part = word_part.trim();
        if !is_valid_word(word_part) {
            return Err(LexiconError::WrongFormat { line: line_no });
        }

        let word = word_part.to_lowercase();
        if store.contains(&word) {
            return Err(LexiconError::DuplicateEntry { word, line: line_no });
        }
        store.add(word, description.trim())?;
    }

    Ok(store)
}

/// Write the store to `path`, one `word,description` line per entry.
///
/// Truncating whole-file overwrite; iteration order is unspecified. On
/// failure the file may be partially written but the in-memory store is
/// unaffected.
pub fn save(path: impl AsRef<Path>, store: &VocabStore) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| LexiconError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mut writer = BufWriter::new(file);
    for (word, description) in store.entries() {
        writeln!(writer, "{word},{description}").map_err(|e| LexiconError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush().map_err(|e| LexiconError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
