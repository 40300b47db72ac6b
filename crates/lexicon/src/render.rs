//! Formatting vocabulary listings.

use crate::store::VocabStore;

/// Descriptions longer than this are cut short in truncated listings.
const MAX_DESCRIPTION_CHARS: usize = 80;

/// Options for rendering a vocabulary listing.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Maximum entries to show (0 = show all).
    pub limit: usize,
    /// Column width the word is right-aligned into.
    pub word_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            limit: 0,
            word_width: 15,
        }
    }
}

/// Render the vocabulary as a sorted listing with a count header.
///
/// Words are sorted ascending and right-aligned into `word_width` columns.
/// When `limit` is non-zero, at most `limit` entries are shown, overlong
/// descriptions are truncated, and a hint marks the cut-off listing.
pub fn render(store: &VocabStore, options: &RenderOptions) -> String {
    let total = store.len();
    let shown = if options.limit > 0 {
        options.limit.min(total)
    } else {
        total
    };

    let mut words: Vec<&str> = store.words().collect();
    words.sort_unstable();

    let mut out = format!("The vocabulary contains {total} words:\n");
    for &word in words.iter().take(shown) {
        let description = store.get(word).unwrap_or_default();
        let description = if options.limit > 0 {
            truncate_chars(description, MAX_DESCRIPTION_CHARS)
        } else {
            description.to_string()
        };
        out.push_str(&format!(
            "{word:>width$}:  {description}\n",
            width = options.word_width
        ));
    }
    if shown < total {
        out.push_str("......(choose 1 to see the full vocabulary)......\n");
    }
    out
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an
/// ellipsis. Counts characters, not bytes.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}
