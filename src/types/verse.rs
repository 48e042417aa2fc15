//! Verse record types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single verse as produced by the corpus parser.
///
/// Records are immutable once parsed; the chunk engine only reads and
/// regroups them. `(book, chapter, verse)` is unique within a well-formed
/// source, but duplicates are tolerated rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Book name, e.g. "Genesis" or "1 Samuel"
    pub book: String,

    /// Chapter number (1-based)
    pub chapter: u32,

    /// Verse number within the chapter (1-based)
    pub verse: u32,

    /// Verse text as it appears in the source
    pub text: String,

    /// Words the translators supplied in square brackets
    pub implied_words: Vec<String>,

    /// Display reference, e.g. "Genesis 1:1"
    pub reference: String,
}

impl VerseRecord {
    /// Create a verse record, deriving the display reference.
    pub fn new(book: &str, chapter: u32, verse: u32, text: &str) -> Self {
        Self {
            book: book.to_string(),
            chapter,
            verse,
            text: text.to_string(),
            implied_words: Vec::new(),
            reference: format!("{} {}:{}", book, chapter, verse),
        }
    }

    /// Attach implied words extracted from the text.
    pub fn with_implied_words(mut self, words: Vec<String>) -> Self {
        self.implied_words = words;
        self
    }

    /// Canonical sort key: book, then chapter, then verse.
    pub fn sort_key(&self) -> (&str, u32, u32) {
        (&self.book, self.chapter, self.verse)
    }
}

/// Verses grouped by book and chapter.
///
/// Iteration order is books ascending lexically, chapters ascending
/// numerically; each chapter's verse list is sorted ascending by verse
/// number. Built once per chunking run and discarded after segmentation.
pub type GroupedVerses = BTreeMap<String, BTreeMap<u32, Vec<VerseRecord>>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_derivation() {
        let verse = VerseRecord::new("Genesis", 1, 1, "In the beginning");
        assert_eq!(verse.reference, "Genesis 1:1");
    }

    #[test]
    fn test_sort_key_ordering() {
        let a = VerseRecord::new("Genesis", 1, 2, "a");
        let b = VerseRecord::new("Genesis", 2, 1, "b");
        let c = VerseRecord::new("Exodus", 1, 1, "c");
        assert!(a.sort_key() < b.sort_key());
        assert!(c.sort_key() < a.sort_key());
    }
}
