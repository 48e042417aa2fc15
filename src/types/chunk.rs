//! Chunk type and the shared chunk constructor.

use serde::{Deserialize, Serialize};

use super::VerseRecord;
use crate::error::ChunkError;

/// A chunk of verses ready for embedding and retrieval.
///
/// A chunk is either a whole passage or one window of a split passage.
/// All chunks are built through [`Chunk::from_verses`], which sorts the
/// verses and derives the reference, id, text, and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier derived from the reference, e.g. "genesis_1_1_5".
    /// Overlapping windows with identical spans share an id; the engine
    /// does not deduplicate.
    pub chunk_id: String,

    /// Verses in canonical (book, chapter, verse) order
    pub verses: Vec<VerseRecord>,

    /// Display reference for the span, e.g. "Genesis 1:1-5"
    pub reference: String,

    /// Space-joined verse texts in sorted order
    pub text: String,

    /// Span metadata derived from the first and last verse
    pub metadata: ChunkMetadata,
}

/// Metadata describing a chunk's span within the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub book: String,
    pub start_chapter: u32,
    pub start_verse: u32,
    pub end_chapter: u32,
    pub end_verse: u32,
    pub verse_count: usize,
}

impl Chunk {
    /// Build a chunk from a non-empty list of verses.
    ///
    /// The verses are stable-sorted by (book, chapter, verse), so the same
    /// verse set yields the same chunk regardless of input order.
    ///
    /// # Errors
    /// Returns [`ChunkError::EmptyChunk`] when `verses` is empty. The
    /// engine's segmentation invariants make this unreachable in normal
    /// operation; a broken upstream invariant fails loudly here.
    pub fn from_verses(mut verses: Vec<VerseRecord>) -> Result<Self, ChunkError> {
        if verses.is_empty() {
            return Err(ChunkError::EmptyChunk);
        }

        verses.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let first = &verses[0];
        let last = &verses[verses.len() - 1];

        let reference = format_reference(first, last);
        let chunk_id = derive_chunk_id(&reference);
        let text = verses
            .iter()
            .map(|v| v.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let metadata = ChunkMetadata {
            book: first.book.clone(),
            start_chapter: first.chapter,
            start_verse: first.verse,
            end_chapter: last.chapter,
            end_verse: last.verse,
            verse_count: verses.len(),
        };

        Ok(Self {
            chunk_id,
            verses,
            reference,
            text,
            metadata,
        })
    }

    /// Number of verses in the chunk.
    pub fn verse_count(&self) -> usize {
        self.verses.len()
    }
}

/// Format the span reference from the first and last sorted verse.
fn format_reference(first: &VerseRecord, last: &VerseRecord) -> String {
    if first.book == last.book {
        if first.chapter == last.chapter {
            format!(
                "{} {}:{}-{}",
                first.book, first.chapter, first.verse, last.verse
            )
        } else {
            format!(
                "{} {}:{}-{}:{}",
                first.book, first.chapter, first.verse, last.chapter, last.verse
            )
        }
    } else {
        format!("{}-{}", first.reference, last.reference)
    }
}

/// Lowercase the reference and map spaces, colons, and hyphens to
/// underscores.
fn derive_chunk_id(reference: &str) -> String {
    reference
        .to_lowercase()
        .replace([' ', ':', '-'], "_")
}
