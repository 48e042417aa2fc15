//! The chunk engine: grouping, passage segmentation, and window splitting.

pub mod grouper;
pub mod segmenter;
pub mod window;

use tracing::{debug, info};

pub use grouper::group_verses;
pub use segmenter::{segment_passages, BOUNDARY_PHRASES};
pub use window::split_windows;

use crate::error::ChunkError;
use crate::types::{Chunk, ChunkerConfig, VerseRecord};

/// Engine that turns an ordered verse sequence into retrieval-ready
/// chunks.
///
/// Construction validates the configuration and fixes the window step
/// size; `chunk` is then a pure function of its input. The engine holds
/// no state across calls.
pub struct ChunkEngine {
    config: ChunkerConfig,
    step: usize,
}

impl ChunkEngine {
    /// Create an engine with a validated configuration.
    pub fn new(config: ChunkerConfig) -> Result<Self, ChunkError> {
        config.validate()?;
        let step = config.step_size();
        Ok(Self { config, step })
    }

    /// The verse-index advance between consecutive windows.
    pub fn step_size(&self) -> usize {
        self.step
    }

    /// Chunk a verse sequence.
    ///
    /// Passages at or under `max_passage_size` become chunks unchanged;
    /// larger passages are replaced by their sliding-window chunks.
    /// Results keep passage order, then window offset order.
    pub fn chunk(&self, verses: &[VerseRecord]) -> Result<Vec<Chunk>, ChunkError> {
        let grouped = group_verses(verses);
        let passages = segment_passages(&grouped);
        info!(passage_count = passages.len(), "Created passage-level chunks");

        let mut chunks = Vec::new();
        let mut split_passages = 0;

        for passage in passages {
            if passage.len() <= self.config.max_passage_size {
                chunks.push(Chunk::from_verses(passage)?);
            } else {
                split_passages += 1;
                for window in split_windows(&passage, self.config.window_size, self.step) {
                    chunks.push(Chunk::from_verses(window.to_vec())?);
                }
            }
        }

        debug!(split_passages, "Applied sliding window to oversized passages");
        info!(chunk_count = chunks.len(), "Final chunk count");

        Ok(chunks)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn engine(window: usize, overlap: f64, max_passage: usize) -> ChunkEngine {
        ChunkEngine::new(
            ChunkerConfig::default()
                .with_window_size(window)
                .with_overlap_percentage(overlap)
                .with_max_passage_size(max_passage),
        )
        .unwrap()
    }

    fn chapter(book: &str, number: u32, len: u32) -> Vec<VerseRecord> {
        (1..=len)
            .map(|n| VerseRecord::new(book, number, n, &format!("Verse {} of the chapter.", n)))
            .collect()
    }

    /// The first ten verses of Genesis 1 (KJV).
    fn genesis_sample() -> Vec<VerseRecord> {
        let texts = [
            "In the beginning God created the heaven and the earth.",
            "And the earth was without form, and void; and darkness was upon the face of the deep. And the Spirit of God moved upon the face of the waters.",
            "And God said, Let there be light: and there was light.",
            "And God saw the light, that it was good: and God divided the light from the darkness.",
            "And God called the light Day, and the darkness he called Night. And the evening and the morning were the first day.",
            "And God said, Let there be a firmament in the midst of the waters, and let it divide the waters from the waters.",
            "And God made the firmament, and divided the waters which were under the firmament from the waters which were above the firmament: and it was so.",
            "And God called the firmament Heaven. And the evening and the morning were the second day.",
            "And God said, Let the waters under the heaven be gathered together unto one place, and let the dry land appear: and it was so.",
            "And God called the dry land Earth; and the gathering together of the waters called he Seas: and God saw that it was good.",
        ];
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| VerseRecord::new("Genesis", 1, i as u32 + 1, text))
            .collect()
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let result = ChunkEngine::new(ChunkerConfig::default().with_window_size(0));
        assert!(matches!(result, Err(ChunkError::InvalidConfig { .. })));
    }

    #[test]
    fn test_step_fixed_at_construction() {
        assert_eq!(engine(7, 0.5, 15).step_size(), 3);
        assert_eq!(engine(3, 0.9, 15).step_size(), 1);
    }

    #[test]
    fn test_empty_input_yields_no_chunks() {
        let chunks = engine(7, 0.5, 15).chunk(&[]).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_small_passage_passes_through() {
        let verses = chapter("Genesis", 1, 5);
        let chunks = engine(7, 0.5, 15).chunk(&verses).unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].reference, "Genesis 1:1-5");
        assert_eq!(chunks[0].verse_count(), 5);
    }

    #[test]
    fn test_oversized_passage_is_split() {
        let verses = chapter("Genesis", 1, 20);
        let chunks = engine(7, 0.5, 15).chunk(&verses).unwrap();

        // Offsets 0,3,6,9,12,15,18; all windows have at least 2 verses.
        assert_eq!(chunks.len(), 7);
        assert_eq!(chunks[0].reference, "Genesis 1:1-7");
        assert_eq!(chunks[6].reference, "Genesis 1:19-20");
    }

    #[test]
    fn test_coverage_after_splitting() {
        let verses = chapter("Genesis", 1, 20);
        let chunks = engine(7, 0.5, 15).chunk(&verses).unwrap();

        for verse in &verses {
            assert!(
                chunks.iter().any(|c| c.verses.contains(verse)),
                "{} not covered by any chunk",
                verse.reference
            );
        }
        assert_eq!(chunks[0].verses[0], verses[0]);
        let last = chunks.last().unwrap();
        assert_eq!(last.verses[last.verse_count() - 1], verses[19]);
    }

    #[test]
    fn test_passage_order_is_preserved() {
        let mut verses = chapter("Genesis", 1, 3);
        verses.extend(chapter("Genesis", 2, 20));
        let chunks = engine(7, 0.5, 15).chunk(&verses).unwrap();

        assert_eq!(chunks[0].reference, "Genesis 1:1-3");
        for pair in chunks.windows(2) {
            assert!(pair[0].metadata.start_verse <= pair[1].metadata.start_verse
                || pair[0].metadata.start_chapter < pair[1].metadata.start_chapter);
        }
    }

    #[test]
    fn test_genesis_sample_end_to_end() {
        // window 3, overlap 0.5, max passage 5: step = max(1, floor(1.5)) = 1.
        // No verse in the sample starts with a boundary phrase and all share
        // one chapter, so segmentation yields a single 10-verse passage,
        // which exceeds the ceiling and is windowed at step 1.
        let verses = genesis_sample();
        let engine = engine(3, 0.5, 5);
        assert_eq!(engine.step_size(), 1);

        let chunks = engine.chunk(&verses).unwrap();

        // Offsets 0..=7 give 3-verse windows, offset 8 gives 2, offset 9 is
        // a dropped single-verse tail.
        assert_eq!(chunks.len(), 9);
        assert_eq!(chunks[0].reference, "Genesis 1:1-3");
        assert_eq!(chunks[7].reference, "Genesis 1:8-10");
        assert_eq!(chunks[8].reference, "Genesis 1:9-10");
        assert_eq!(chunks[8].chunk_id, "genesis_1_9_10");
    }

    #[test]
    fn test_duplicate_ids_from_overlapping_windows_are_kept() {
        // Ids are span-derived, so windows over duplicate verse keys
        // collide; the engine keeps the duplicates rather than
        // deduplicating.
        let verses: Vec<VerseRecord> = (0..20)
            .map(|i| VerseRecord::new("Genesis", 1, 2, &format!("Copy {}.", i)))
            .collect();
        let chunks = engine(7, 0.5, 15).chunk(&verses).unwrap();

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chunk_id == "genesis_1_2_2"));
    }
}
