//! Passage segmentation over grouped verses.

use crate::types::{GroupedVerses, VerseRecord};

/// Phrases whose appearance at the start of a verse marks a passage
/// boundary.
///
/// This list and its order are a frozen compatibility contract: chunk ids
/// derived from passage spans change if the heuristic changes. "Then" in
/// particular over-triggers, and that behavior is kept as-is.
pub const BOUNDARY_PHRASES: [&str; 7] = [
    "And it came to pass",
    "Now it came to pass",
    "After these things",
    "Then",
    "Behold",
    "Verily, verily",
    "Thus saith the Lord",
];

/// Split grouped verses into passages.
///
/// Verses are scanned in canonical order (books ascending lexically,
/// chapters ascending, verses ascending); a passage is sealed whenever a
/// boundary fires before the current verse, and force-sealed at the end
/// of every chapter. Passages partition the scan order exactly.
pub fn segment_passages(grouped: &GroupedVerses) -> Vec<Vec<VerseRecord>> {
    let mut passages = Vec::new();
    let mut current: Vec<VerseRecord> = Vec::new();
    let mut previous: Option<(String, u32)> = None;

    for chapters in grouped.values() {
        for verses in chapters.values() {
            for verse in verses {
                if is_passage_boundary(verse, previous.as_ref(), current.is_empty())
                    && !current.is_empty()
                {
                    passages.push(std::mem::take(&mut current));
                }

                current.push(verse.clone());
                previous = Some((verse.book.clone(), verse.chapter));
            }

            // A passage never spans a chapter break.
            if !current.is_empty() {
                passages.push(std::mem::take(&mut current));
            }
        }
    }

    if !current.is_empty() {
        passages.push(current);
    }

    passages
}

/// Decide whether a new passage starts before `verse`.
///
/// Rules in priority order: book change, chapter change, empty buffer
/// (never a boundary), verse number 1, then the boundary phrase list.
fn is_passage_boundary(
    verse: &VerseRecord,
    previous: Option<&(String, u32)>,
    passage_is_empty: bool,
) -> bool {
    if let Some((prev_book, prev_chapter)) = previous {
        if verse.book != *prev_book {
            return true;
        }
        if verse.chapter != *prev_chapter {
            return true;
        }
    }

    if passage_is_empty {
        return false;
    }

    if verse.verse == 1 {
        return true;
    }

    // Literal case-sensitive prefix test against the untrimmed text.
    BOUNDARY_PHRASES
        .iter()
        .any(|phrase| verse.text.starts_with(phrase))
}
