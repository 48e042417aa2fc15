//! Grouping of the flat verse sequence by book and chapter.

use std::collections::BTreeMap;

use crate::types::{GroupedVerses, VerseRecord};

/// Group verses by book and chapter, sorting each chapter's verses
/// ascending by verse number.
///
/// Total over any input, including empty. Every record appears exactly
/// once in the output. The per-chapter sort is stable, so duplicate
/// (chapter, verse) pairs keep their input order rather than failing.
pub fn group_verses(verses: &[VerseRecord]) -> GroupedVerses {
    let mut grouped: GroupedVerses = BTreeMap::new();

    for verse in verses {
        grouped
            .entry(verse.book.clone())
            .or_default()
            .entry(verse.chapter)
            .or_default()
            .push(verse.clone());
    }

    for chapters in grouped.values_mut() {
        for chapter_verses in chapters.values_mut() {
            chapter_verses.sort_by_key(|v| v.verse);
        }
    }

    grouped
}
