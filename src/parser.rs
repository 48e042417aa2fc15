//! Corpus parser for KJV-style plain text files.
//!
//! Each verse line has the shape "Book Chapter:Verse Text". The first two
//! lines of the file are header material and skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::types::VerseRecord;

lazy_static! {
    // Book name (optionally numbered, optionally "X of Y"), chapter,
    // verse, then the verse text.
    static ref VERSE_LINE: Regex =
        Regex::new(r"^([1-3]?\s*[A-Za-z]+(?:\s+[oO]f\s+[A-Za-z]+)?)\s+(\d+):(\d+)\s*(.+)$")
            .unwrap();

    // Translator-supplied words appear in square brackets.
    static ref IMPLIED_WORDS: Regex = Regex::new(r"\[([^\]]+)\]").unwrap();
}

/// Parse a corpus file into verse records.
///
/// Lines that do not match the verse pattern are logged and skipped;
/// only I/O failures are fatal.
pub fn parse_corpus(path: &Path) -> Result<Vec<VerseRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read corpus file {}", path.display()))?;

    // The first two lines are title and header material.
    let verses = parse_lines(content.lines().skip(2));
    info!(
        verse_count = verses.len(),
        path = %path.display(),
        "Parsed corpus file"
    );
    Ok(verses)
}

/// Parse an iterator of verse lines, skipping blanks and logging
/// unparseable lines.
pub fn parse_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<VerseRecord> {
    let mut verses = Vec::new();

    for (line_number, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(verse) => verses.push(verse),
            None => warn!(line = line_number + 1, "Failed to parse line"),
        }
    }

    verses
}

/// Parse a single "Book Chapter:Verse Text" line.
fn parse_line(line: &str) -> Option<VerseRecord> {
    let caps = VERSE_LINE.captures(line)?;

    let book = caps.get(1)?.as_str().trim();
    let chapter: u32 = caps.get(2)?.as_str().parse().ok()?;
    let verse: u32 = caps.get(3)?.as_str().parse().ok()?;
    let text = caps.get(4)?.as_str().trim();

    let implied_words = IMPLIED_WORDS
        .captures_iter(text)
        .map(|c| c[1].to_string())
        .collect();

    Some(VerseRecord::new(book, chapter, verse, text).with_implied_words(implied_words))
}
