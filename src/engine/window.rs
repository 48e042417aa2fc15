//! Sliding-window splitting of oversized passages.

use crate::types::VerseRecord;

/// Split a passage into overlapping windows.
///
/// Windows start at offsets 0, step, 2*step, ... and hold up to
/// `window_size` verses; the last window is whatever remains. Windows
/// with fewer than two verses are dropped, so a passage shorter than two
/// verses contributes nothing.
pub fn split_windows(
    verses: &[VerseRecord],
    window_size: usize,
    step: usize,
) -> Vec<&[VerseRecord]> {
    debug_assert!(step >= 1);

    let mut windows = Vec::new();
    let mut offset = 0;

    while offset < verses.len() {
        let end = (offset + window_size).min(verses.len());
        let window = &verses[offset..end];

        if window.len() >= 2 {
            windows.push(window);
        }

        offset += step;
    }

    windows
}
