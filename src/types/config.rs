//! Configuration for the chunk engine.

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;
use crate::{DEFAULT_MAX_PASSAGE_SIZE, DEFAULT_OVERLAP_PERCENTAGE, DEFAULT_WINDOW_SIZE};

/// Parameters controlling passage splitting and the sliding window.
///
/// Supplied by the caller; the engine validates at construction so a bad
/// overlap or zero window never produces a nonsensical step size.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Sliding window size in verses
    pub window_size: usize,

    /// Overlap between adjacent windows as a fraction of the window,
    /// in [0, 1)
    pub overlap_percentage: f64,

    /// Passages longer than this (in verses) are re-split with the
    /// sliding window
    pub max_passage_size: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            overlap_percentage: DEFAULT_OVERLAP_PERCENTAGE,
            max_passage_size: DEFAULT_MAX_PASSAGE_SIZE,
        }
    }
}

impl ChunkerConfig {
    /// Set the window size.
    pub fn with_window_size(mut self, size: usize) -> Self {
        self.window_size = size;
        self
    }

    /// Set the overlap fraction.
    pub fn with_overlap_percentage(mut self, overlap: f64) -> Self {
        self.overlap_percentage = overlap;
        self
    }

    /// Set the maximum passage size.
    pub fn with_max_passage_size(mut self, size: usize) -> Self {
        self.max_passage_size = size;
        self
    }

    /// Check all parameters, rejecting values the window arithmetic
    /// cannot handle.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.window_size < 1 {
            return Err(ChunkError::invalid_config(
                "window_size",
                "must be at least 1",
            ));
        }
        if !(0.0..1.0).contains(&self.overlap_percentage) {
            return Err(ChunkError::invalid_config(
                "overlap_percentage",
                format!("must be in [0, 1), got {}", self.overlap_percentage),
            ));
        }
        if self.max_passage_size < 1 {
            return Err(ChunkError::invalid_config(
                "max_passage_size",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Verse-index advance between consecutive windows.
    ///
    /// Clamped to at least 1 so the window always makes forward progress,
    /// even at near-total overlap.
    pub fn step_size(&self) -> usize {
        let step = (self.window_size as f64 * (1.0 - self.overlap_percentage)) as usize;
        step.max(1)
    }
}
