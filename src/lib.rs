//! Scripture Chunker Library
//!
//! Turns a flat sequence of book/chapter/verse records into overlapping,
//! retrieval-ready chunks using a hybrid strategy: passage-level
//! segmentation first, then sliding-window splitting of oversized passages.

pub mod engine;
pub mod enrichment;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

pub use engine::ChunkEngine;
pub use enrichment::{AnnotatedChunk, ContextClient, ContextProvider};
pub use error::ChunkError;
pub use types::{Chunk, ChunkMetadata, ChunkerConfig, GroupedVerses, VerseRecord};

/// Default sliding window size in verses
pub const DEFAULT_WINDOW_SIZE: usize = 7;

/// Default overlap between adjacent windows, as a fraction of the window
pub const DEFAULT_OVERLAP_PERCENTAGE: f64 = 0.5;

/// Default maximum passage size in verses before the sliding window applies
pub const DEFAULT_MAX_PASSAGE_SIZE: usize = 15;
