//! Core types for the chunking pipeline.

mod chunk;
mod config;
mod verse;

pub use chunk::{Chunk, ChunkMetadata};
pub use config::ChunkerConfig;
pub use verse::{GroupedVerses, VerseRecord};
