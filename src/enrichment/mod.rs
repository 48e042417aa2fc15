//! Contextual enrichment of chunks via a local LLM.
//!
//! Follows the contextual-retrieval approach: each chunk gets a short
//! natural-language description of where it sits in the wider narrative,
//! which is prepended at embedding time by downstream consumers.

mod annotator;
mod context_client;

pub use annotator::{AnnotatedChunk, ContextAnnotator, DEFAULT_BATCH_SIZE};
pub use context_client::{
    ContextClient, ContextProvider, DEFAULT_API_URL, DEFAULT_MODEL, FALLBACK_CONTEXT,
};
