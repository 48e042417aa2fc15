//! Error types for the chunk engine.

use thiserror::Error;

/// Errors produced by the chunk engine.
///
/// The engine itself is total over well-formed input; these cover the two
/// ways a caller can misuse it. Parsing and network failures belong to the
/// collaborator modules and surface as `anyhow` errors there.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// A chunk was requested from an empty verse list. This indicates a
    /// broken invariant upstream and is never silently ignored.
    #[error("cannot build a chunk from an empty verse list")]
    EmptyChunk,

    /// A configuration parameter was rejected at engine construction.
    #[error("invalid configuration: {parameter} {message}")]
    InvalidConfig {
        parameter: &'static str,
        message: String,
    },
}

impl ChunkError {
    pub(crate) fn invalid_config(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            message: message.into(),
        }
    }
}
