//! Batched annotation of chunks with generated context.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::ContextProvider;
use crate::types::Chunk;

/// Default number of chunks per annotation batch.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// A chunk paired with its generated contextual description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedChunk {
    #[serde(flatten)]
    pub chunk: Chunk,
    pub context: String,
}

/// Runs chunks through a context provider in batches.
///
/// The provider is an injected collaborator so tests can substitute a
/// stub; batching with a short pause keeps a local LLM from being
/// overwhelmed.
pub struct ContextAnnotator {
    provider: Arc<dyn ContextProvider>,
    batch_size: usize,
}

impl ContextAnnotator {
    /// Create an annotator over the given provider.
    pub fn new(provider: Arc<dyn ContextProvider>) -> Self {
        Self {
            provider,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }

    /// Set the batch size (clamped to at least 1).
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Annotate every chunk, preserving order.
    pub async fn annotate(&self, chunks: Vec<Chunk>) -> Vec<AnnotatedChunk> {
        let total = chunks.len();
        let batch_count = total.div_ceil(self.batch_size);
        info!(chunk_count = total, "Generating context for chunks");

        let mut annotated = Vec::with_capacity(total);

        for (index, batch) in chunks.chunks(self.batch_size).enumerate() {
            info!(batch = index + 1, batch_count, "Processing batch");

            for chunk in batch {
                let context = self
                    .provider
                    .context_for(&chunk.reference, &chunk.text)
                    .await;
                annotated.push(AnnotatedChunk {
                    chunk: chunk.clone(),
                    context,
                });
            }

            // Brief pause between batches to avoid overwhelming the LLM.
            if (index + 1) * self.batch_size < total {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
            }
        }

        info!(annotated = annotated.len(), "Completed context generation");
        annotated
    }
}
