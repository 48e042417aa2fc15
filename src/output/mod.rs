//! Serialization of pipeline artifacts to JSON files.
//!
//! Downstream consumers need the chunk id, reference, text, metadata,
//! and a reduced verse view; full verse records (implied words, numeric
//! fields) are only persisted for the raw verse dump.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::enrichment::AnnotatedChunk;
use crate::types::{Chunk, ChunkMetadata, VerseRecord};

/// Reduced verse view persisted inside chunk records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseView {
    pub reference: String,
    pub text: String,
}

impl From<&VerseRecord> for VerseView {
    fn from(verse: &VerseRecord) -> Self {
        Self {
            reference: verse.reference.clone(),
            text: verse.text.clone(),
        }
    }
}

/// Serializable chunk record for downstream consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub chunk_id: String,
    pub reference: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    pub metadata: ChunkMetadata,
    pub verses: Vec<VerseView>,
}

impl From<&Chunk> for ChunkRecord {
    fn from(chunk: &Chunk) -> Self {
        Self {
            chunk_id: chunk.chunk_id.clone(),
            reference: chunk.reference.clone(),
            text: chunk.text.clone(),
            context: None,
            metadata: chunk.metadata.clone(),
            verses: chunk.verses.iter().map(VerseView::from).collect(),
        }
    }
}

impl From<&AnnotatedChunk> for ChunkRecord {
    fn from(annotated: &AnnotatedChunk) -> Self {
        let mut record = ChunkRecord::from(&annotated.chunk);
        record.context = Some(annotated.context.clone());
        record
    }
}

/// Save parsed verses as pretty JSON.
pub fn save_verses(verses: &[VerseRecord], path: &Path) -> Result<()> {
    write_json(verses, path)?;
    info!(verse_count = verses.len(), path = %path.display(), "Saved verses");
    Ok(())
}

/// Save chunks as pretty JSON in the reduced downstream shape.
pub fn save_chunks(chunks: &[Chunk], path: &Path) -> Result<()> {
    let records: Vec<ChunkRecord> = chunks.iter().map(ChunkRecord::from).collect();
    write_json(&records, path)?;
    info!(chunk_count = chunks.len(), path = %path.display(), "Saved chunks");
    Ok(())
}

/// Save annotated chunks, including their context strings.
pub fn save_annotated_chunks(chunks: &[AnnotatedChunk], path: &Path) -> Result<()> {
    let records: Vec<ChunkRecord> = chunks.iter().map(ChunkRecord::from).collect();
    write_json(&records, path)?;
    info!(chunk_count = chunks.len(), path = %path.display(), "Saved chunks with context");
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(value).context("failed to serialize to JSON")?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_chunk() -> Chunk {
        let verses = (1..=3)
            .map(|n| VerseRecord::new("Genesis", 1, n, &format!("Verse {}.", n)))
            .collect();
        Chunk::from_verses(verses).unwrap()
    }

    #[test]
    fn test_record_reduces_verses() {
        let record = ChunkRecord::from(&sample_chunk());

        assert_eq!(record.chunk_id, "genesis_1_1_3");
        assert_eq!(record.verses.len(), 3);
        assert_eq!(record.verses[0].reference, "Genesis 1:1");
        assert!(record.context.is_none());
    }

    #[test]
    fn test_context_omitted_when_absent() {
        let json = serde_json::to_value(ChunkRecord::from(&sample_chunk())).unwrap();
        assert!(json.get("context").is_none());
        assert!(json.get("metadata").is_some());
    }

    #[test]
    fn test_annotated_record_carries_context() {
        let annotated = AnnotatedChunk {
            chunk: sample_chunk(),
            context: "Creation narrative.".to_string(),
        };
        let record = ChunkRecord::from(&annotated);
        assert_eq!(record.context.as_deref(), Some("Creation narrative."));
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("processed/chunks.json");

        save_chunks(&[sample_chunk()], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: Vec<ChunkRecord> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].reference, "Genesis 1:1-3");
    }
}
