//! Scripture Chunker - Pipeline Entry Point
//!
//! Parses a KJV-style corpus, chunks it with the hybrid passage and
//! sliding-window strategy, and optionally annotates each chunk with
//! generated context.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scripture_chunker::enrichment::{ContextAnnotator, ContextClient};
use scripture_chunker::types::ChunkerConfig;
use scripture_chunker::{engine::ChunkEngine, output, parser};

#[derive(Debug, Parser)]
#[command(name = "scripture-chunker", version, about = "Process a KJV corpus into contextual chunks")]
struct Args {
    /// Path to the corpus text file
    #[arg(long, default_value = "docs/data/kjv.txt")]
    input_file: PathBuf,

    /// Directory for processed output
    #[arg(long, default_value = "data/processed")]
    output_dir: PathBuf,

    /// Sliding window size in verses
    #[arg(long, default_value_t = scripture_chunker::DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Overlap between adjacent windows, in [0, 1)
    #[arg(long, default_value_t = scripture_chunker::DEFAULT_OVERLAP_PERCENTAGE)]
    overlap_percentage: f64,

    /// Maximum passage size before the sliding window applies
    #[arg(long, default_value_t = scripture_chunker::DEFAULT_MAX_PASSAGE_SIZE)]
    max_passage_size: usize,

    /// URL of the local LLM API
    #[arg(long, default_value = scripture_chunker::enrichment::DEFAULT_API_URL)]
    llm_api_url: String,

    /// Model to use for context generation
    #[arg(long, default_value = scripture_chunker::enrichment::DEFAULT_MODEL)]
    model: String,

    /// Chunks per context-generation batch
    #[arg(long, default_value_t = scripture_chunker::enrichment::DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Skip the context generation step
    #[arg(long)]
    skip_context_generation: bool,

    /// Process only the first N verses (0 for all)
    #[arg(long, default_value_t = 0)]
    sample_size: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "scripture_chunker=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    info!("Starting Scripture Chunker v{}", env!("CARGO_PKG_VERSION"));

    // Step 1: parse the corpus.
    info!(input = %args.input_file.display(), "Parsing corpus");
    let start = Instant::now();
    let mut verses = parser::parse_corpus(&args.input_file)?;

    if args.sample_size > 0 && args.sample_size < verses.len() {
        info!(sample_size = args.sample_size, "Using verse sample");
        verses.truncate(args.sample_size);
    }

    info!(
        verse_count = verses.len(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        "Parsed verses"
    );
    output::save_verses(&verses, &args.output_dir.join("verses.json"))?;

    // Step 2: chunk.
    info!("Creating chunks");
    let start = Instant::now();
    let engine = ChunkEngine::new(
        ChunkerConfig::default()
            .with_window_size(args.window_size)
            .with_overlap_percentage(args.overlap_percentage)
            .with_max_passage_size(args.max_passage_size),
    )?;
    let chunks = engine.chunk(&verses)?;

    info!(
        chunk_count = chunks.len(),
        elapsed_secs = start.elapsed().as_secs_f64(),
        "Created chunks"
    );
    output::save_chunks(&chunks, &args.output_dir.join("chunks.json"))?;

    // Step 3: generate context.
    if args.skip_context_generation {
        info!("Skipping context generation");
    } else {
        info!("Generating contextual information");
        let start = Instant::now();

        let client = ContextClient::with_api_url(&args.llm_api_url).with_model(&args.model);
        let annotator = ContextAnnotator::new(Arc::new(client)).with_batch_size(args.batch_size);
        let annotated = annotator.annotate(chunks).await;

        info!(
            annotated = annotated.len(),
            elapsed_secs = start.elapsed().as_secs_f64(),
            "Generated context"
        );
        output::save_annotated_chunks(
            &annotated,
            &args.output_dir.join("chunks_with_context.json"),
        )?;
    }

    info!("Processing complete");
    Ok(())
}
