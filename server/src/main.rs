//! semsearch-server entry point
//!
//! Loads the index artifact, the corpus file, and the text encoder once at
//! startup, validates that they line up, and serves the search endpoint.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use semsearch_core::{Corpus, SemanticSearch, SimilarityIndex, TextEncoder};
use semsearch_server::{app, AppState};

#[derive(Parser)]
#[command(name = "semsearch-server")]
#[command(about = "Semantic passage search over a pre-built vector index")]
#[command(version)]
struct Args {
    /// Pre-built similarity index artifact
    #[arg(long, default_value = "data/index.bin")]
    index: PathBuf,

    /// UTF-8 corpus file, one passage per line, aligned with the index rows
    #[arg(long, default_value = "data/corpus.txt")]
    corpus: PathBuf,

    /// Cache directory for encoder model files
    #[arg(long, default_value = "models")]
    model_cache: PathBuf,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:1111")]
    listen: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "semsearch_server=info,semsearch_core=info".into()),
        )
        .init();

    let args = Args::parse();

    let index = SimilarityIndex::load(&args.index)
        .with_context(|| format!("failed to load index from {}", args.index.display()))?;
    let corpus = Corpus::load(&args.corpus)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;
    let encoder =
        TextEncoder::new(&args.model_cache).context("failed to initialize text encoder")?;

    let search = SemanticSearch::new(Arc::new(encoder), index, corpus)
        .context("index, corpus, and encoder do not line up")?;

    let state = Arc::new(AppState { search });

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    tracing::info!("listening on {}", args.listen);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
