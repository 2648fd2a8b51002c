//! fastembed-backed text encoder
//!
//! Wraps a pretrained all-MiniLM-L6-v2 model (ONNX runtime). Long inputs are
//! split into token windows, each window is encoded independently, and the
//! window vectors are averaged into one fixed-size vector.

use std::path::Path;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use super::pooling::{mean_of, split_windows};
use super::Embedder;
use crate::error::{Result, SearchError};

/// Token budget per encoder window.
///
/// Counted in whitespace tokens; kept well below the model's 512-subword
/// sequence limit since a word expands into multiple subword tokens. The
/// model's own truncation is a second guard.
pub const WINDOW_TOKENS: usize = 256;

/// Pretrained text encoder with window averaging
pub struct TextEncoder {
    model: TextEmbedding,
    dimension: usize,
}

impl TextEncoder {
    /// Load the pretrained encoder
    ///
    /// Model files are downloaded into `cache_dir` on first use and reused
    /// afterwards.
    pub fn new(cache_dir: impl AsRef<Path>) -> Result<Self> {
        let options = InitOptions::new(EmbeddingModel::AllMiniLML6V2)
            .with_cache_dir(cache_dir.as_ref().to_path_buf())
            .with_show_download_progress(false);

        let model = TextEmbedding::try_new(options)
            .map_err(|e| SearchError::embedding(format!("failed to load encoder: {e}")))?;

        // Learn the output dimension by encoding a probe string
        let probe = model
            .embed(vec!["probe"], None)
            .map_err(|e| SearchError::embedding(format!("probe encoding failed: {e}")))?;
        let dimension = probe
            .first()
            .map(Vec::len)
            .ok_or_else(|| SearchError::embedding("encoder produced no probe output"))?;

        log::info!("Text encoder ready ({dimension}d, {WINDOW_TOKENS}-token windows)");

        Ok(Self { model, dimension })
    }
}

impl Embedder for TextEncoder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let windows = split_windows(text, WINDOW_TOKENS);
        if windows.is_empty() {
            return Err(SearchError::bad_request("query text is empty"));
        }

        let vectors = self
            .model
            .embed(windows, None)
            .map_err(|e| SearchError::embedding(format!("encoding failed: {e}")))?;

        mean_of(&vectors).ok_or_else(|| SearchError::embedding("encoder returned no vectors"))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
