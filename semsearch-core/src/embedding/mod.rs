//! Embedding module for semantic search
//!
//! Turns text into fixed-size vectors via fastembed, with window averaging
//! so long inputs still produce a single vector.

mod encoder;
mod pooling;

pub use encoder::{TextEncoder, WINDOW_TOKENS};
pub use pooling::{mean_of, split_windows};

use crate::error::Result;

/// Trait for text embedding models
///
/// The production implementation is [`TextEncoder`]; tests substitute
/// deterministic stubs.
pub trait Embedder: Send + Sync {
    /// Embed a single text into one fixed-size vector
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embedding dimension
    fn dimension(&self) -> usize;
}
