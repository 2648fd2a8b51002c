//! Semsearch core
//!
//! Embedding generation and nearest-neighbor lookup for the semsearch
//! service.
//!
//! ## Pipeline
//!
//! - **Embedding** - turn a query string into a fixed-size vector
//!   (fastembed, with window averaging for long inputs)
//! - **Index** - find the k nearest corpus rows by cosine distance
//!   (instant-distance HNSW, rebuilt from an on-disk vector matrix)
//! - **Corpus** - resolve row identifiers to the original passage texts
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use semsearch_core::{Corpus, SemanticSearch, SimilarityIndex, TextEncoder, DEFAULT_K};
//!
//! let index = SimilarityIndex::load("data/index.bin")?;
//! let corpus = Corpus::load("data/corpus.txt")?;
//! let encoder = TextEncoder::new("models")?;
//!
//! let search = SemanticSearch::new(Arc::new(encoder), index, corpus)?;
//! let hits = search.search("how do I renew a parking permit", DEFAULT_K)?;
//! ```

pub mod corpus;
pub mod embedding;
pub mod error;
pub mod index;
pub mod search;

// Re-exports for convenience
pub use corpus::Corpus;
pub use embedding::{Embedder, TextEncoder};
pub use error::{Result, SearchError};
pub use index::SimilarityIndex;
pub use search::{SearchHits, SemanticSearch, DEFAULT_K};
