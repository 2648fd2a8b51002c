//! Query pipeline
//!
//! Composes the encoder, the similarity index, and the corpus: encode the
//! query, look up the k nearest rows, resolve each row to its passage text.

use std::sync::Arc;

use crate::corpus::Corpus;
use crate::embedding::Embedder;
use crate::error::{Result, SearchError};
use crate::index::SimilarityIndex;

/// Number of neighbors returned per query
pub const DEFAULT_K: usize = 5;

/// Ranked hits for one query, nearest first
#[derive(Debug, Clone)]
pub struct SearchHits {
    /// Row identifiers into the corpus
    pub indices: Vec<usize>,
    /// Distances, parallel to `indices`, non-decreasing
    pub distances: Vec<f32>,
    /// Resolved passage texts, parallel to `indices`
    pub texts: Vec<String>,
}

/// Read-only search pipeline, assembled once at startup
pub struct SemanticSearch {
    embedder: Arc<dyn Embedder>,
    index: SimilarityIndex,
    corpus: Corpus,
}

impl std::fmt::Debug for SemanticSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticSearch")
            .field("index", &self.index)
            .field("corpus", &self.corpus)
            .finish_non_exhaustive()
    }
}

impl SemanticSearch {
    /// Assemble the pipeline, validating that its parts line up
    ///
    /// The index/corpus alignment is produced offline and nothing downstream
    /// re-checks it, so a mismatch here is a startup failure.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        index: SimilarityIndex,
        corpus: Corpus,
    ) -> Result<Self> {
        if index.len() != corpus.len() {
            return Err(SearchError::index(format!(
                "index has {} rows but corpus has {} passages",
                index.len(),
                corpus.len()
            )));
        }
        if embedder.dimension() != index.dimension() {
            return Err(SearchError::index(format!(
                "encoder emits {}d vectors but index expects {}d",
                embedder.dimension(),
                index.dimension()
            )));
        }

        Ok(Self {
            embedder,
            index,
            corpus,
        })
    }

    /// Run one query and return the k nearest passages
    pub fn search(&self, query: &str, k: usize) -> Result<SearchHits> {
        let vector = self.embedder.embed(query)?;
        let (indices, distances) = self.index.search(&vector, k)?;

        let texts = indices
            .iter()
            .map(|&row| self.corpus.get(row).map(str::to_owned))
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchHits {
            indices,
            distances,
            texts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Maps known queries to fixed vectors; anything else gets a default
    struct StubEmbedder {
        dimension: usize,
    }

    impl Embedder for StubEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            match text {
                "" => Err(SearchError::bad_request("query text is empty")),
                "third" => Ok(vec![0.0, 0.0, 1.0, 0.0]),
                _ => Ok(vec![0.25, 0.25, 0.25, 0.25]),
            }
        }

        fn dimension(&self) -> usize {
            self.dimension
        }
    }

    fn fixture_pipeline() -> SemanticSearch {
        let vectors = vec![
            vec![1.0, 0.0, 0.0, 0.0],
            vec![0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0],
            vec![0.5, 0.5, 0.0, 0.0],
            vec![0.0, 0.0, 0.5, 0.5],
        ];
        let corpus = Corpus::from_lines(
            ["zero", "one", "two", "three", "four", "five"]
                .map(String::from)
                .to_vec(),
        );
        let index = SimilarityIndex::build(vectors).unwrap();
        SemanticSearch::new(Arc::new(StubEmbedder { dimension: 4 }), index, corpus).unwrap()
    }

    #[test]
    fn test_exact_match_resolves_to_its_passage() {
        let search = fixture_pipeline();
        let hits = search.search("third", 1).unwrap();

        assert_eq!(hits.indices, vec![2]);
        assert_eq!(hits.texts, vec!["two".to_string()]);
        assert!(hits.distances[0].abs() < 1e-6);
    }

    #[test]
    fn test_texts_follow_indices() {
        let search = fixture_pipeline();
        let hits = search.search("anything", DEFAULT_K).unwrap();

        assert_eq!(hits.indices.len(), DEFAULT_K);
        let expected = ["zero", "one", "two", "three", "four", "five"];
        for (row, text) in hits.indices.iter().zip(&hits.texts) {
            assert_eq!(text, expected[*row]);
        }
    }

    #[test]
    fn test_empty_query_propagates_bad_request() {
        let search = fixture_pipeline();
        let err = search.search("", DEFAULT_K).unwrap_err();
        assert!(matches!(err, SearchError::BadRequest(_)));
    }

    #[test]
    fn test_misaligned_corpus_is_rejected_at_startup() {
        let index = SimilarityIndex::build(vec![vec![1.0, 0.0, 0.0, 0.0]]).unwrap();
        let corpus = Corpus::from_lines(vec!["a".into(), "b".into()]);
        let err = SemanticSearch::new(Arc::new(StubEmbedder { dimension: 4 }), index, corpus)
            .unwrap_err();
        assert!(matches!(err, SearchError::Index(_)));
    }

    #[test]
    fn test_wrong_encoder_dimension_is_rejected_at_startup() {
        let index = SimilarityIndex::build(vec![vec![1.0, 0.0, 0.0, 0.0]]).unwrap();
        let corpus = Corpus::from_lines(vec!["a".into()]);
        let err = SemanticSearch::new(Arc::new(StubEmbedder { dimension: 8 }), index, corpus)
            .unwrap_err();
        assert!(matches!(err, SearchError::Index(_)));
    }
}
