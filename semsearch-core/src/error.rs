//! Error types for semsearch-core

use thiserror::Error;

/// Errors that can occur in the search pipeline
#[derive(Debug, Error)]
pub enum SearchError {
    /// Request rejected before it reached the pipeline
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Embedding generation error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Query vector length differs from the index dimensionality
    #[error("Dimension mismatch: index expects {expected}, query has {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Index lookup error
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Row identifier beyond the corpus length
    #[error("Corpus row {row} out of range ({len} passages)")]
    OutOfRange { row: usize, len: usize },

    /// Malformed or inconsistent index artifact
    #[error("Index error: {0}")]
    Index(String),

    /// Serialization error (bincode)
    #[error("Serialization error: {0}")]
    Bincode(#[from] bincode::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Create a bad request error
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    /// Create an embedding error
    pub fn embedding(msg: impl Into<String>) -> Self {
        Self::Embedding(msg.into())
    }

    /// Create a lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create an index artifact error
    pub fn index(msg: impl Into<String>) -> Self {
        Self::Index(msg.into())
    }
}

/// Result type for search operations
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SearchError::DimensionMismatch {
            expected: 384,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: index expects 384, query has 3"
        );
    }

    #[test]
    fn test_out_of_range_display() {
        let err = SearchError::OutOfRange { row: 9, len: 4 };
        assert_eq!(err.to_string(), "Corpus row 9 out of range (4 passages)");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = SearchError::from(io);
        assert!(matches!(err, SearchError::Io(_)));
    }
}
