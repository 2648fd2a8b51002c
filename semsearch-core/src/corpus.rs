//! In-memory corpus of passage texts
//!
//! Line i of the corpus file holds the passage whose vector occupies row i
//! of the similarity index. The alignment itself is produced offline; it is
//! validated once at startup when the search pipeline is assembled.

use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Ordered, read-only collection of corpus passages
#[derive(Debug)]
pub struct Corpus {
    lines: Vec<String>,
}

impl Corpus {
    /// Load passages from a UTF-8 text file, one per line
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let lines: Vec<String> = raw.lines().map(str::to_owned).collect();

        log::info!("Loaded {} corpus passages from {}", lines.len(), path.display());

        Ok(Self { lines })
    }

    /// Build a corpus directly from passage strings
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Resolve a row identifier returned by the index to its passage text
    pub fn get(&self, row: usize) -> Result<&str> {
        self.lines
            .get(row)
            .map(String::as_str)
            .ok_or(SearchError::OutOfRange {
                row,
                len: self.lines.len(),
            })
    }

    /// Number of passages
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "first passage").unwrap();
        writeln!(file, "second passage").unwrap();
        writeln!(file, "third passage").unwrap();

        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.get(0).unwrap(), "first passage");
        assert_eq!(corpus.get(2).unwrap(), "third passage");
    }

    #[test]
    fn test_lines_keep_position_order() {
        let corpus = Corpus::from_lines(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(corpus.get(1).unwrap(), "b");
    }

    #[test]
    fn test_out_of_range_is_an_error() {
        let corpus = Corpus::from_lines(vec!["only".into()]);
        let err = corpus.get(5).unwrap_err();
        assert!(matches!(err, SearchError::OutOfRange { row: 5, len: 1 }));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Corpus::load("/nonexistent/corpus.txt").unwrap_err();
        assert!(matches!(err, SearchError::Io(_)));
    }
}
