//! HNSW similarity index over corpus row vectors
//!
//! Uses instant-distance HNSW with cosine distance. The on-disk artifact is
//! the bincode-serialized row-vector matrix; the graph itself is rebuilt
//! from the vectors when the file is loaded. Row i of the index corresponds
//! to line i of the corpus file.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use instant_distance::{Builder, HnswMap, Point, Search};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// One corpus row vector stored in the HNSW graph
#[derive(Clone)]
struct RowVector(Vec<f32>);

impl Point for RowVector {
    fn distance(&self, other: &Self) -> f32 {
        // Cosine distance = 1 - similarity (HNSW finds minimum)
        1.0 - cosine_similarity(&self.0, &other.0)
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// On-disk artifact format
#[derive(Serialize, Deserialize)]
struct IndexFile {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

/// Nearest-neighbor index over the corpus vectors
pub struct SimilarityIndex {
    map: HnswMap<RowVector, u32>,
    dimension: usize,
    len: usize,
}

impl std::fmt::Debug for SimilarityIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimilarityIndex")
            .field("dimension", &self.dimension)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl SimilarityIndex {
    /// Build an index from row vectors, row i keeping identifier i
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimension = match vectors.first() {
            Some(first) => first.len(),
            None => return Err(SearchError::index("no vectors to index")),
        };
        if dimension == 0 {
            return Err(SearchError::index("zero-length vectors"));
        }
        if let Some(row) = vectors.iter().position(|v| v.len() != dimension) {
            return Err(SearchError::index(format!(
                "row {row} has {} dimensions, expected {dimension}",
                vectors[row].len()
            )));
        }

        let len = vectors.len();
        let points: Vec<RowVector> = vectors.into_iter().map(RowVector).collect();
        let values: Vec<u32> = (0..len as u32).collect();

        let map = Builder::default().ef_construction(100).build(points, values);

        Ok(Self {
            map,
            dimension,
            len,
        })
    }

    /// Load a pre-built index artifact
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let file: IndexFile = bincode::deserialize_from(reader)?;

        let index = Self::build(file.vectors)?;
        if index.dimension != file.dimension {
            return Err(SearchError::index(format!(
                "artifact declares {} dimensions but rows have {}",
                file.dimension, index.dimension
            )));
        }

        log::info!(
            "Loaded index from {} ({} rows, {}d)",
            path.display(),
            index.len,
            index.dimension
        );

        Ok(index)
    }

    /// Write row vectors as an index artifact loadable by [`Self::load`]
    pub fn save(path: impl AsRef<Path>, vectors: &[Vec<f32>]) -> Result<()> {
        let dimension = vectors
            .first()
            .map(Vec::len)
            .ok_or_else(|| SearchError::index("no vectors to save"))?;

        let file = IndexFile {
            dimension,
            vectors: vectors.to_vec(),
        };
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, &file)?;
        Ok(())
    }

    /// Return the k nearest rows to `query`, nearest first
    ///
    /// Yields parallel (identifier, distance) sequences with non-decreasing
    /// distances. Fails if the query length differs from the index
    /// dimensionality.
    pub fn search(&self, query: &[f32], k: usize) -> Result<(Vec<usize>, Vec<f32>)> {
        if query.len() != self.dimension {
            return Err(SearchError::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let point = RowVector(query.to_vec());
        let mut search = Search::default();
        let mut indices = Vec::with_capacity(k);
        let mut distances = Vec::with_capacity(k);

        for item in self.map.search(&point, &mut search) {
            indices.push(*item.value as usize);
            distances.push(item.distance);

            if indices.len() >= k {
                break;
            }
        }

        Ok((indices, distances))
    }

    /// Index dimensionality
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of indexed rows
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index holds no rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
