//! Window splitting and mean pooling
//!
//! A long input is encoded in consecutive non-overlapping windows; the
//! per-window vectors are then arithmetic-averaged into one vector. This is
//! a simplistic long-document strategy, kept deliberately small.

/// Split text into windows of at most `budget` whitespace tokens
///
/// Windows are consecutive and non-overlapping. Whitespace-only input
/// produces no windows.
pub fn split_windows(text: &str, budget: usize) -> Vec<String> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.chunks(budget).map(|window| window.join(" ")).collect()
}

/// Unweighted arithmetic mean of a set of equal-length vectors
///
/// Returns `None` for an empty set.
pub fn mean_of(vectors: &[Vec<f32>]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let mut acc = vec![0.0f32; first.len()];

    for vector in vectors {
        for (slot, value) in acc.iter_mut().zip(vector) {
            *slot += value;
        }
    }

    let count = vectors.len() as f32;
    for slot in &mut acc {
        *slot /= count;
    }

    Some(acc)
}
