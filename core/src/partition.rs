//! Splitting the target list into per-worker chunks
//!
//! The split is contiguous and order preserving: concatenating the chunks in
//! worker order reproduces the input exactly. With `n` items and `w` workers,
//! the first `n % w` chunks hold one extra item.

use std::ops::Range;

use crate::error::{FanoutError, FanoutResult};

/// A single target identifier to request
pub type WorkItem = String;

/// Index of a worker in `0..workers`
pub type WorkerId = usize;

/// Compute chunk boundaries for `len` items over `desired` workers
///
/// The worker count is clamped to `len`, so `desired > len` yields one item
/// per worker. A `desired` of 0 is treated as 1. Returns no ranges when
/// `len` is 0.
pub fn chunk_bounds(len: usize, desired: usize) -> Vec<Range<usize>> {
    let workers = desired.max(1).min(len);
    if workers == 0 {
        return Vec::new();
    }

    let base = len / workers;
    let remainder = len % workers;

    let mut bounds = Vec::with_capacity(workers);
    let mut start = 0;
    for id in 0..workers {
        let size = if id < remainder { base + 1 } else { base };
        bounds.push(start..start + size);
        start += size;
    }
    debug_assert_eq!(start, len);
    bounds
}

/// Immutable mapping of worker id to its ordered slice of the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkAssignment {
    chunks: Vec<Vec<WorkItem>>,
}

impl ChunkAssignment {
    /// Partition `items` across at most `desired` workers
    ///
    /// # Errors
    /// Returns [`FanoutError::EmptyInput`] if `items` is empty.
    pub fn new(items: Vec<WorkItem>, desired: usize) -> FanoutResult<Self> {
        if items.is_empty() {
            return Err(FanoutError::EmptyInput);
        }

        let bounds = chunk_bounds(items.len(), desired);
        let mut iter = items.into_iter();
        let chunks = bounds
            .iter()
            .map(|range| iter.by_ref().take(range.len()).collect())
            .collect();

        Ok(Self { chunks })
    }

    /// Actual number of workers after clamping
    pub fn workers(&self) -> usize {
        self.chunks.len()
    }

    /// Total number of items across all chunks
    pub fn total(&self) -> usize {
        self.chunks.iter().map(Vec::len).sum()
    }

    /// Items assigned to `id`, if it exists
    pub fn chunk(&self, id: WorkerId) -> Option<&[WorkItem]> {
        self.chunks.get(id).map(Vec::as_slice)
    }

    /// Chunk length per worker, in worker order
    pub fn chunk_lens(&self) -> Vec<usize> {
        self.chunks.iter().map(Vec::len).collect()
    }

    /// Consume the assignment, yielding `(worker id, chunk)` pairs in order
    pub fn into_chunks(self) -> impl Iterator<Item = (WorkerId, Vec<WorkItem>)> {
        self.chunks.into_iter().enumerate()
    }
}
