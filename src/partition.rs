//! Contiguous chunk partitioning
//!
//! Splits a sequence into near-equal contiguous chunks, one per worker.
//! The last chunk absorbs the integer-division remainder, so it may be
//! larger than the others.

use std::ops::Range;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PartitionError {
    #[error("worker count must be at least 1")]
    NoWorkers,
}

/// Index ranges for `workers` contiguous chunks over a sequence of `len`.
///
/// Workers `0..workers-1` each get exactly `len / workers` items; the last
/// worker gets everything from `(workers - 1) * base` to the end. When
/// `workers > len` the leading chunks are empty and the last chunk holds
/// the whole sequence.
pub fn chunk_ranges(len: usize, workers: usize) -> Result<Vec<Range<usize>>, PartitionError> {
    if workers == 0 {
        return Err(PartitionError::NoWorkers);
    }

    let base = len / workers;
    let mut ranges = Vec::with_capacity(workers);

    for i in 0..workers - 1 {
        ranges.push(i * base..(i + 1) * base);
    }
    ranges.push((workers - 1) * base..len);

    Ok(ranges)
}

/// Split a slice into disjoint mutable chunks matching `chunk_ranges`.
pub fn split_chunks_mut<T>(
    items: &mut [T],
    workers: usize,
) -> Result<Vec<&mut [T]>, PartitionError> {
    let ranges = chunk_ranges(items.len(), workers)?;
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = items;
    let mut offset = 0;

    for range in ranges {
        let (head, tail) = rest.split_at_mut(range.end - offset);
        chunks.push(head);
        rest = tail;
        offset = range.end;
    }

    Ok(chunks)
}
