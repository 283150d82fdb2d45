//! Near-equal contiguous partitioning of the disease list.
//!
//! With `L` items and `n` workers, `k, m = L / n, L % n`: the first `m`
//! chunks hold `k + 1` items and the remaining `n - m` hold `k`. Chunks are
//! borrowed slices in original order, so concatenating them reproduces the
//! input exactly.

use std::num::NonZeroUsize;
use std::ops::Range;

/// Index range of chunk `index` out of `workers` over `len` items.
pub fn chunk_range(len: usize, workers: NonZeroUsize, index: usize) -> Range<usize> {
    let n = workers.get();
    let (k, m) = (len / n, len % n);
    let start = index * k + index.min(m);
    let end = start + k + usize::from(index < m);
    start.min(len)..end.min(len)
}

/// Split `items` into exactly `workers` contiguous chunks.
///
/// When there are more workers than items the trailing chunks are empty.
pub fn partition<T>(items: &[T], workers: NonZeroUsize) -> Vec<&[T]> {
    (0..workers.get())
        .map(|index| &items[chunk_range(items.len(), workers, index)])
        .collect()
}
