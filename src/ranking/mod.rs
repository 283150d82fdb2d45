//! Aggregation of partition results and stable ranking.

use std::cmp::Reverse;

use crate::genomics::Disease;

/// Concatenate partition results in partition order.
///
/// Because partitions are contiguous slices, this restores the original input
/// order.
pub fn aggregate(chunk_results: Vec<Vec<Disease>>) -> Vec<Disease> {
    let total = chunk_results.iter().map(Vec::len).sum();
    let mut diseases = Vec::with_capacity(total);
    for chunk in chunk_results {
        diseases.extend(chunk);
    }
    diseases
}

/// Aggregate, then sort by descending probability.
///
/// The sort is stable: diseases with equal probability keep their input order.
pub fn rank(chunk_results: Vec<Vec<Disease>>) -> Vec<Disease> {
    let mut diseases = aggregate(chunk_results);
    diseases.sort_by_key(|disease| Reverse(disease.probability));
    diseases
}
