//! Parallel execution of partitions over a fixed-size worker pool.
//!
//! Each partition is one task. Workers only read the shared [`ScanContext`]
//! and return their own result vectors, so nothing is locked. Results come
//! back in partition order; the first failing partition aborts the run.

use std::num::NonZeroUsize;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;
use tracing::debug;

use crate::genomics::{score, Disease, DnaSequence, MarkerPanel};

/// Errors raised while executing partitions.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] ThreadPoolBuildError),

    /// A disease-line could not be turned into a marker panel.
    #[error("chunk {chunk}, line {line}: {reason}")]
    MalformedLine {
        /// Partition index.
        chunk: usize,
        /// Line offset within the partition.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },
}

/// Read-only inputs shared by every worker.
#[derive(Debug, Clone)]
pub struct ScanContext {
    /// Sequence scanned for marker genes.
    pub sequence: DnaSequence,
    /// Minimum cumulative matched length for a gene to be present.
    pub threshold: usize,
}

impl ScanContext {
    /// Bundle the shared inputs.
    pub fn new(sequence: DnaSequence, threshold: usize) -> Self {
        Self {
            sequence,
            threshold,
        }
    }
}

/// Score every disease-line in one partition, preserving its order.
pub fn process_chunk<L: AsRef<str>>(
    chunk_index: usize,
    lines: &[L],
    context: &ScanContext,
) -> Result<Vec<Disease>, ExecutorError> {
    debug!(chunk = chunk_index, diseases = lines.len(), "scoring partition");

    lines
        .iter()
        .enumerate()
        .map(|(line_idx, line)| {
            let panel =
                MarkerPanel::parse(line.as_ref()).ok_or_else(|| ExecutorError::MalformedLine {
                    chunk: chunk_index,
                    line: line_idx,
                    reason: "missing disease code".to_string(),
                })?;
            let probability = score(context.sequence.as_str(), &panel.genes, context.threshold);
            Ok(panel.into_disease(probability))
        })
        .collect()
}

/// Fixed-size pool running one task per partition.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: ThreadPool,
    workers: NonZeroUsize,
}

impl ParallelExecutor {
    /// Build a dedicated pool with `workers` threads.
    pub fn new(workers: NonZeroUsize) -> Result<Self, ExecutorError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|idx| format!("genorank-worker-{idx}"))
            .build()?;
        Ok(Self { pool, workers })
    }

    /// Number of worker threads.
    pub fn workers(&self) -> NonZeroUsize {
        self.workers
    }

    /// Run [`process_chunk`] over every partition and wait for all of them.
    ///
    /// The outer vector is indexed by partition.
    pub fn execute<L>(
        &self,
        chunks: &[&[L]],
        context: &ScanContext,
    ) -> Result<Vec<Vec<Disease>>, ExecutorError>
    where
        L: AsRef<str> + Sync,
    {
        self.pool.install(|| {
            chunks
                .par_iter()
                .with_max_len(1)
                .enumerate()
                .map(|(idx, chunk)| process_chunk(idx, chunk, context))
                .collect()
        })
    }
}
