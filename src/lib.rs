//! # Marker-gene disease screening
//!
//! Estimates, for each disease in a panel, the probability that a DNA
//! sequence indicates it, and ranks the diseases by that probability.
//!
//! ## Pipeline
//!
//! 1. **Partition**: split the disease-lines into one contiguous chunk per worker
//! 2. **Execute**: score every chunk on a fixed-size pool, sharing the sequence read-only
//! 3. **Aggregate**: concatenate chunk results in chunk order (restores input order)
//! 4. **Rank**: stable sort by descending probability
//!
//! A gene is present when the summed length of its (possibly overlapping)
//! occurrences reaches the threshold. A disease's probability is the rounded
//! percentage of its genes that are present.
//!
//! ## Usage Example
//!
//! ```
//! use genorank::{parse_input, Screener, ScreeningConfig};
//! use std::num::NonZeroUsize;
//!
//! let input = parse_input("4\nACGTACGT\n1\nD1 _ ACGT CGTA\n")?;
//! let config = ScreeningConfig::with_workers(NonZeroUsize::new(2).unwrap());
//! let ranked = Screener::new(config)?.screen(&input)?;
//! assert_eq!(ranked[0].probability.percent(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod executor;   // Fixed-size worker pool
pub mod genomics;   // Data model, detection, scoring, file formats
pub mod partition;  // Contiguous near-equal chunks
pub mod ranking;    // Aggregation and stable ranking

// Re-exports for convenience
pub use executor::{ExecutorError, ParallelExecutor, ScanContext};
pub use genomics::{
    is_present, parse_input, read_input, score, Disease, DnaSequence, InputError, MarkerPanel,
    Probability, ScreeningInput,
};
pub use partition::partition;
pub use ranking::rank;

use std::num::NonZeroUsize;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

/// Configuration for a screening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreeningConfig {
    /// Number of parallel workers, and therefore of partitions.
    pub workers: NonZeroUsize,
}

impl ScreeningConfig {
    /// One worker per available execution unit (1 if unknown).
    pub fn from_available_parallelism() -> Self {
        let workers = std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
        Self { workers }
    }

    /// Explicit worker count.
    pub fn with_workers(workers: NonZeroUsize) -> Self {
        Self { workers }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self::from_available_parallelism()
    }
}

/// Errors that can occur during screening.
#[derive(Error, Debug)]
pub enum ScreeningError {
    /// Input could not be loaded.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A worker failed, so the ranking is incomplete.
    #[error("screening aborted: {0}")]
    Execution(#[from] ExecutorError),
}

/// Screening orchestrator.
///
/// Owns the worker pool; one screener can process any number of inputs.
#[derive(Debug)]
pub struct Screener {
    executor: ParallelExecutor,
    config: ScreeningConfig,
}

impl Screener {
    /// Create a screener and its worker pool.
    pub fn new(config: ScreeningConfig) -> Result<Self, ScreeningError> {
        Ok(Self {
            executor: ParallelExecutor::new(config.workers)?,
            config,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &ScreeningConfig {
        &self.config
    }

    /// Load an input file and screen it.
    pub fn screen_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Disease>, ScreeningError> {
        let input = read_input(path)?;
        self.screen(&input)
    }

    /// Score and rank every disease in `input`.
    ///
    /// Blocks until all partitions are done; any failing partition aborts the
    /// whole run.
    pub fn screen(&self, input: &ScreeningInput) -> Result<Vec<Disease>, ScreeningError> {
        let workers = self.executor.workers();
        info!(
            diseases = input.disease_lines.len(),
            workers = workers.get(),
            threshold = input.threshold,
            sequence_len = input.sequence.len(),
            "screening"
        );
        if input.sequence.is_empty() && !input.disease_lines.is_empty() {
            warn!("empty sequence, every disease scores 0%");
        }

        let chunks = partition(&input.disease_lines, workers);
        let context = ScanContext::new(input.sequence.clone(), input.threshold);
        let chunk_results = self.executor.execute(&chunks, &context)?;

        Ok(rank(chunk_results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workers(n: usize) -> ScreeningConfig {
        ScreeningConfig::with_workers(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn default_config_has_at_least_one_worker() {
        assert!(ScreeningConfig::default().workers.get() >= 1);
    }

    #[test]
    fn screens_single_disease() {
        let input = parse_input("4\nACGTACGT\n1\nD1 _ ACGT CGTA\n").unwrap();
        let ranked = Screener::new(workers(3)).unwrap().screen(&input).unwrap();
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].code, "D1");
        assert_eq!(ranked[0].probability, Probability::MAX);
    }

    #[test]
    fn screener_is_reusable() {
        let screener = Screener::new(workers(2)).unwrap();
        let first = parse_input("1\nAC\n1\nA _ A\n").unwrap();
        let second = parse_input("1\nAC\n1\nB _ G\n").unwrap();
        assert_eq!(screener.screen(&first).unwrap()[0].probability.percent(), 100);
        assert_eq!(screener.screen(&second).unwrap()[0].probability.percent(), 0);
        assert_eq!(screener.config().workers.get(), 2);
    }

    #[test]
    fn screen_file_maps_missing_file_to_input_error() {
        let screener = Screener::new(workers(1)).unwrap();
        let missing = std::env::temp_dir().join("genorank-no-such-input.txt");
        let err = screener.screen_file(&missing).unwrap_err();
        assert!(matches!(err, ScreeningError::Input(InputError::Io(_))));
    }

    #[test]
    fn screen_file_maps_malformed_file_to_input_error() {
        let path = std::env::temp_dir().join(format!("genorank-bad-{}.txt", std::process::id()));
        std::fs::write(&path, "4\nACGT\n2\nD1 _ ACGT\n").unwrap();
        let err = Screener::new(workers(2)).unwrap().screen_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(
            err,
            ScreeningError::Input(InputError::MissingDiseaseLines { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn screen_file_scores_loaded_panel() {
        let path = std::env::temp_dir().join(format!("genorank-ok-{}.txt", std::process::id()));
        std::fs::write(&path, "4\nACGTACGT\n1\nD1 _ ACGT CGTA\n").unwrap();
        let ranked = Screener::new(workers(2)).unwrap().screen_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(ranked[0].probability, Probability::MAX);
    }
}
