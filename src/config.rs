//! Run configuration

use std::path::PathBuf;

/// Immutable configuration for one sampling run
///
/// Built by the CLI and passed by reference into the pipeline. Range
/// validation (percent in 0-100, non-negative length) happens at the CLI
/// boundary; the pipeline trusts these values.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input FASTA/FASTQ file (plain or gzip)
    pub input: PathBuf,
    /// Output file, created or truncated (gzip when the path ends in .gz)
    pub output: PathBuf,
    /// Requested sampling percentage, 0-100
    pub percent: f64,
    /// Minimum sequence length; records shorter than this are dropped
    pub min_len: usize,
    /// PRNG seed; 0 means non-deterministic (entropy) seeding
    pub seed: u64,
}

impl RunConfig {
    /// Per-record retention probability derived from the percentage
    pub fn probability(&self) -> f64 {
        self.percent / 100.0
    }
}
