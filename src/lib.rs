//! seqsample: streaming length-filter and random subsampler for FASTA/FASTQ
//!
//! # Overview
//!
//! seqsample shrinks large sequencing datasets to a manageable, representative
//! size: it streams records from a FASTA or FASTQ file, keeps those meeting a
//! minimum length, retains each survivor with an independent per-record
//! probability, and writes the result back in the original format.
//!
//! ## Key properties
//!
//! - **Streaming**: one record in memory at a time, constant footprint
//! - **Format-preserving**: input format is detected once and kept on output
//! - **Reproducible**: a fixed non-zero seed makes runs byte-identical
//! - **Transparent gzip**: `.gz` inputs and outputs handled automatically
//!
//! ## Quick start
//!
//! ```no_run
//! use seqsample::{run, RunConfig};
//!
//! # fn main() -> seqsample::Result<()> {
//! let config = RunConfig {
//!     input: "reads.fq.gz".into(),
//!     output: "sampled.fq.gz".into(),
//!     percent: 10.0,
//!     min_len: 10_000,
//!     seed: 42,
//! };
//!
//! let summary = run(&config)?;
//! println!("{} of {} reads retained", summary.stats.retained_reads, summary.stats.total_reads);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - [`io`]: streaming parsers, gzip handling, record writer
//! - [`format`]: first-byte format detection
//! - [`sample`]: length filter + Bernoulli sampling stage
//! - [`stats`]: run counters and the end-of-run report
//! - [`pipeline`]: orchestration of one run

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod pipeline;
pub mod sample;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use config::RunConfig;
pub use error::{Result, SampleError};
pub use format::{detect_format, SequenceFormat};
pub use pipeline::{run, RunSummary};
pub use sample::FilterSampler;
pub use stats::{render_report, RunStats};
pub use types::Record;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
