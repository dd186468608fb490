//! Run orchestration
//!
//! Single-threaded pull-based pipeline: detect the format once, then pull
//! records one at a time through the filter-sample stage and, on acceptance,
//! the writer. Peak memory is one record plus the I/O buffers. Any fatal
//! error aborts immediately; partial output already on disk stays there.

use crate::config::RunConfig;
use crate::error::Result;
use crate::format::{detect_format, SequenceFormat};
use crate::io::{DataSink, DataSource, RecordStream, RecordWriter};
use crate::sample::FilterSampler;
use crate::stats::RunStats;
use log::{debug, info};

/// Outcome of a successful run
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    /// Format detected from the input's first byte
    pub format: SequenceFormat,
    /// Final counter values
    pub stats: RunStats,
}

/// Execute one filter-and-subsample run
///
/// The format probe opens the input once for a single byte, then the record
/// stream reopens it from the start (gzip streams cannot rewind). The output
/// file is created up front and finalized only after the input is exhausted.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let source = DataSource::from_path(&config.input);
    let format = detect_format(&source)?;
    info!("detected {} input: {}", format, config.input.display());

    let stream = RecordStream::open(&source, format)?;

    let sink = DataSink::from_path(&config.output);
    let mut writer = RecordWriter::create(&sink, format)?;

    let mut sampler = FilterSampler::new(config.min_len, config.probability(), config.seed);
    let mut stats = RunStats::default();

    for record in stream {
        let record = record?;
        if sampler.retain(&record, &mut stats) {
            writer.write_record(&record)?;
        }
    }

    writer.finish()?;
    debug!(
        "run finished: {} read, {} passed length filter, {} retained",
        stats.total_reads, stats.passed_length_filter, stats.retained_reads
    );

    Ok(RunSummary { format, stats })
}
