//! Format-dispatching record source
//!
//! Wraps the two streaming parsers behind one iterator so the pipeline can
//! pull records without caring which format was detected.

use crate::error::Result;
use crate::format::SequenceFormat;
use crate::io::compression::{CompressedReader, DataSource};
use crate::io::fasta::FastaStream;
use crate::io::fastq::FastqStream;
use crate::types::Record;

/// Lazy record source for a detected format
///
/// Like the underlying parsers, the stream is finite and non-restartable; a
/// second pass needs a fresh instance.
pub enum RecordStream {
    /// FASTA record source
    Fasta(FastaStream<CompressedReader>),
    /// FASTQ record source
    Fastq(FastqStream<CompressedReader>),
}

impl RecordStream {
    /// Open a record stream over a source, parsing under the given format
    pub fn open(source: &DataSource, format: SequenceFormat) -> Result<Self> {
        match format {
            SequenceFormat::Fasta => Ok(Self::Fasta(FastaStream::new(source)?)),
            SequenceFormat::Fastq => Ok(Self::Fastq(FastqStream::new(source)?)),
        }
    }
}

impl Iterator for RecordStream {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Fasta(stream) => stream.next(),
            Self::Fastq(stream) => stream.next(),
        }
    }
}
