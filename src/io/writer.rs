//! Format-preserving record writer
//!
//! Serializes retained records back into the detected input format and
//! appends them to a buffered (optionally gzip) output stream. FASTA records
//! are written as two lines with no sequence wrapping; FASTQ records as the
//! standard four lines.

use crate::error::{Result, SampleError};
use crate::format::SequenceFormat;
use crate::io::compression::CompressedWriter;
use crate::io::DataSink;
use crate::types::Record;
use std::io::Write;

/// Buffered writer emitting records in a fixed sequence format
pub struct RecordWriter {
    inner: CompressedWriter,
    format: SequenceFormat,
}

impl RecordWriter {
    /// Create a writer for a sink, truncating any existing file
    pub fn create(sink: &DataSink, format: SequenceFormat) -> Result<Self> {
        let inner = CompressedWriter::new(sink)?;
        Ok(Self { inner, format })
    }

    /// Create a writer over an in-memory buffer (tests)
    #[cfg(test)]
    pub(crate) fn from_writer(writer: Box<dyn Write>, format: SequenceFormat) -> Self {
        Self {
            inner: CompressedWriter::new_plain(writer),
            format,
        }
    }

    /// Append one record in the writer's format
    ///
    /// A FASTQ writer handed a record without quality scores is a logic
    /// error upstream (the stream and writer share one detected format), so
    /// it is surfaced as an invalid-format error rather than panicking.
    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        match self.format {
            SequenceFormat::Fasta => {
                self.inner.write_all(b">")?;
                self.inner.write_all(record.id.as_bytes())?;
                self.inner.write_all(b"\n")?;
                self.inner.write_all(&record.sequence)?;
                self.inner.write_all(b"\n")?;
            }
            SequenceFormat::Fastq => {
                let quality =
                    record
                        .quality
                        .as_deref()
                        .ok_or_else(|| SampleError::InvalidFastq {
                            line: 0,
                            msg: format!("record '{}' has no quality scores", record.id),
                        })?;
                self.inner.write_all(b"@")?;
                self.inner.write_all(record.id.as_bytes())?;
                self.inner.write_all(b"\n")?;
                self.inner.write_all(&record.sequence)?;
                self.inner.write_all(b"\n+\n")?;
                self.inner.write_all(quality)?;
                self.inner.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Flush and finalize the output stream
    ///
    /// Must be called on the success path; gzip output is incomplete without
    /// its trailer.
    pub fn finish(self) -> Result<()> {
        self.inner.finish()?;
        Ok(())
    }
}
