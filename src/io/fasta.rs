//! FASTA streaming parser
//!
//! Unlike FASTQ (fixed four lines per record), FASTA sequences may wrap
//! across any number of lines. The parser joins wrapped lines without
//! separators and holds only the current record in memory. The full header
//! text after '>' is kept as the record id, so writing a record back
//! reproduces the original header.

use crate::error::{Result, SampleError};
use crate::io::compression::{CompressedReader, DataSource};
use crate::types::Record;
use std::io::BufRead;

/// FASTA streaming parser
///
/// Lazy and non-restartable: construct a fresh stream for a second pass.
///
/// # Example
///
/// ```no_run
/// use seqsample::io::{DataSource, FastaStream};
///
/// # fn main() -> seqsample::Result<()> {
/// let source = DataSource::from_path("genome.fa.gz");
/// let stream = FastaStream::new(&source)?;
/// for record in stream {
///     let record = record?;
///     println!("{}: {} bp", record.id, record.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastaStream<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    finished: bool,
    /// Peek buffer for look-ahead (to detect the next record's header)
    next_header: Option<String>,
}

impl FastaStream<CompressedReader> {
    /// Create a FASTA stream from a data source (with gzip support)
    pub fn new(source: &DataSource) -> Result<Self> {
        let reader = CompressedReader::new(source)?;
        Ok(Self::from_reader(reader))
    }
}

impl<R: BufRead> FastaStream<R> {
    /// Create a FASTA stream from any buffered reader
    ///
    /// Useful for testing and in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(256),
            line_number: 0,
            finished: false,
            next_header: None,
        }
    }

    /// Read a single FASTA record
    fn read_record(&mut self) -> Result<Option<Record>> {
        if self.finished && self.next_header.is_none() {
            return Ok(None);
        }

        // Header line comes from the peek buffer or a fresh read; blank
        // lines before a header are skipped.
        let header = loop {
            if let Some(peeked) = self.next_header.take() {
                break peeked;
            }
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    self.finished = true;
                    return Ok(None);
                }
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim_end();
                    if !line.is_empty() {
                        break line.to_string();
                    }
                }
            }
        };

        if !header.starts_with('>') {
            return Err(SampleError::InvalidFasta {
                line: self.line_number,
                msg: format!("expected '>' at start of header, got: {}", header),
            });
        }

        let id = header[1..].to_string();

        // Sequence lines until the next header or EOF
        let mut sequence = Vec::new();

        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    self.finished = true;
                    break;
                }
                _ => {
                    self.line_number += 1;
                    let line = self.line_buffer.trim_end();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('>') {
                        // Start of the next record, save for the next pull
                        self.next_header = Some(line.to_string());
                        break;
                    }

                    sequence.extend_from_slice(line.as_bytes());
                }
            }
        }

        if sequence.is_empty() {
            return Err(SampleError::InvalidFasta {
                line: self.line_number,
                msg: "record has no sequence".to_string(),
            });
        }

        Ok(Some(Record::fasta(id, sequence)))
    }
}

impl<R: BufRead> Iterator for FastaStream<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
