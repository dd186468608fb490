//! FASTQ streaming parser
//!
//! Yields one [`Record`] per four input lines, reusing its line buffers so
//! memory stays constant regardless of file size. Any structural defect
//! (truncated record, missing '@' or '+' marker, sequence/quality length
//! mismatch) is fatal and carries the offending line number.

use crate::error::{Result, SampleError};
use crate::io::compression::{CompressedReader, DataSource};
use crate::types::Record;
use std::io::BufRead;

/// FASTQ streaming parser
///
/// Lazy and non-restartable: construct a fresh stream for a second pass.
///
/// # Example
///
/// ```no_run
/// use seqsample::io::{DataSource, FastqStream};
///
/// # fn main() -> seqsample::Result<()> {
/// let source = DataSource::from_path("reads.fq.gz");
/// let stream = FastqStream::new(&source)?;
///
/// for record in stream {
///     let record = record?;
///     // Process one record at a time (constant memory)
/// }
/// # Ok(())
/// # }
/// ```
pub struct FastqStream<R: BufRead> {
    reader: R,
    line1: String,
    line2: String,
    line3: String,
    line4: String,
    line_number: usize,
}

impl FastqStream<CompressedReader> {
    /// Create a FASTQ stream from a data source (with gzip support)
    pub fn new(source: &DataSource) -> Result<Self> {
        let reader = CompressedReader::new(source)?;
        Ok(Self::from_reader(reader))
    }
}

impl<R: BufRead> FastqStream<R> {
    /// Create a FASTQ stream from any buffered reader
    ///
    /// Useful for testing and in-memory sources.
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader,
            line1: String::with_capacity(256),
            line2: String::with_capacity(256),
            line3: String::with_capacity(256),
            line4: String::with_capacity(256),
            line_number: 0,
        }
    }

    /// Read one FASTQ record from the reader
    fn read_record(&mut self) -> Result<Option<Record>> {
        self.line1.clear();
        self.line2.clear();
        self.line3.clear();
        self.line4.clear();

        let n1 = self.reader.read_line(&mut self.line1)?;
        if n1 == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        let n2 = self.reader.read_line(&mut self.line2)?;
        if n2 == 0 {
            return Err(SampleError::InvalidFastq {
                line: self.line_number,
                msg: "unexpected end of file after header".to_string(),
            });
        }
        self.line_number += 1;

        let n3 = self.reader.read_line(&mut self.line3)?;
        if n3 == 0 {
            return Err(SampleError::InvalidFastq {
                line: self.line_number,
                msg: "unexpected end of file after sequence".to_string(),
            });
        }
        self.line_number += 1;

        let n4 = self.reader.read_line(&mut self.line4)?;
        if n4 == 0 {
            return Err(SampleError::InvalidFastq {
                line: self.line_number,
                msg: "unexpected end of file after separator".to_string(),
            });
        }
        self.line_number += 1;

        if !self.line1.starts_with('@') {
            let found = self.line1.chars().next().unwrap_or_default();
            return Err(SampleError::InvalidFastq {
                line: self.line_number - 3,
                msg: format!("expected '@' at start of header, got: {:?}", found),
            });
        }

        if !self.line3.starts_with('+') {
            let found = self.line3.chars().next().unwrap_or_default();
            return Err(SampleError::InvalidFastq {
                line: self.line_number - 1,
                msg: format!("expected '+' at start of separator, got: {:?}", found),
            });
        }

        let id = self.line1[1..].trim_end().to_string();
        let sequence = self.line2.trim_end().as_bytes().to_vec();
        let quality = self.line4.trim_end().as_bytes().to_vec();

        if sequence.len() != quality.len() {
            return Err(SampleError::InvalidFastq {
                line: self.line_number,
                msg: format!(
                    "sequence length ({}) != quality length ({})",
                    sequence.len(),
                    quality.len()
                ),
            });
        }

        Ok(Some(Record::fastq(id, sequence, quality)))
    }
}

impl<R: BufRead> Iterator for FastqStream<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn test_parse_valid_fastq() {
        let data = b"@SEQ_ID\nGATTACA\n+\n!!!!!!!\n";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let record = stream.next().unwrap().unwrap();
        assert_eq!(record.id, "SEQ_ID");
        assert_eq!(record.sequence, b"GATTACA");
        assert_eq!(record.quality.as_deref(), Some(&b"!!!!!!!"[..]));
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_parse_multiple_records() {
        let data = b"@SEQ1\nGAT\n+\n!!!\n@SEQ2\nTACA\n+\n!!!!\n";
        let stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let records: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "SEQ1");
        assert_eq!(records[1].id, "SEQ2");
    }

    #[test]
    fn test_header_description_preserved() {
        let data = b"@read1 runid=abc ch=42\nACGT\n+\nIIII\n";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let record = stream.next().unwrap().unwrap();
        assert_eq!(record.id, "read1 runid=abc ch=42");
    }

    #[test]
    fn test_invalid_header() {
        let data = b"SEQ_ID\nGATTACA\n+\n!!!!!!!\n";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let result = stream.next().unwrap();
        assert!(matches!(result, Err(SampleError::InvalidFastq { .. })));
    }

    #[test]
    fn test_invalid_header_multibyte_first_char() {
        // Header starting with a multibyte UTF-8 character must surface as a
        // parse error, not a char-boundary panic while building the message
        let data = "ér1\nACGT\n+\nIIII\n".as_bytes();
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let result = stream.next().unwrap();
        assert!(matches!(result, Err(SampleError::InvalidFastq { .. })));
    }

    #[test]
    fn test_invalid_separator_multibyte_first_char() {
        let data = "@r1\nACGT\né\nIIII\n".as_bytes();
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let result = stream.next().unwrap();
        assert!(matches!(result, Err(SampleError::InvalidFastq { .. })));
    }

    #[test]
    fn test_truncated_record() {
        let data = b"@SEQ1\nGATTACA\n";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let result = stream.next().unwrap();
        assert!(matches!(result, Err(SampleError::InvalidFastq { .. })));
    }

    #[test]
    fn test_length_mismatch() {
        let data = b"@SEQ1\nGATTACA\n+\n!!!\n";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));

        let result = stream.next().unwrap();
        assert!(matches!(result, Err(SampleError::InvalidFastq { .. })));
    }

    #[test]
    fn test_empty_input() {
        let data = b"";
        let mut stream = FastqStream::from_reader(BufReader::new(Cursor::new(data)));
        assert!(stream.next().is_none());
    }

    // Property-based tests
    use proptest::prelude::*;

    proptest! {
        /// Valid FASTQ records parse back to their components
        #[test]
        fn test_fastq_roundtrip(
            id in "[A-Za-z0-9_]{1,50}",
            seq in "[ACGTN]{1,500}",
        ) {
            let qual = "I".repeat(seq.len());
            let fastq = format!("@{}\n{}\n+\n{}\n", id, seq, qual);

            let stream = FastqStream::from_reader(BufReader::new(Cursor::new(fastq.into_bytes())));
            let records: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();

            prop_assert_eq!(records.len(), 1);
            prop_assert_eq!(&records[0].id, &id);
            prop_assert_eq!(&records[0].sequence, seq.as_bytes());
            prop_assert_eq!(records[0].quality.as_deref(), Some(qual.as_bytes()));
        }

        /// Mismatched sequence and quality lengths are rejected
        #[test]
        fn test_fastq_rejects_length_mismatch(
            id in "[A-Za-z0-9_]{1,50}",
            seq in "[ACGT]{10,20}",
            qual_len in 21..30usize,
        ) {
            let qual = "I".repeat(qual_len);
            let fastq = format!("@{}\n{}\n+\n{}\n", id, seq, qual);

            let stream = FastqStream::from_reader(BufReader::new(Cursor::new(fastq.into_bytes())));
            let result: Result<Vec<_>> = stream.collect();

            prop_assert!(result.is_err());
        }

        /// Multiple valid records parse in order
        #[test]
        fn test_fastq_multiple_records(
            records_count in 1..10usize,
        ) {
            let mut fastq = String::new();
            for i in 0..records_count {
                let seq = "ACGT".repeat(10);
                let qual = "I".repeat(40);
                fastq.push_str(&format!("@read_{}\n{}\n+\n{}\n", i, seq, qual));
            }

            let stream = FastqStream::from_reader(BufReader::new(Cursor::new(fastq.into_bytes())));
            let records: Vec<_> = stream.collect::<Result<Vec<_>>>().unwrap();

            prop_assert_eq!(records.len(), records_count);
            for (i, record) in records.iter().enumerate() {
                prop_assert_eq!(&record.id, &format!("read_{}", i));
            }
        }
    }
}
