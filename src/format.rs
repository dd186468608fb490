//! Sequence format classification
//!
//! The format is decided once per run from the first byte of decoded input
//! text ('>' for FASTA, '@' for FASTQ) and never changes afterwards: every
//! record in the run is parsed and written under this single format.

use crate::error::{Result, SampleError};
use crate::io::compression::{CompressedReader, DataSource};
use std::fmt;
use std::io::Read;

/// Input sequence format, detected from the first byte of the stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceFormat {
    /// FASTA: '>' headers, sequence possibly wrapped over multiple lines
    Fasta,
    /// FASTQ: '@' headers, fixed four lines per record
    Fastq,
}

impl fmt::Display for SequenceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceFormat::Fasta => write!(f, "FASTA"),
            SequenceFormat::Fastq => write!(f, "FASTQ"),
        }
    }
}

/// Detect the sequence format of an input source
///
/// Opens the source through the decompression layer, reads exactly one byte
/// and classifies it. The probe reader is dropped afterwards; decompression
/// streams cannot be rewound, so the caller must reopen the source for the
/// record pass.
///
/// # Errors
///
/// `FormatDetection` when the input is empty or starts with anything other
/// than '>' or '@'.
pub fn detect_format(source: &DataSource) -> Result<SequenceFormat> {
    let mut reader = CompressedReader::new(source)?;

    let mut first = [0u8; 1];
    let n = reader.read(&mut first)?;

    if n == 0 {
        return Err(SampleError::FormatDetection {
            msg: "input is empty".to_string(),
        });
    }

    match first[0] {
        b'>' => Ok(SequenceFormat::Fasta),
        b'@' => Ok(SequenceFormat::Fastq),
        other => Err(SampleError::FormatDetection {
            msg: format!("first character is {:?}", other as char),
        }),
    }
}
