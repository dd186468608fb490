//! Error types for seqsample

use thiserror::Error;

/// Result type alias for seqsample operations
pub type Result<T> = std::result::Result<T, SampleError>;

/// Error types that can occur during a sampling run
///
/// Every variant is fatal: seqsample is a single-pass batch tool, so there is
/// no retry policy beyond "stop and report". The binary maps each variant to
/// its own exit code (see [`SampleError::exit_code`]).
#[derive(Debug, Error)]
pub enum SampleError {
    /// I/O error (unreadable input, unwritable output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input's first character identifies neither FASTA nor FASTQ
    #[error("cannot detect file format (not FASTA/FASTQ): {msg}")]
    FormatDetection {
        /// What was found instead of a format marker
        msg: String,
    },

    /// Malformed FASTQ record
    #[error("invalid FASTQ format at line {line}: {msg}")]
    InvalidFastq {
        /// Line number where the error occurred
        line: usize,
        /// Error message
        msg: String,
    },

    /// Malformed FASTA record
    #[error("invalid FASTA format at line {line}: {msg}")]
    InvalidFasta {
        /// Line number where the error occurred
        line: usize,
        /// Error message
        msg: String,
    },
}

impl SampleError {
    /// Process exit code for this error
    ///
    /// I/O failures exit 1, format detection failures exit 2, parse failures
    /// exit 3.
    pub fn exit_code(&self) -> i32 {
        match self {
            SampleError::Io(_) => 1,
            SampleError::FormatDetection { .. } => 2,
            SampleError::InvalidFastq { .. } | SampleError::InvalidFasta { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinct() {
        let io = SampleError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "x"));
        let fmt = SampleError::FormatDetection { msg: "x".into() };
        let parse = SampleError::InvalidFastq {
            line: 1,
            msg: "x".into(),
        };

        assert_eq!(io.exit_code(), 1);
        assert_eq!(fmt.exit_code(), 2);
        assert_eq!(parse.exit_code(), 3);
    }

    #[test]
    fn test_display_includes_line() {
        let err = SampleError::InvalidFasta {
            line: 7,
            msg: "record has no sequence".into(),
        };
        assert!(err.to_string().contains("line 7"));
    }
}
