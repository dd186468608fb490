//! Common types used throughout seqsample

/// A sequence record in either FASTA or FASTQ form
///
/// The `quality` field is `Some` exactly when the record came from a FASTQ
/// source; its length equals the sequence length (enforced at parse time).
/// Records are created by the streaming parsers one at a time and consumed
/// immediately by the pipeline, so the full input is never held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Full record name (without the '>' or '@' marker), description included
    pub id: String,
    /// DNA/RNA sequence
    pub sequence: Vec<u8>,
    /// Quality scores (Phred+33), present for FASTQ records only
    pub quality: Option<Vec<u8>>,
}

impl Record {
    /// Create a FASTA record (no quality line)
    pub fn fasta(id: String, sequence: Vec<u8>) -> Self {
        Self {
            id,
            sequence,
            quality: None,
        }
    }

    /// Create a FASTQ record
    pub fn fastq(id: String, sequence: Vec<u8>, quality: Vec<u8>) -> Self {
        Self {
            id,
            sequence,
            quality: Some(quality),
        }
    }

    /// Sequence length in bases
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Check if the record has an empty sequence
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
