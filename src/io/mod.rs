//! I/O module: streaming parsers, compression, and the record writer
//!
//! Everything here works record-by-record with bounded buffers, so peak
//! memory stays constant regardless of input size.

pub mod compression;
mod fasta;
mod fastq;
mod sink;
mod stream;
mod writer;

pub use compression::{CompressedReader, CompressedWriter, DataSource, IO_BUFFER_SIZE};
pub use fasta::FastaStream;
pub use fastq::FastqStream;
pub use sink::DataSink;
pub use stream::RecordStream;
pub use writer::RecordWriter;
