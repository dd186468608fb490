//! Input/output streams with transparent gzip handling
//!
//! Inputs are sniffed by magic bytes: a stream starting with the gzip magic
//! (31, 139) is decompressed on the fly, everything else passes through
//! untouched. Outputs pick compression from the destination extension
//! (`.gz` means gzip). Both directions are buffered so the record loop never
//! pays per-record syscall overhead.

use crate::error::Result;
use crate::io::DataSink;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Buffer size for file readers and writers (1 MB)
///
/// Large enough that long-read records (100 kb+) do not force a flush per
/// record, small enough to keep peak memory bounded.
pub const IO_BUFFER_SIZE: usize = 1024 * 1024;

/// Input source abstraction
///
/// Sources are cheap to clone and can be opened more than once. The pipeline
/// relies on this: format detection opens the source for a one-byte probe,
/// then the record stream reopens it from the start (decompression streams
/// cannot be rewound).
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Local file path
    Local(PathBuf),
}

impl DataSource {
    /// Create a local file data source
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        DataSource::Local(path.as_ref().to_path_buf())
    }

    /// Open the source and return a buffered reader over the raw bytes
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>> {
        match self {
            DataSource::Local(path) => {
                let file = File::open(path)?;
                Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, file)))
            }
        }
    }
}

/// Buffered reader with transparent gzip decompression
///
/// Peeks at the first two bytes of the underlying stream; gzip magic bytes
/// route through [`MultiGzDecoder`] (which also handles multi-member files
/// such as bgzip output), anything else passes through directly.
pub struct CompressedReader {
    inner: Box<dyn BufRead + Send>,
}

impl CompressedReader {
    /// Create a new reader from a data source
    pub fn new(source: &DataSource) -> Result<Self> {
        let mut reader = source.open()?;

        let first_bytes = {
            let peeked = reader.fill_buf()?;
            if peeked.len() >= 2 {
                [peeked[0], peeked[1]]
            } else if peeked.len() == 1 {
                [peeked[0], 0]
            } else {
                [0, 0]
            }
        };

        let is_gzipped = first_bytes[0] == 31 && first_bytes[1] == 139;

        if is_gzipped {
            let decoder = MultiGzDecoder::new(reader);
            Ok(Self {
                inner: Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, decoder)),
            })
        } else {
            Ok(Self { inner: reader })
        }
    }
}

impl Read for CompressedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl BufRead for CompressedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }

    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Buffered writer with optional gzip compression
///
/// Created from a [`DataSink`]; the `.gz` extension selects gzip output.
/// Always call [`CompressedWriter::finish`] on the success path: gzip streams
/// need a trailer, and `finish()` surfaces flush errors that `Drop` would
/// swallow.
pub enum CompressedWriter {
    /// Uncompressed writer with buffering
    Plain(Option<BufWriter<Box<dyn Write>>>),

    /// Gzip compressed writer
    Gzip(Option<GzEncoder<BufWriter<Box<dyn Write>>>>),
}

impl CompressedWriter {
    /// Create a writer for a data sink, truncating any existing file
    pub fn new(sink: &DataSink) -> io::Result<Self> {
        match sink {
            DataSink::Local(path) => {
                let file = File::create(path)?;
                if sink.is_compressed() {
                    Ok(Self::new_gzip(Box::new(file)))
                } else {
                    Ok(Self::new_plain(Box::new(file)))
                }
            }
        }
    }

    /// Create a plain (uncompressed) buffered writer
    pub fn new_plain(writer: Box<dyn Write>) -> Self {
        Self::Plain(Some(BufWriter::with_capacity(IO_BUFFER_SIZE, writer)))
    }

    /// Create a gzip compressed writer (default compression level)
    pub fn new_gzip(writer: Box<dyn Write>) -> Self {
        let encoder = GzEncoder::new(
            BufWriter::with_capacity(IO_BUFFER_SIZE, writer),
            Compression::default(),
        );
        Self::Gzip(Some(encoder))
    }

    /// Finish writing and consume the writer
    ///
    /// Flushes all buffered data and, for gzip, writes the stream trailer.
    pub fn finish(mut self) -> io::Result<()> {
        match &mut self {
            Self::Plain(w) => {
                if let Some(mut writer) = w.take() {
                    writer.flush()
                } else {
                    Ok(())
                }
            }
            Self::Gzip(w) => {
                if let Some(encoder) = w.take() {
                    let mut inner = encoder.finish()?;
                    inner.flush()
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl Write for CompressedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Plain(Some(w)) => w.write(buf),
            Self::Gzip(Some(w)) => w.write(buf),
            _ => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "write after finish()",
            )),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Plain(Some(w)) => w.flush(),
            Self::Gzip(Some(w)) => w.flush(),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::tempdir;

    #[test]
    fn test_plain_file_passthrough() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.fa");
        std::fs::write(&path, b">seq1\nACGT\n").unwrap();

        let source = DataSource::from_path(&path);
        let mut reader = CompressedReader::new(&source).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, ">seq1\nACGT\n");
    }

    #[test]
    fn test_gzip_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.fa.gz");

        let sink = DataSink::from_path(&path);
        let mut writer = CompressedWriter::new(&sink).unwrap();
        writer.write_all(b">seq1\nACGTACGT\n").unwrap();
        writer.finish().unwrap();

        // Raw bytes on disk must carry the gzip magic
        let raw = std::fs::read(&path).unwrap();
        assert_eq!(&raw[..2], &[31, 139]);

        let source = DataSource::from_path(&path);
        let mut reader = CompressedReader::new(&source).unwrap();
        let mut contents = String::new();
        reader.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, ">seq1\nACGTACGT\n");
    }

    #[test]
    fn test_empty_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.fa");
        std::fs::write(&path, b"").unwrap();

        let source = DataSource::from_path(&path);
        let mut reader = CompressedReader::new(&source).unwrap();
        let mut contents = Vec::new();
        reader.read_to_end(&mut contents).unwrap();
        assert!(contents.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = DataSource::from_path("/nonexistent/path/reads.fq");
        assert!(CompressedReader::new(&source).is_err());
    }

    #[test]
    fn test_source_reopens_from_start() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.fa");
        std::fs::write(&path, b">a\nAC\n").unwrap();

        let source = DataSource::from_path(&path);
        for _ in 0..2 {
            let mut reader = CompressedReader::new(&source).unwrap();
            let mut contents = String::new();
            reader.read_to_string(&mut contents).unwrap();
            assert_eq!(contents, ">a\nAC\n");
        }
    }
}
