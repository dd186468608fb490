//! Output destinations for streaming writes
//!
//! `DataSink` is the write counterpart to `DataSource`: it names where
//! retained records go, while [`crate::io::CompressedWriter`] decides how
//! bytes get there (gzip for `.gz` paths, plain otherwise).

use std::path::{Path, PathBuf};

/// Output destination for streaming writes
#[derive(Debug, Clone)]
pub enum DataSink {
    /// Write to a local file path
    ///
    /// Compression is auto-detected from the extension: `.gz` produces gzip
    /// output, anything else is written uncompressed.
    Local(PathBuf),
}

impl DataSink {
    /// Create a sink from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self::Local(path.as_ref().to_path_buf())
    }

    /// Get the file extension of the sink path
    pub(crate) fn extension(&self) -> Option<&str> {
        match self {
            Self::Local(path) => path.extension().and_then(|s| s.to_str()),
        }
    }

    /// Check if this sink represents a compressed output
    pub fn is_compressed(&self) -> bool {
        matches!(self.extension(), Some("gz") | Some("gzip"))
    }
}
