//! Byte sources a document can be loaded from

use crate::error::{DocumentError, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A readable byte stream of known size
///
/// The size is queried before reading so the buffer can be reserved up
/// front; a source that delivers fewer bytes than announced is treated as
/// a read failure by [`BufferStore::load`](crate::BufferStore::load).
pub trait ByteSource {
    /// Number of bytes the source will deliver
    fn size(&self) -> io::Result<u64>;

    /// Append the entire content to `buf`, returning the number of bytes read
    fn read_all(&mut self, buf: &mut Vec<u8>) -> io::Result<usize>;

    /// Name used in diagnostics
    fn name(&self) -> &str;
}

/// File-backed source
#[derive(Debug)]
pub struct FileSource {
    file: File,
    path: PathBuf,
}

impl FileSource {
    /// Open a file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| DocumentError::Open {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { file, path })
    }

    /// Path the source was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileSource {
    fn size(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    fn read_all(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        self.file.read_to_end(buf)
    }

    fn name(&self) -> &str {
        self.path.to_str().unwrap_or("<non-utf8 path>")
    }
}

/// In-memory source
#[derive(Debug, Clone)]
pub struct MemorySource {
    bytes: Vec<u8>,
    name: String,
}

impl MemorySource {
    /// Create a source over owned bytes
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            name: "<memory>".to_string(),
        }
    }

    /// Set the name used in diagnostics
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ByteSource for MemorySource {
    fn size(&self) -> io::Result<u64> {
        Ok(self.bytes.len() as u64)
    }

    fn read_all(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let bytes = std::mem::take(&mut self.bytes);
        let read = bytes.len();
        if buf.is_empty() {
            *buf = bytes;
        } else {
            buf.extend_from_slice(&bytes);
        }
        Ok(read)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
