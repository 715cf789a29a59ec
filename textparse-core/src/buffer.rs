//! Owned byte buffer backing a document

use crate::error::{DocumentError, Result};
use crate::source::ByteSource;

/// Whole-file byte buffer
///
/// Loaded once from a [`ByteSource`]; tokenizers rewrite delimiters inside
/// it and records borrow slices of it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferStore {
    bytes: Vec<u8>,
}

impl BufferStore {
    /// Wrap bytes that are already in memory
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read an entire source into a new buffer
    ///
    /// The announced size is reserved before reading. A short read is a
    /// [`DocumentError::Read`].
    pub fn load<S: ByteSource + ?Sized>(source: &mut S) -> Result<Self> {
        let size = source.size().map_err(|e| {
            DocumentError::Read(format!("size query for {} failed: {e}", source.name()))
        })?;
        let size = usize::try_from(size)
            .map_err(|_| DocumentError::Allocation { requested: usize::MAX })?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(size)
            .map_err(|_| DocumentError::Allocation { requested: size })?;

        let read = source
            .read_all(&mut bytes)
            .map_err(|e| DocumentError::Read(format!("{}: {e}", source.name())))?;

        if read != size {
            return Err(DocumentError::Read(format!(
                "{}: expected {size} bytes, got {read}",
                source.name()
            )));
        }

        log::trace!("loaded {read} bytes from {}", source.name());
        Ok(Self { bytes })
    }

    /// Buffer length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read-only view of the buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Release the bytes, leaving an empty buffer
    pub(crate) fn release(&mut self) {
        self.bytes = Vec::new();
    }
}
