//! Loaded documents and their records

use crate::buffer::BufferStore;
use crate::collector::{self, RecordSpan};
use crate::config::{SplitConfig, SplitMode};
use crate::error::Result;
use crate::line_index::LineNumberIndex;
use crate::source::{ByteSource, FileSource, MemorySource};
use crate::tokenizer::tokenizer_for;
use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

/// A whole file split into records
///
/// The document owns its buffer; records are views into it. Loading either
/// yields a complete document or an error, never a partial one. The
/// document is not modified after loading; [`TextDocument::clear`] or drop
/// releases the buffer and every record together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    buffer: BufferStore,
    spans: Vec<RecordSpan>,
    mode: SplitMode,
}

impl TextDocument {
    /// Load and split everything `source` delivers
    pub fn load<S: ByteSource + ?Sized>(source: &mut S, config: &SplitConfig) -> Result<Self> {
        config.validate()?;
        let buffer = BufferStore::load(source)?;
        log::debug!(
            "splitting {} ({} bytes) into {}",
            source.name(),
            buffer.len(),
            config.mode()
        );
        Self::split(buffer, config)
    }

    /// Open and load a file
    pub fn open(path: impl AsRef<Path>, config: &SplitConfig) -> Result<Self> {
        let mut source = FileSource::open(path)?;
        Self::load(&mut source, config)
    }

    /// Load bytes already in memory
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, config: &SplitConfig) -> Result<Self> {
        Self::load(&mut MemorySource::new(bytes), config)
    }

    fn split(mut buffer: BufferStore, config: &SplitConfig) -> Result<Self> {
        // Line numbers must come from the buffer before newlines are overwritten.
        let index = match config.mode() {
            SplitMode::Lines => Some(LineNumberIndex::build(buffer.as_bytes())),
            SplitMode::Words => None,
        };

        let tokenizer = tokenizer_for(config);
        let count = tokenizer.split(buffer.as_bytes_mut())?;
        let mut spans = collector::collect(buffer.as_bytes(), count)?;

        if let Some(index) = index {
            let lines = index.line_numbers(&spans);
            collector::attach_lines(&mut spans, &lines);
        }

        log::debug!("{} tokenizer produced {count} records", tokenizer.name());

        Ok(Self {
            buffer,
            spans,
            mode: config.mode(),
        })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether the document has no records
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Mode the document was split with
    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Size of the underlying buffer in bytes
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Record at `index`
    pub fn record(&self, index: usize) -> Option<Record<'_>> {
        self.spans.get(index).map(|span| self.view(span))
    }

    /// Records in buffer order
    pub fn records(&self) -> impl ExactSizeIterator<Item = Record<'_>> + '_ {
        self.spans.iter().map(move |span| self.view(span))
    }

    /// Source line of every record; empty in word mode
    pub fn line_numbers(&self) -> Vec<usize> {
        self.spans.iter().filter_map(|span| span.line).collect()
    }

    /// Byte ranges of the records
    pub fn spans(&self) -> &[RecordSpan] {
        &self.spans
    }

    /// Write each record followed by `\n`
    pub fn write_records<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        for record in self.records() {
            record.write_to(sink)?;
        }
        Ok(())
    }

    /// Release the buffer and all records
    ///
    /// Clearing an already empty document does nothing.
    pub fn clear(&mut self) {
        self.buffer.release();
        self.spans = Vec::new();
    }

    fn view(&self, span: &RecordSpan) -> Record<'_> {
        Record {
            text: &self.buffer.as_bytes()[span.start..span.end],
            offset: span.start,
            line: span.line,
        }
    }
}

/// Borrowed view of one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'d> {
    text: &'d [u8],
    offset: usize,
    line: Option<usize>,
}

impl<'d> Record<'d> {
    /// Raw bytes of the record
    pub fn as_bytes(&self) -> &'d [u8] {
        self.text
    }

    /// Text of the record, replacing invalid UTF-8
    pub fn to_str_lossy(&self) -> Cow<'d, str> {
        String::from_utf8_lossy(self.text)
    }

    /// Byte offset of the record within the buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the record has no bytes
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// 1-based source line, in line mode
    pub fn line_number(&self) -> Option<usize> {
        self.line
    }

    /// Write the record followed by `\n`
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.text)?;
        sink.write_all(b"\n")
    }

    /// The record without leading spaces and tabs
    pub fn skip_blanks(&self) -> Record<'d> {
        let skip = self
            .text
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        Record {
            text: &self.text[skip..],
            offset: self.offset + skip,
            line: self.line,
        }
    }
}
