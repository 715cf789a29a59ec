//! Plain text output formatter

use super::{FormatOptions, OutputFormatter};
use anyhow::Result;
use std::io::Write;
use textparse_core::Record;

/// Plain text formatter - outputs one record per line
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, FormatOptions::default())
    }

    /// Create a text formatter with explicit options
    pub fn with_options(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &Record<'_>) -> Result<()> {
        if self.options.line_numbers {
            if let Some(line) = record.line_number() {
                write!(self.writer, "{line}: ")?;
            }
        }
        record.write_to(&mut self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
