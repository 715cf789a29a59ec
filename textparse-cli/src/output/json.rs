//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use textparse_core::Record;

/// JSON formatter - outputs records as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    current_file: String,
    records: Vec<RecordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct RecordData {
    /// Input file the record came from
    pub file: String,
    /// The record text
    pub text: String,
    /// Starting byte offset in the file
    pub offset: usize,
    /// Length of the record in bytes
    pub length: usize,
    /// Source line number (line mode only)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub line: Option<usize>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            current_file: String::new(),
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.current_file = name.to_string();
        Ok(())
    }

    fn format_record(&mut self, record: &Record<'_>) -> Result<()> {
        self.records.push(RecordData {
            file: self.current_file.clone(),
            text: record.to_str_lossy().into_owned(),
            offset: record.offset(),
            length: record.len(),
            line: record.line_number(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
