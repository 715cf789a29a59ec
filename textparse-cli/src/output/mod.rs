//! Output formatting module

use crate::commands::split::OutputFormat;
use anyhow::Result;
use std::io::Write;
use textparse_core::Record;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Called before the records of each input file
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single record
    fn format_record(&mut self, record: &Record<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Formatting switches shared by all formatters
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Prefix text records with their source line number
    pub line_numbers: bool,
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    options: FormatOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_options(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
    }
}
