//! In-place tokenizers
//!
//! A tokenizer rewrites every delimiter byte of a buffer to [`TERMINATOR`]
//! and reports how many records the remaining byte runs form. The buffer
//! length never changes, so offsets stay valid against the original bytes.

pub mod lines;
pub mod words;

pub use lines::{split_lines, LineSplitter};
pub use words::{split_words, WordSplitter};

use crate::config::{SplitConfig, SplitMode};
use crate::error::Result;

/// Byte written over delimiters
pub const TERMINATOR: u8 = 0;

/// Common interface of the line and word splitters
pub trait Tokenizer {
    /// Rewrite delimiters in `buf` and return the number of records
    fn split(&self, buf: &mut [u8]) -> Result<usize>;

    /// Short name for diagnostics
    fn name(&self) -> &'static str;
}

/// Tokenizer selected by the configured mode
pub fn tokenizer_for(config: &SplitConfig) -> Box<dyn Tokenizer> {
    match config.mode() {
        SplitMode::Lines => Box::new(LineSplitter::from_config(config)),
        SplitMode::Words => Box::new(WordSplitter::new()),
    }
}

/// Whether `b` separates lines
#[inline]
pub(crate) fn is_line_break(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | TERMINATOR)
}

/// Whether `b` separates words
#[inline]
pub(crate) fn is_word_break(b: u8) -> bool {
    matches!(b, b'\n' | b'\r' | b' ' | TERMINATOR)
}
