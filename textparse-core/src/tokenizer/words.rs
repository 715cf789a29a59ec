//! Whitespace tokenizer with quoted tokens

use super::{is_word_break, Tokenizer, TERMINATOR};
use crate::error::{DocumentError, Result};

const QUOTE: u8 = b'"';

/// Splits a buffer into words
///
/// Words are separated by runs of space, `\n` and `\r`. A `"..."` span is
/// one word with its inner whitespace kept; both quote bytes become
/// terminators. A NUL byte splits words everywhere, including between
/// quotes. Tabs are ordinary word bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSplitter;

impl WordSplitter {
    /// Create a word splitter
    pub fn new() -> Self {
        Self
    }

    /// Rewrite `buf` in place and return the number of words
    ///
    /// An opening quote without a closing one fails with
    /// [`DocumentError::MalformedInput`] at the opening quote's offset.
    pub fn split_words(&self, buf: &mut [u8]) -> Result<usize> {
        let mut count = 0;
        let mut i = 0;
        while i < buf.len() {
            let b = buf[i];
            if b == QUOTE {
                let open = i;
                buf[open] = TERMINATOR;
                let close = buf[open + 1..]
                    .iter()
                    .position(|&b| b == QUOTE)
                    .map(|rel| open + 1 + rel)
                    .ok_or(DocumentError::MalformedInput { offset: open })?;
                buf[close] = TERMINATOR;
                // Only non-empty runs are visible to the collector.
                count += buf[open + 1..close]
                    .split(|&b| b == TERMINATOR)
                    .filter(|run| !run.is_empty())
                    .count();
                i = close + 1;
            } else if is_word_break(b) {
                while i < buf.len() && is_word_break(buf[i]) {
                    buf[i] = TERMINATOR;
                    i += 1;
                }
            } else {
                while i < buf.len() && !is_word_break(buf[i]) && buf[i] != QUOTE {
                    i += 1;
                }
                count += 1;
            }
        }
        Ok(count)
    }
}

impl Tokenizer for WordSplitter {
    fn split(&self, buf: &mut [u8]) -> Result<usize> {
        self.split_words(buf)
    }

    fn name(&self) -> &'static str {
        "words"
    }
}

/// Split `buf` into words
pub fn split_words(buf: &mut [u8]) -> Result<usize> {
    WordSplitter.split_words(buf)
}
