//! Mapping from byte offsets to original source line numbers
//!
//! The index is built from the unmodified buffer, before a tokenizer turns
//! newline bytes into terminators. It records where each physical line
//! starts; a record's line number is then found from its start offset.
//!
//! Counting rules:
//! - Line numbers are 1-based.
//! - Only `\n` starts a new line. A `\r` is part of whatever line it sits on,
//!   so `\r\n` and `\n` endings number identically.
//! - An empty buffer has 0 lines; a non-empty buffer without `\n` has 1.

use crate::collector::RecordSpan;

/// Line-start table for one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineNumberIndex {
    /// Byte offset where each physical line begins; `line_starts[0] == 0`
    line_starts: Vec<usize>,
    len: usize,
}

impl LineNumberIndex {
    /// Build the index in a single pass over `original`
    pub fn build(original: &[u8]) -> Self {
        let mut line_starts = Vec::with_capacity(original.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(
            original
                .iter()
                .enumerate()
                .filter(|&(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );

        Self {
            line_starts,
            len: original.len(),
        }
    }

    /// Number of physical lines in the buffer
    pub fn line_count(&self) -> usize {
        if self.len == 0 {
            return 0;
        }
        // A trailing '\n' opens a start at `len` that holds no content.
        match self.line_starts.last() {
            Some(&last) if last == self.len => self.line_starts.len() - 1,
            _ => self.line_starts.len(),
        }
    }

    /// 1-based line number of the byte at `offset`
    pub fn line_of(&self, offset: usize) -> usize {
        // line_starts[0] == 0, so the partition point is at least 1.
        self.line_starts.partition_point(|&start| start <= offset)
    }

    /// Line number of each record, in record order
    pub fn line_numbers(&self, spans: &[RecordSpan]) -> Vec<usize> {
        spans.iter().map(|span| self.line_of(span.start)).collect()
    }
}

/// Line number of each record collected from `original`
///
/// `original` must be the buffer as it was before tokenization.
pub fn compute_line_numbers(original: &[u8], spans: &[RecordSpan]) -> Vec<usize> {
    LineNumberIndex::build(original).line_numbers(spans)
}
