//! Record collection over a tokenized buffer

use crate::error::{DocumentError, Result};
use crate::tokenizer::TERMINATOR;

/// Half-open byte range of one record, with its source line in line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSpan {
    /// Offset of the first byte
    pub start: usize,
    /// Offset one past the last byte
    pub end: usize,
    /// 1-based source line, when line numbers are tracked
    pub line: Option<usize>,
}

impl RecordSpan {
    /// Create a span
    pub fn new(start: usize, end: usize, line: Option<usize>) -> Self {
        Self { start, end, line }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Collect the terminator-separated segments of `buf`
///
/// `expected` is the count reported by the tokenizer that produced `buf`;
/// any other number of segments is a [`DocumentError::RecordCountMismatch`].
pub fn collect(buf: &[u8], expected: usize) -> Result<Vec<RecordSpan>> {
    let mut spans = Vec::with_capacity(expected);
    let mut i = 0;

    loop {
        while i < buf.len() && buf[i] == TERMINATOR {
            i += 1;
        }
        if i >= buf.len() {
            break;
        }

        let start = i;
        while i < buf.len() && buf[i] != TERMINATOR {
            i += 1;
        }
        spans.push(RecordSpan::new(start, i, None));
    }

    if spans.len() != expected {
        return Err(DocumentError::RecordCountMismatch {
            expected,
            found: spans.len(),
        });
    }

    Ok(spans)
}

/// Attach line numbers to spans in order
pub(crate) fn attach_lines(spans: &mut [RecordSpan], lines: &[usize]) {
    debug_assert_eq!(spans.len(), lines.len());
    for (span, &line) in spans.iter_mut().zip(lines) {
        span.line = Some(line);
    }
}
