//! Newline tokenizer with comment stripping

use super::{is_line_break, Tokenizer, TERMINATOR};
use crate::config::{defaults, CommentStyle, SplitConfig};
use crate::error::Result;

/// Splits a buffer into non-empty lines
///
/// Comments are cut before splitting. Runs of `\n`/`\r` collapse, so blank
/// lines never become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSplitter {
    comments: CommentStyle,
    marker: u8,
}

impl Default for LineSplitter {
    fn default() -> Self {
        Self {
            comments: CommentStyle::default(),
            marker: defaults::COMMENT_MARKER,
        }
    }
}

impl LineSplitter {
    /// Splitter with whole-buffer `#` comments
    pub fn new() -> Self {
        Self::default()
    }

    /// Splitter using the comment settings of `config`
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            comments: config.comments(),
            marker: config.comment_marker(),
        }
    }

    /// Rewrite `buf` in place and return the number of lines
    pub fn split_lines(&self, buf: &mut [u8]) -> usize {
        self.strip_comments(buf);

        let mut count = 0;
        let mut i = 0;
        while i < buf.len() {
            if is_line_break(buf[i]) {
                while i < buf.len() && is_line_break(buf[i]) {
                    buf[i] = TERMINATOR;
                    i += 1;
                }
            } else {
                while i < buf.len() && !is_line_break(buf[i]) {
                    i += 1;
                }
                count += 1;
            }
        }
        count
    }

    fn strip_comments(&self, buf: &mut [u8]) {
        match self.comments {
            CommentStyle::Off => {}
            CommentStyle::Buffer => {
                if let Some(pos) = buf.iter().position(|&b| b == self.marker) {
                    buf[pos..].fill(TERMINATOR);
                }
            }
            CommentStyle::Line => {
                let mut i = 0;
                while i < buf.len() {
                    if buf[i] == self.marker {
                        while i < buf.len() && !matches!(buf[i], b'\n' | b'\r') {
                            buf[i] = TERMINATOR;
                            i += 1;
                        }
                    } else {
                        i += 1;
                    }
                }
            }
        }
    }
}

impl Tokenizer for LineSplitter {
    fn split(&self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.split_lines(buf))
    }

    fn name(&self) -> &'static str {
        "lines"
    }
}

/// Split `buf` into lines with the default `#` whole-buffer comment cut
pub fn split_lines(buf: &mut [u8]) -> usize {
    LineSplitter::new().split_lines(buf)
}
