//! In-place splitting of memory-resident text into records
//!
//! A file is read into one buffer, then a tokenizer rewrites the buffer's
//! delimiters to terminators so the remaining byte runs become records:
//! either non-empty lines (with comment stripping and original line numbers)
//! or words (with `"quoted phrases"` kept whole). Records are borrowed views
//! into the buffer owned by a [`TextDocument`].
//!
//! # Example
//!
//! ```rust
//! use textparse_core::{SplitConfig, TextDocument};
//!
//! let text = "first line\n\n\nsecond line # trailing comment\nignored";
//! let doc = TextDocument::from_bytes(text, &SplitConfig::lines()).unwrap();
//!
//! let lines: Vec<_> = doc.records().map(|r| r.to_str_lossy().into_owned()).collect();
//! assert_eq!(lines, vec!["first line", "second line "]);
//! assert_eq!(doc.line_numbers(), vec![1, 4]);
//!
//! let words = TextDocument::from_bytes("say \"hello world\"", &SplitConfig::words()).unwrap();
//! assert_eq!(words.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod buffer;
pub mod collector;
pub mod config;
pub mod console;
pub mod document;
pub mod error;
pub mod line_index;
pub mod source;
pub mod tokenizer;

pub use buffer::BufferStore;
pub use collector::{collect, RecordSpan};
pub use config::{CommentStyle, SplitConfig, SplitConfigBuilder, SplitMode};
pub use console::{read_line_bounded, LineInput};
pub use document::{Record, TextDocument};
pub use error::{DocumentError, Result};
pub use line_index::{compute_line_numbers, LineNumberIndex};
pub use source::{ByteSource, FileSource, MemorySource};
pub use tokenizer::{split_lines, split_words, LineSplitter, Tokenizer, WordSplitter};
