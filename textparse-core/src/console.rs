//! Bounded line input for interactive prompts

use crate::error::{DocumentError, Result};
use std::io::{BufRead, ErrorKind};

/// One line read by [`read_line_bounded`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInput {
    /// Captured text, truncated to `capacity - 1` bytes
    pub text: String,
    /// Whether bytes were discarded because the line was too long
    pub overflowed: bool,
    capacity: usize,
}

impl LineInput {
    /// The captured text, or [`DocumentError::BufferOverflow`] if it was truncated
    pub fn into_text(self) -> Result<String> {
        if self.overflowed {
            return Err(DocumentError::BufferOverflow {
                capacity: self.capacity,
            });
        }
        Ok(self.text)
    }
}

/// Read one line of at most `capacity - 1` bytes
///
/// Bytes past the limit are discarded up to the newline, which is consumed
/// but not stored. End of input before a newline is
/// [`DocumentError::EndOfInput`]; a read error is [`DocumentError::Read`].
pub fn read_line_bounded<R: BufRead + ?Sized>(reader: &mut R, capacity: usize) -> Result<LineInput> {
    let limit = capacity.saturating_sub(1);
    let mut captured = Vec::with_capacity(limit);
    let mut overflowed = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(DocumentError::Read(e.to_string())),
        };
        if available.is_empty() {
            return Err(DocumentError::EndOfInput);
        }

        let (chunk, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (&available[..pos], true),
            None => (available, false),
        };

        let room = limit - captured.len();
        if chunk.len() > room {
            overflowed = true;
        }
        captured.extend_from_slice(&chunk[..chunk.len().min(room)]);

        let consumed = chunk.len() + usize::from(found_newline);
        reader.consume(consumed);

        if found_newline {
            break;
        }
    }

    Ok(LineInput {
        text: String::from_utf8_lossy(&captured).into_owned(),
        overflowed,
        capacity,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn test_reads_line_within_capacity() {
        let mut input = Cursor::new("notes.txt\nrest");
        let line = read_line_bounded(&mut input, 64).unwrap();
        assert_eq!(line.text, "notes.txt");
        assert!(!line.overflowed);

        // The remainder stays in the reader.
        let mut rest = String::new();
        std::io::Read::read_to_string(&mut input, &mut rest).unwrap();
        assert_eq!(rest, "rest");
    }

    #[test]
    fn test_capacity_minus_one_fits() {
        let mut input = Cursor::new("abcd\n");
        let line = read_line_bounded(&mut input, 5).unwrap();
        assert_eq!(line.text, "abcd");
        assert!(!line.overflowed);
        assert_eq!(line.into_text().unwrap(), "abcd");
    }

    #[test]
    fn test_overflow_truncates_and_discards() {
        let mut input = Cursor::new("abcdef\nnext\n");
        let line = read_line_bounded(&mut input, 5).unwrap();
        assert_eq!(line.text, "abcd");
        assert!(line.overflowed);
        assert_eq!(
            line.into_text(),
            Err(DocumentError::BufferOverflow { capacity: 5 })
        );

        let next = read_line_bounded(&mut input, 5).unwrap();
        assert_eq!(next.text, "next");
    }

    #[test]
    fn test_end_of_input_before_newline() {
        let mut input = Cursor::new("partial");
        assert_eq!(
            read_line_bounded(&mut input, 64),
            Err(DocumentError::EndOfInput)
        );

        let mut empty = Cursor::new("");
        assert_eq!(
            read_line_bounded(&mut empty, 64),
            Err(DocumentError::EndOfInput)
        );
    }

    #[test]
    fn test_empty_line() {
        let mut input = Cursor::new("\n");
        let line = read_line_bounded(&mut input, 8).unwrap();
        assert_eq!(line.text, "");
        assert!(!line.overflowed);
    }

    #[test]
    fn test_line_spanning_reader_chunks() {
        let mut input = BufReader::with_capacity(2, Cursor::new("abcdefgh\n"));
        let line = read_line_bounded(&mut input, 6).unwrap();
        assert_eq!(line.text, "abcde");
        assert!(line.overflowed);
    }

    #[test]
    fn test_zero_capacity() {
        let mut input = Cursor::new("x\n");
        let line = read_line_bounded(&mut input, 0).unwrap();
        assert_eq!(line.text, "");
        assert!(line.overflowed);
    }
}
