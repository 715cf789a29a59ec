//! Interactive file-name prompt

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use textparse_core::{read_line_bounded, DocumentError};

/// Ask for a file name and read it with a bounded buffer
///
/// `capacity` counts the terminator slot, so names of up to `capacity - 1`
/// bytes are accepted. Longer names, end of input and blank answers are
/// [`CliError::InputError`]s.
pub fn prompt_for_path<R, W>(reader: &mut R, prompt: &mut W, capacity: usize) -> Result<PathBuf>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    write!(prompt, "Enter file name: ").context("Failed to write prompt")?;
    prompt.flush().context("Failed to write prompt")?;

    let line = read_line_bounded(reader, capacity).map_err(|e| match e {
        DocumentError::EndOfInput => CliError::InputError("no file name given".to_string()),
        other => CliError::InputError(other.to_string()),
    })?;

    let name = line
        .into_text()
        .map_err(|e| CliError::InputError(format!("file name rejected: {e}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InputError("no file name given".to_string()).into());
    }

    Ok(PathBuf::from(name))
}
