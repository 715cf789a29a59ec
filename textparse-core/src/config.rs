//! Split configuration

use crate::error::{DocumentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default configuration constants
pub mod defaults {
    /// Byte that starts a comment in line mode
    pub const COMMENT_MARKER: u8 = b'#';
}

/// How the buffer is partitioned into records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Newline-delimited records with comment stripping and line numbers
    #[default]
    Lines,
    /// Whitespace-delimited tokens; quoted substrings are single tokens
    Words,
}

impl SplitMode {
    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SplitMode::Lines => "lines",
            SplitMode::Words => "words",
        }
    }
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comment handling in line mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStyle {
    /// The first marker anywhere in the buffer discards the rest of the buffer
    #[default]
    Buffer,
    /// Each marker discards the rest of its own physical line
    Line,
    /// Markers are ordinary bytes
    Off,
}

impl CommentStyle {
    /// Name used in configuration files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            CommentStyle::Buffer => "buffer",
            CommentStyle::Line => "line",
            CommentStyle::Off => "off",
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for loading a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitConfig {
    pub(crate) mode: SplitMode,
    pub(crate) comments: CommentStyle,
    pub(crate) comment_marker: u8,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            mode: SplitMode::default(),
            comments: CommentStyle::default(),
            comment_marker: defaults::COMMENT_MARKER,
        }
    }
}

impl SplitConfig {
    /// Line mode with default comment handling
    pub fn lines() -> Self {
        Self::default()
    }

    /// Word mode
    pub fn words() -> Self {
        Self {
            mode: SplitMode::Words,
            ..Self::default()
        }
    }

    /// Create a configuration builder
    pub fn builder() -> SplitConfigBuilder {
        SplitConfigBuilder::default()
    }

    /// Selected split mode
    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    /// Selected comment style (only consulted in line mode)
    pub fn comments(&self) -> CommentStyle {
        self.comments
    }

    /// Byte that starts a comment
    pub fn comment_marker(&self) -> u8 {
        self.comment_marker
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let marker = self.comment_marker;
        if matches!(marker, b'\n' | b'\r' | 0) {
            return Err(DocumentError::Config(format!(
                "comment marker {:?} is a line delimiter",
                marker as char
            )));
        }
        if !marker.is_ascii() {
            return Err(DocumentError::Config(
                "comment marker must be an ASCII byte".into(),
            ));
        }
        Ok(())
    }
}

/// Fluent builder for [`SplitConfig`]
#[derive(Debug, Default)]
pub struct SplitConfigBuilder {
    mode: Option<SplitMode>,
    comments: Option<CommentStyle>,
    comment_marker: Option<u8>,
}

impl SplitConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the split mode
    pub fn mode(mut self, mode: SplitMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the comment style
    pub fn comments(mut self, comments: CommentStyle) -> Self {
        self.comments = Some(comments);
        self
    }

    /// Set the comment marker byte
    pub fn comment_marker(mut self, marker: u8) -> Self {
        self.comment_marker = Some(marker);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<SplitConfig> {
        let mut config = SplitConfig::default();

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        if let Some(comments) = self.comments {
            config.comments = comments;
        }

        if let Some(marker) = self.comment_marker {
            config.comment_marker = marker;
        }

        config.validate()?;
        Ok(config)
    }
}
