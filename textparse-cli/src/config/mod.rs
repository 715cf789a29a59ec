//! Configuration module

use crate::commands::split::OutputFormat;
use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use textparse_core::{CommentStyle, SplitConfig, SplitMode};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Splitting configuration
    #[serde(default)]
    pub split: SplitSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Interactive prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Splitting-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SplitSection {
    /// Default split mode
    pub mode: SplitMode,

    /// Comment handling in line mode
    pub comments: CommentStyle,

    /// Character that starts a comment
    pub comment_marker: char,
}

impl Default for SplitSection {
    fn default() -> Self {
        Self {
            mode: SplitMode::Lines,
            comments: CommentStyle::Buffer,
            comment_marker: '#',
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Prefix text records with their source line number
    pub line_numbers: bool,

    /// Strip leading spaces and tabs from each record
    pub skip_blanks: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            line_numbers: false,
            skip_blanks: false,
        }
    }
}

/// Interactive prompt configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    /// Size of the file-name buffer, including the terminator slot
    pub capacity: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        if config.prompt.capacity < 2 {
            return Err(CliError::ConfigError(
                "prompt.capacity must be at least 2".to_string(),
            )
            .into());
        }
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }

    /// Core split configuration from the `[split]` section
    pub fn split_config(&self) -> Result<SplitConfig> {
        let marker = u8::try_from(self.split.comment_marker).map_err(|_| {
            CliError::ConfigError(format!(
                "comment marker {:?} does not fit in one byte",
                self.split.comment_marker
            ))
        })?;

        SplitConfig::builder()
            .mode(self.split.mode)
            .comments(self.split.comments)
            .comment_marker(marker)
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
