//! Split command implementation

use crate::config::CliConfig;
use crate::input::{prompt_for_path, resolve_patterns};
use crate::output::{create_formatter, FormatOptions};
use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use textparse_core::{CommentStyle, SplitMode, TextDocument};

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); prompts on stdin when omitted
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Split into lines or words
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Comment handling in line mode
    #[arg(long, value_enum)]
    pub comments: Option<CommentsArg>,

    /// Prefix each line with its source line number
    #[arg(short = 'n', long)]
    pub line_numbers: bool,

    /// Strip leading spaces and tabs from each record
    #[arg(long)]
    pub skip_blanks: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// JSON array of records with offsets and line numbers
    Json,
}

/// Split modes accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeArg {
    /// Newline-delimited records
    Lines,
    /// Whitespace-delimited tokens
    Words,
}

impl From<ModeArg> for SplitMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lines => SplitMode::Lines,
            ModeArg::Words => SplitMode::Words,
        }
    }
}

/// Comment styles accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CommentsArg {
    /// First marker discards the rest of the file
    Buffer,
    /// Each marker discards the rest of its line
    Line,
    /// No comment handling
    Off,
}

impl From<CommentsArg> for CommentStyle {
    fn from(comments: CommentsArg) -> Self {
        match comments {
            CommentsArg::Buffer => CommentStyle::Buffer,
            CommentsArg::Line => CommentStyle::Line,
            CommentsArg::Off => CommentStyle::Off,
        }
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let split_config = config.split_config()?;

        let files = if self.input.is_empty() {
            let stdin = io::stdin();
            let path = prompt_for_path(&mut stdin.lock(), &mut io::stderr(), config.prompt.capacity)?;
            vec![path]
        } else {
            resolve_patterns(&self.input)?
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let options = FormatOptions {
            line_numbers: config.output.line_numbers,
        };
        let mut formatter = create_formatter(config.output.format, writer, options);

        for path in &files {
            log::info!(
                "Splitting {} into {} (comments: {})",
                path.display(),
                split_config.mode(),
                split_config.comments()
            );

            let doc = TextDocument::open(path, &split_config)
                .with_context(|| format!("Failed to split file: {}", path.display()))?;

            formatter.begin_document(&path.display().to_string())?;
            for record in doc.records() {
                let record = if config.output.skip_blanks {
                    record.skip_blanks()
                } else {
                    record
                };
                formatter.format_record(&record)?;
            }

            log::debug!("{}: {} records", path.display(), doc.len());
        }

        formatter.finish()
    }

    /// Configuration file values with command-line overrides applied
    pub fn effective_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.split.mode = mode.into();
        }
        if let Some(comments) = self.comments {
            config.split.comments = comments.into();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.output.line_numbers |= self.line_numbers;
        config.output.skip_blanks |= self.skip_blanks;

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running under tests.
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
