//! CLI command implementations

use clap::Subcommand;

pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into lines or words
    Split(split::SplitArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Print the default configuration file
    Config,
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available split modes
    Modes,

    /// List available output formats
    Formats,
}
