//! textparse CLI library
//!
//! This library provides the command-line interface for splitting text
//! files into lines or words with the textparse core.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
