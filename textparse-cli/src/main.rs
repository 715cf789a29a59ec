//! textparse command-line entry point

use clap::Parser;
use textparse_cli::commands::{Commands, ListCommands};
use textparse_cli::config::CliConfig;
use textparse_cli::CliResult;

/// Split text files into lines or words
#[derive(Debug, Parser)]
#[command(name = "textparse", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Split(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                ListCommands::Modes => {
                    println!("lines  newline-delimited records with line numbers");
                    println!("words  whitespace-delimited tokens, \"quoted\" tokens kept whole");
                }
                ListCommands::Formats => {
                    println!("text   one record per line");
                    println!("json   array of records with offsets and line numbers");
                }
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", CliConfig::default().to_toml()?);
            Ok(())
        }
    }
}
