//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `export`: Collect gql`` literals into an Insomnia import file
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Project directory to scan for gql`` literals (overrides config file)
    #[arg(long, short = 'd')]
    pub directory: Option<PathBuf>,

    /// GraphQL endpoint used for every request (overrides config file)
    #[arg(long, short = 'u', env = "INSOMNIA_GQL_URL")]
    pub url: Option<String>,

    /// Export file to write (overrides config file)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Keep query text exactly as written instead of reformatting it
    #[arg(long)]
    pub no_format: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collect gql`` queries into an Insomnia import file
    Export(ExportArgs),
    /// Initialize a new .insomnia-gql.json configuration file
    Init,
}
