//! CLI argument definitions using clap
//!
//! Commands:
//! - phonebook serve [--config <path>] [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Phonebook - an in-memory HTTP store of phone companies
#[derive(Parser, Debug)]
#[command(name = "phonebook")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to a JSON configuration file (all fields optional)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
