//! CLI argument structures

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Compute and serve Collatz (Syracuse) sequences
#[derive(Parser, Debug)]
#[command(name = "syracuse")]
#[command(about = "syracuse - Compute and serve Collatz (Syracuse) sequences", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Address to bind (overrides configuration)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides configuration)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to configuration file (defaults to ./syracuse.toml when present)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },

    /// Print the sequence and statistics for one starting value
    #[command(allow_negative_numbers = true)]
    Sequence {
        /// Starting value (must be greater than 0)
        start_number: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the sequences for every value in an inclusive range
    #[command(allow_negative_numbers = true)]
    Batch {
        /// First starting value (at least 1)
        start: i64,

        /// Last starting value (at least start)
        end: i64,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
