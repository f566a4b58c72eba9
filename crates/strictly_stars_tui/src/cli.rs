//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_stars::TARGET_BOUND;

/// Strictly Stars: match the stars with numbers that add up.
#[derive(Parser, Debug)]
#[command(name = "strictly_stars")]
#[command(about = "Star-matching number puzzle", long_about = None)]
pub struct Cli {
    /// What to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal.
    Play {
        /// Config file (missing file means defaults).
        #[arg(short, long, default_value = "strictly_stars.toml")]
        config: PathBuf,

        /// Seed for target generation; overrides the config file.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Sample the target oracle and print weights and a histogram as JSON.
    Sample {
        /// Comma-separated numbers to draw subsets from.
        #[arg(long, value_delimiter = ',', required = true)]
        numbers: Vec<u32>,

        /// Largest target allowed.
        #[arg(long, default_value_t = TARGET_BOUND)]
        bound: u32,

        /// How many targets to draw.
        #[arg(long, default_value_t = 1000)]
        draws: usize,

        /// Seed for reproducible draws.
        #[arg(long)]
        seed: Option<u64>,
    },
}
