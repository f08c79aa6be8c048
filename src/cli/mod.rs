//! Command-line interface definitions.

pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Audio splicing, mixing and WAV export
#[derive(Parser, Debug)]
#[command(name = "mixdown-cli", version, about)]
pub struct Cli {
    /// Session sample rate in Hz; every input must match it
    #[arg(long, global = true, default_value_t = 44100)]
    pub sample_rate: u32,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mix inputs by additive sum into one mono WAV
    Merge {
        /// Input WAV files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,

        /// Output duration in seconds (default: longest input)
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Lay inputs end-to-end into one mono WAV
    Concat {
        /// Input WAV files, joined in argument order
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,

        /// Truncate the result to this many seconds
        #[arg(short, long)]
        duration: Option<f64>,
    },

    /// Extract a sample range from one input into a mono WAV
    Slice {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,

        /// Start sample position; negative wraps from the end
        #[arg(long, allow_hyphen_values = true)]
        start: Option<i64>,

        /// End sample position; negative wraps from the end
        #[arg(long, allow_hyphen_values = true)]
        end: Option<i64>,

        /// Output duration in seconds
        #[arg(short, long)]
        duration: f64,
    },
}
