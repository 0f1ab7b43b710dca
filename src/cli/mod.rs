//! CLI Module
//!
//! Command-line interface for the pcmwave codec.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pcmwave - inspect and transform PCM WAVE files
#[derive(Parser, Debug)]
#[command(name = "pcmwave")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Reject files with wrong RIFF/WAVE/fmt tags or a non-PCM format
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print format details of a WAV file
    #[command(name = "info")]
    Info {
        /// Input WAV file
        input: PathBuf,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write each channel to its own mono file
    #[command(name = "split")]
    Split {
        /// Input WAV file
        input: PathBuf,

        /// Directory for the per-channel files
        #[arg(short, long)]
        out_dir: PathBuf,
    },

    /// Downmix to a single channel
    #[command(name = "mono")]
    Mono {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,
    },

    /// Cut a time range out of a file
    #[command(name = "extract")]
    Extract {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,

        /// Start offset in milliseconds
        #[arg(long, default_value_t = 0)]
        start_ms: usize,

        /// Length in milliseconds (clamped to the end of the file)
        #[arg(long)]
        length_ms: usize,
    },

    /// Change the declared bit depth
    #[command(name = "convert")]
    Convert {
        /// Input WAV file
        input: PathBuf,

        /// Output WAV file
        output: PathBuf,

        /// Target bit depth
        #[arg(short, long, value_enum)]
        bits: BitDepth,
    },
}

/// Bit depths the encoder can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BitDepth {
    /// Unsigned 8-bit samples
    #[value(name = "8")]
    Eight,
    /// Signed 16-bit samples
    #[value(name = "16")]
    Sixteen,
}

impl BitDepth {
    pub fn bits(self) -> u8 {
        match self {
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
        }
    }
}
