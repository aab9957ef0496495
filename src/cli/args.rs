//! Command line argument parsing for the gazetteer-index CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::schema::IndexField;

/// gazetteer-index - inspect the typed field schema of a gazetteer index
#[derive(Parser, Debug, Clone)]
#[command(name = "gazetteer-index")]
#[command(about = "Inspect the typed field schema of a gazetteer search index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GazetteerArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(
        short = 'f',
        long = "format",
        env = "GAZETTEER_INDEX_FORMAT",
        default_value = "human"
    )]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GazetteerArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List the fields of the gazetteer schema
    Fields,

    /// Decode fields of every document in a JSONL file
    Inspect(InspectArgs),

    /// Check documents in a JSONL file against the schema
    Check(CheckArgs),

    /// Print the index encoding of a boolean flag
    Bool(BoolArgs),
}

/// Arguments for decoding documents
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// JSONL file with one document per line
    #[arg(value_name = "FILE")]
    pub path: PathBuf,

    /// Field key to decode (repeatable; defaults to all stored fields)
    #[arg(long = "field", value_name = "KEY")]
    pub fields: Vec<IndexField>,
}

/// Arguments for checking documents
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// JSONL file with one document per line
    #[arg(value_name = "FILE")]
    pub path: PathBuf,
}

/// Arguments for the boolean encoding command
#[derive(Args, Debug, Clone)]
pub struct BoolArgs {
    /// Flag to encode (true or false)
    #[arg(value_name = "FLAG", action = clap::ArgAction::Set, value_parser = clap::value_parser!(bool))]
    pub flag: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
