//! Command line argument parsing for the Kopis CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::token_filter::DEFAULT_MAX_TOKEN_BYTES;

/// Kopis - inspect how text is tokenized for full-text search
#[derive(Parser, Debug, Clone)]
#[command(name = "kopis")]
#[command(about = "Tokenize text the way a full-text index sees it")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct KopisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl KopisArgs {
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
    /// List the available tokenizers
    List,

    /// Tokenize text and print the resulting tokens
    Tokenize(TokenizeArgs),

    /// Check whether every query term occurs in a value
    Match(MatchArgs),
}

/// Tokenizer selection shared by the commands that tokenize.
#[derive(Args, Debug, Clone)]
pub struct TokenizerArgs {
    /// Tokenizer name (see `kopis list`)
    #[arg(short = 't', long = "tokenizer", default_value = "default")]
    pub tokenizer: String,

    /// Tokenizer parameter as key=value (repeatable), e.g. -p min_gram=3
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Full tokenizer configuration as JSON, e.g. '{"type":"regex","pattern":","}'
    #[arg(long, value_name = "JSON", conflicts_with_all = ["tokenizer", "params"])]
    pub config_json: Option<String>,

    /// Directory holding compiled Lindera dictionaries (<DIR>/zh, <DIR>/ko, <DIR>/ja)
    #[arg(long, value_name = "DIR")]
    pub dictionary_dir: Option<PathBuf>,

    /// Drop tokens longer than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_TOKEN_BYTES)]
    pub max_token_bytes: usize,
}

/// Arguments for tokenizing text
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for matching a query against a value
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Query text
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Field value the query is matched against
    #[arg(value_name = "VALUE")]
    pub value: String,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
