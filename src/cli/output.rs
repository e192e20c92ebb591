//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::config::TokenizerConfig;
use crate::analysis::token::Token;
use crate::cli::args::{KopisArgs, OutputFormat};
use crate::error::Result;

/// Result structure for `kopis list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizerList {
    pub tokenizers: Vec<String>,
}

/// Result structure for `kopis tokenize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub config: TokenizerConfig,
    pub tokens: Vec<Token>,
    pub duration_ms: f64,
}

/// Result structure for `kopis match`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResult {
    pub config: TokenizerConfig,
    pub matched: bool,
    pub query_terms: Vec<String>,
    pub missing_terms: Vec<String>,
}

/// Anything the CLI can print.
pub trait Report: Serialize {
    /// Write the human-readable form.
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()>;
}

impl Report for TokenizerList {
    fn write_human<W: Write>(&self, out: &mut W, _verbosity: u8) -> Result<()> {
        for name in &self.tokenizers {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }
}

impl Report for TokenizeResult {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        if verbosity > 0 {
            writeln!(out, "Tokenizer: {}", self.config)?;
            writeln!(out, "Tokens: {}", self.tokens.len())?;
        }
        if verbosity > 1 {
            writeln!(out, "Time: {:.3}ms", self.duration_ms)?;
        }
        if verbosity > 0 && !self.tokens.is_empty() {
            writeln!(out)?;
            writeln!(out, "{:>5}  {:>12}  text", "pos", "offsets")?;
        }

        for token in &self.tokens {
            let offsets = format!("{}..{}", token.start_offset, token.end_offset);
            writeln!(out, "{:>5}  {:>12}  {}", token.position, offsets, token.text)?;
        }
        Ok(())
    }
}

impl Report for MatchResult {
    fn write_human<W: Write>(&self, out: &mut W, verbosity: u8) -> Result<()> {
        if verbosity > 0 {
            writeln!(out, "Tokenizer: {}", self.config)?;
            writeln!(out, "Query terms: {}", self.query_terms.join(" "))?;
        }
        if self.matched {
            writeln!(out, "match")?;
        } else {
            writeln!(out, "no match")?;
            if verbosity > 0 && !self.missing_terms.is_empty() {
                writeln!(out, "Missing terms: {}", self.missing_terms.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Report, W: Write>(result: &T, args: &KopisArgs, out: &mut W) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => result.write_human(out, args.verbosity()),
        OutputFormat::Json => output_json(result, args.pretty, out),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, pretty: bool, out: &mut W) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}
