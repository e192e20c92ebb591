//! Command implementations for the Kopis CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::debug;
use serde_json::{Map, Value};

use crate::analysis::config::{RegistryConfig, TokenizerConfig, make_config};
use crate::analysis::registry::TokenizerRegistry;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{KopisError, Result};

/// Execute a CLI command, writing to standard output.
pub fn execute_command(args: KopisArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing to `out`.
pub fn execute_command_to<W: Write>(args: &KopisArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::List => list_tokenizers(args, out),
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, args, out),
        Command::Match(match_args) => match_text(match_args, args, out),
    }
}

/// Print every tokenizer name.
fn list_tokenizers<W: Write>(cli_args: &KopisArgs, out: &mut W) -> Result<()> {
    let registry = TokenizerRegistry::new();
    let result = TokenizerList {
        tokenizers: registry
            .list_available()
            .into_iter()
            .map(str::to_string)
            .collect(),
    };
    output_result(&result, cli_args, out)
}

/// Tokenize one text.
fn tokenize_text<W: Write>(args: &TokenizeArgs, cli_args: &KopisArgs, out: &mut W) -> Result<()> {
    let config = build_config(&args.tokenizer)?;
    let registry = build_registry(&args.tokenizer);

    let analyzer = registry.resolve(&config)?;
    let start = Instant::now();
    let tokens = analyzer.analyze_to_vec(&args.text);
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!("Tokenized {} bytes into {} tokens", args.text.len(), tokens.len());

    let result = TokenizeResult {
        config,
        tokens,
        duration_ms,
    };
    output_result(&result, cli_args, out)
}

/// Match a query against a value.
fn match_text<W: Write>(args: &MatchArgs, cli_args: &KopisArgs, out: &mut W) -> Result<()> {
    let config = build_config(&args.tokenizer)?;
    let registry = build_registry(&args.tokenizer);
    let analyzer = registry.resolve(&config)?;

    let value_terms = analyzer.term_set(&args.value);
    let mut query_terms: Vec<String> = analyzer.term_set(&args.query).into_iter().collect();
    query_terms.sort_unstable();
    let missing_terms = query_terms
        .iter()
        .filter(|term| !value_terms.contains(*term))
        .cloned()
        .collect();

    let result = MatchResult {
        matched: analyzer.matches_all(&args.query, &args.value),
        config,
        query_terms,
        missing_terms,
    };
    output_result(&result, cli_args, out)
}

/// Build the tokenizer configuration from the command line.
pub fn build_config(args: &TokenizerArgs) -> Result<TokenizerConfig> {
    if let Some(json) = &args.config_json {
        return TokenizerConfig::from_json(json);
    }

    let mut params = Map::new();
    for param in &args.params {
        let (key, value) = parse_param(param)?;
        params.insert(key, value);
    }
    make_config(&args.tokenizer, &params)
}

fn build_registry(args: &TokenizerArgs) -> TokenizerRegistry {
    let mut config = RegistryConfig::default().with_max_token_bytes(args.max_token_bytes);
    if let Some(dir) = &args.dictionary_dir {
        config = config.with_dictionary_dir(dir);
    }
    TokenizerRegistry::with_config(config)
}

/// Parse a `key=value` parameter.
///
/// The value is read as a JSON scalar when it is one (`3`, `true`,
/// `"quoted"`), and taken verbatim as a string otherwise.
pub fn parse_param(param: &str) -> Result<(String, Value)> {
    let (key, raw) = param
        .split_once('=')
        .ok_or_else(|| KopisError::config(format!("Parameter '{param}' is not key=value")))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(KopisError::config(format!("Parameter '{param}' has an empty key")));
    }

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    };
    Ok((key.to_string(), value))
}
