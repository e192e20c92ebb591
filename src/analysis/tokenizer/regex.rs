//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{KopisError, Result};

/// A tokenizer whose pattern matches *separators*.
///
/// Each maximal run of text not matched by the pattern becomes one token, left
/// to right. Patterns that can match the empty string are rejected at
/// construction time, since they would split between every character.
///
/// # Examples
///
/// ```
/// use kopis::analysis::tokenizer::Tokenizer;
/// use kopis::analysis::tokenizer::regex::RegexTokenizer;
///
/// let tokenizer = RegexTokenizer::new(r"\W+").unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("a,b;c").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The compiled separator pattern
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer splitting on `pattern`.
    pub fn new(pattern: &str) -> Result<Self> {
        validate_pattern(pattern)?;
        let regex = Regex::new(pattern)
            .map_err(|e| KopisError::config(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Reject patterns that fail to parse or can match a zero-length span.
pub fn validate_pattern(pattern: &str) -> Result<()> {
    let hir = regex_syntax::Parser::new()
        .parse(pattern)
        .map_err(|e| KopisError::config(format!("Invalid regex pattern: {e}")))?;

    match hir.properties().minimum_len() {
        Some(len) if len > 0 => Ok(()),
        Some(_) => Err(KopisError::config(format!(
            "Regex pattern '{pattern}' can match an empty string"
        ))),
        None => Err(KopisError::config(format!(
            "Regex pattern '{pattern}' can never match"
        ))),
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::from_span(text, tokens.len(), last_end, mat.start()));
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(Token::from_span(text, tokens.len(), last_end, text.len()));
        }

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
