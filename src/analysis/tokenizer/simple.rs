//! Simple tokenizer implementation, registered as `default`.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that emits maximal runs of alphanumeric characters.
///
/// Whitespace and punctuation both act as boundaries and are discarded, so a
/// punctuation character is never absorbed into an adjacent word.
///
/// # Examples
///
/// ```
/// use kopis::analysis::tokenizer::Tokenizer;
/// use kopis::analysis::tokenizer::simple::SimpleTokenizer;
///
/// let tokens: Vec<_> = SimpleTokenizer::new()
///     .tokenize("it's (very) fast!")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["it", "s", "very", "fast"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a new simple tokenizer.
    pub fn new() -> Self {
        SimpleTokenizer
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = runs(text, char::is_alphanumeric)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| Token::from_span(text, position, start, end))
            .collect();

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

/// Byte spans of the maximal runs of characters accepted by `keep`.
pub(crate) fn runs<F>(text: &str, keep: F) -> Vec<(usize, usize)>
where
    F: Fn(char) -> bool,
{
    let mut spans = Vec::new();
    let mut start = None;

    for (offset, c) in text.char_indices() {
        match (keep(c), start) {
            (false, Some(begin)) => {
                spans.push((begin, offset));
                start = None;
            }
            (true, None) => start = Some(offset),
            _ => {}
        }
    }
    if let Some(begin) = start {
        spans.push((begin, text.len()));
    }

    spans
}
