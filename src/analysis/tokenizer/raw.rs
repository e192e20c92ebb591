//! Raw tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};

/// A tokenizer that treats the entire input as a single token.
///
/// Useful for identifiers and exact-match fields. The input is not trimmed;
/// an empty input yields no token. Overlong inputs are dropped later by the
/// filter pipeline, not here.
#[derive(Clone, Debug, Default)]
pub struct RawTokenizer;

impl RawTokenizer {
    /// Create a new raw tokenizer.
    pub fn new() -> Self {
        RawTokenizer
    }
}

impl Tokenizer for RawTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        if text.is_empty() {
            Box::new(std::iter::empty())
        } else {
            let token = Token::with_offsets(text, 0, 0, text.len());
            Box::new(std::iter::once(token))
        }
    }

    fn name(&self) -> &'static str {
        "raw"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_tokenizer() {
        let tokenizer = RawTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("Hello World").collect();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "Hello World");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 11);
    }

    #[test]
    fn test_raw_keeps_surrounding_whitespace() {
        let tokens: Vec<Token> = RawTokenizer::new().tokenize(" padded ").collect();
        assert_eq!(tokens[0].text, " padded ");
    }

    #[test]
    fn test_raw_tokenizer_empty() {
        let tokenizer = RawTokenizer::new();
        assert_eq!(tokenizer.tokenize("").count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RawTokenizer::new().name(), "raw");
    }
}
