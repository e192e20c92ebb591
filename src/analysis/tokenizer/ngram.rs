//! N-gram tokenizer implementation.

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::{KopisError, Result};

/// A tokenizer that generates character n-grams over the whole input.
///
/// Gram lengths are counted in characters, so offsets always fall on UTF-8
/// boundaries. Tokens are generated grouped by gram length, then by start
/// offset; the position of a gram is the character index where it starts, so
/// positions repeat across gram lengths.
///
/// With `prefix_only`, only the leading gram of each length is produced, which
/// supports search-as-you-type fields.
///
/// # Examples
///
/// ```
/// use kopis::analysis::tokenizer::ngram::NgramTokenizer;
/// use kopis::analysis::tokenizer::Tokenizer;
///
/// let tokenizer = NgramTokenizer::new(3, 3, false).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("cheese").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["che", "hee", "ees", "ese"]);
///
/// let tokenizer = NgramTokenizer::new(1, 3, true).unwrap();
/// let tokens: Vec<_> = tokenizer.tokenize("hello").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["h", "he", "hel"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NgramTokenizer {
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
    /// Only emit prefixes of the input
    prefix_only: bool,
}

impl NgramTokenizer {
    /// Create a new n-gram tokenizer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `min_gram` is 0 or `max_gram` is less
    /// than `min_gram`.
    pub fn new(min_gram: usize, max_gram: usize, prefix_only: bool) -> Result<Self> {
        if min_gram == 0 {
            return Err(KopisError::config("min_gram must be at least 1"));
        }
        if max_gram < min_gram {
            return Err(KopisError::config(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(Self {
            min_gram,
            max_gram,
            prefix_only,
        })
    }

    /// Create a bigram tokenizer (n=2).
    pub fn bigram() -> Self {
        Self {
            min_gram: 2,
            max_gram: 2,
            prefix_only: false,
        }
    }

    /// Create a trigram tokenizer (n=3).
    pub fn trigram() -> Self {
        Self {
            min_gram: 3,
            max_gram: 3,
            prefix_only: false,
        }
    }

    /// Minimum gram length.
    pub fn min_gram(&self) -> usize {
        self.min_gram
    }

    /// Maximum gram length.
    pub fn max_gram(&self) -> usize {
        self.max_gram
    }

    /// Whether only prefixes are generated.
    pub fn prefix_only(&self) -> bool {
        self.prefix_only
    }
}

impl Tokenizer for NgramTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        // Byte offset of every character boundary, including the end of text.
        let bounds: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(std::iter::once(text.len()))
            .collect();
        let char_count = bounds.len() - 1;
        let mut tokens = Vec::new();

        for gram_size in self.min_gram..=self.max_gram {
            if gram_size > char_count {
                break;
            }
            let last_start = if self.prefix_only {
                0
            } else {
                char_count - gram_size
            };
            for start in 0..=last_start {
                tokens.push(Token::from_span(
                    text,
                    start,
                    bounds[start],
                    bounds[start + gram_size],
                ));
            }
        }

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &NgramTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_ngram_creation() {
        assert!(NgramTokenizer::new(2, 3, false).is_ok());
        assert!(NgramTokenizer::new(0, 2, false).unwrap_err().is_config());
        assert!(NgramTokenizer::new(3, 2, false).unwrap_err().is_config());
    }

    #[test]
    fn test_trigram_cheese() {
        let tokenizer = NgramTokenizer::trigram();
        let tokens: Vec<Token> = tokenizer.tokenize("cheese").collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["che", "hee", "ees", "ese"]);
        assert_eq!(tokens[1].position, 1);
        assert_eq!(tokens[3].start_offset, 3);
        assert_eq!(tokens[3].end_offset, 6);
    }

    #[test]
    fn test_bigram() {
        assert_eq!(
            texts(&NgramTokenizer::bigram(), "hello"),
            vec!["he", "el", "ll", "lo"]
        );
    }

    #[test]
    fn test_variable_ngram_ordered_by_length_then_offset() {
        let tokenizer = NgramTokenizer::new(2, 3, false).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("abc").collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["ab", "bc", "abc"]);
        let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 0]);
    }

    #[test]
    fn test_prefix_only() {
        let tokenizer = NgramTokenizer::new(1, 3, true).unwrap();
        let tokens: Vec<Token> = tokenizer.tokenize("hello").collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["h", "he", "hel"]);
        assert!(tokens.iter().all(|t| t.position == 0 && t.start_offset == 0));
    }

    #[test]
    fn test_prefix_longer_than_input() {
        let tokenizer = NgramTokenizer::new(2, 10, true).unwrap();
        assert_eq!(texts(&tokenizer, "abc"), vec!["ab", "abc"]);
    }

    #[test]
    fn test_unicode_support() {
        let tokenizer = NgramTokenizer::bigram();
        let tokens: Vec<Token> = tokenizer.tokenize("日本語").collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "日本");
        assert_eq!(tokens[1].text, "本語");

        // "日" = 3 bytes, "本" = 3 bytes, "語" = 3 bytes in UTF-8
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 6);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_short_text() {
        let tokenizer = NgramTokenizer::new(3, 5, false).unwrap();
        assert_eq!(tokenizer.tokenize("ab").count(), 0);
        assert_eq!(tokenizer.tokenize("").count(), 0);
    }

    #[test]
    fn test_exact_length() {
        let tokenizer = NgramTokenizer::trigram();
        assert_eq!(texts(&tokenizer, "abc"), vec!["abc"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(NgramTokenizer::bigram().name(), "ngram");
    }
}
