//! Unicode word-boundary tokenizer implementation.
//!
//! Splits text with the locale-independent word boundary rules of Unicode
//! Standard Annex #29: letters stay together, a single mid-word mark such as
//! an apostrophe between letters does not break a word, numbers keep their
//! decimal separators, and each Han ideograph is its own unit. Units that
//! contain no alphanumeric character (whitespace, punctuation, symbols) are
//! discarded.
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::tokenizer::Tokenizer;
//! use kopis::analysis::tokenizer::icu::IcuTokenizer;
//!
//! let tokens: Vec<_> = IcuTokenizer::new()
//!     .tokenize("Hello, world! 你好")
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, vec!["Hello", "world", "你", "好"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct IcuTokenizer;

impl IcuTokenizer {
    /// Create a new Unicode word-boundary tokenizer.
    pub fn new() -> Self {
        IcuTokenizer
    }
}

impl Tokenizer for IcuTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();

        for (start, word) in text.split_word_bound_indices() {
            // Only keep actual words (not whitespace or punctuation)
            if word.chars().any(char::is_alphanumeric) {
                let end = start + word.len();
                tokens.push(Token::with_offsets(word, tokens.len(), start, end));
            }
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "icu"
    }
}
