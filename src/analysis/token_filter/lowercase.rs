//! Lowercase filter implementation.
//!
//! Converts token text to lowercase so that matching is case-insensitive.
//! ASCII text takes a fast path; everything else goes through Unicode-aware
//! lowercasing.
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::token::Token;
//! use kopis::analysis::token_filter::Filter;
//! use kopis::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![
//!     Token::with_offsets("The", 0, 0, 3),
//!     Token::with_offsets("ÉCOLE", 1, 4, 10),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(result[0].text, "the");
//! assert_eq!(result[1].text, "école");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase.
///
/// Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(lowercase))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

fn lowercase(mut token: Token) -> Token {
    if token.text.is_ascii() {
        token.text.make_ascii_lowercase();
        token
    } else {
        let lowered = token.text.to_lowercase();
        token.with_text(lowered)
    }
}
