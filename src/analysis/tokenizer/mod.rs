//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of analysis: they split input text into raw
//! tokens with byte offsets. The shared
//! [`FilterPipeline`](crate::analysis::token_filter::FilterPipeline) then
//! lowercases, folds and drops oversize tokens.
//!
//! # Available Tokenizers
//!
//! - [`SimpleTokenizer`] - Alphanumeric runs; punctuation and whitespace separate (`default`)
//! - [`WhitespaceTokenizer`] - Splits on runs of Unicode whitespace
//! - [`RawTokenizer`] - Treats the entire text as a single token
//! - [`RegexTokenizer`] - Splits on separators matched by a pattern
//! - [`NgramTokenizer`] - Sliding-window or prefix character n-grams
//! - [`SourceCodeTokenizer`] - Identifier-aware splitting (camelCase, snake_case, acronyms)
//! - [`ChineseCompatibleTokenizer`] - One token per CJK character, Latin runs grouped
//! - [`LinderaTokenizer`] - Dictionary-backed morphological segmentation (Lindera)
//! - [`IcuTokenizer`] - Unicode word-boundary segmentation (UAX #29)
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::tokenizer::Tokenizer;
//! use kopis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenization is a total function: any text yields a (possibly empty)
/// stream, so the method is infallible. Anything that can fail (pattern
/// compilation, dictionary loading) happens when the tokenizer is built.
/// Implementations are immutable after construction and shared across threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (the configuration variant name).
    fn name(&self) -> &'static str;
}

// Individual tokenizer modules
pub mod chinese_compatible;
pub mod icu;
pub mod lindera;
pub mod ngram;
pub mod raw;
pub mod regex;
pub mod simple;
pub mod source_code;
pub mod whitespace;

// Re-export all tokenizers for convenient access
pub use chinese_compatible::ChineseCompatibleTokenizer;
pub use icu::IcuTokenizer;
pub use self::lindera::LinderaTokenizer;
pub use ngram::NgramTokenizer;
pub use raw::RawTokenizer;
pub use self::regex::RegexTokenizer;
pub use simple::SimpleTokenizer;
pub use source_code::SourceCodeTokenizer;
pub use whitespace::WhitespaceTokenizer;
