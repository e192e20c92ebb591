//! Token filter implementations for token transformation.
//!
//! Filters post-process the raw tokens of a tokenizer. They are stateless
//! iterator adapters: they may drop or rewrite tokens but never reorder them,
//! never change offsets, and never renumber positions.
//!
//! # Available Filters
//!
//! - [`RemoveLongFilter`] - Drops tokens longer than a byte limit
//! - [`AsciiFoldingFilter`] - Folds accented Latin letters to ASCII
//! - [`LowercaseFilter`] - Converts tokens to lowercase
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::token::Token;
//! use kopis::analysis::token_filter::Filter;
//! use kopis::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::with_offsets("Hello", 0, 0, 5)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter())).collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! ```

use crate::analysis::token::TokenStream;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod ascii_folding;
pub mod lowercase;
pub mod pipeline;
pub mod remove_long;

// Re-export all filters for convenient access
pub use ascii_folding::AsciiFoldingFilter;
pub use lowercase::LowercaseFilter;
pub use pipeline::{DEFAULT_MAX_TOKEN_BYTES, FilterPipeline};
pub use remove_long::RemoveLongFilter;
