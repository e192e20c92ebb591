//! Analyzers that combine a tokenizer with its filter pipeline.

pub mod per_field;
pub mod pipeline;

pub use per_field::PerFieldAnalyzer;
pub use pipeline::{PipelineAnalyzer, ResolvedTokenizer};

use crate::analysis::token::TokenStream;

/// Trait for analyzers that turn text into the final token stream.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of filtered tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer.
    fn name(&self) -> &'static str;
}
