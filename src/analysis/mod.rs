//! Text analysis module for Kopis.
//!
//! This module turns text into the normalized token streams used both to build
//! a search index and to parse queries against it: tokenizers, the shared
//! filter pipeline, configuration, and the registry that resolves a
//! configuration to one cached instance.

pub mod analyzer;
pub mod char_class;
pub mod config;
pub mod dictionary;
pub mod registry;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PerFieldAnalyzer, PipelineAnalyzer, ResolvedTokenizer};
pub use config::{RegistryConfig, TOKENIZER_NAMES, TokenizerConfig, make_config};
pub use registry::{RegistryStats, TokenizerRegistry};
pub use token::{IntoTokenStream, Token, TokenStream};
pub use token_filter::{Filter, FilterPipeline};
pub use tokenizer::Tokenizer;

/// Names of every tokenizer variant, in declaration order.
pub fn list_tokenizers() -> Vec<&'static str> {
    TOKENIZER_NAMES.to_vec()
}
