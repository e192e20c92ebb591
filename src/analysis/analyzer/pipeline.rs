//! Pipeline analyzer that combines a tokenizer and its filters.
//!
//! A [`PipelineAnalyzer`] is what a [`TokenizerConfig`] resolves to: the
//! constructed tokenizer plus the filter pipeline for that variant. It is
//! immutable, so one instance is shared by every indexing worker and every
//! query parser that uses the configuration.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kopis::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use kopis::analysis::config::TokenizerConfig;
//! use kopis::analysis::token_filter::FilterPipeline;
//! use kopis::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(
//!     Arc::new(WhitespaceTokenizer::new()),
//!     FilterPipeline::standard(255),
//!     TokenizerConfig::Whitespace,
//! );
//!
//! let tokens: Vec<_> = analyzer.analyze("Hello  World").map(|t| t.text).collect();
//! assert_eq!(tokens, vec!["hello", "world"]);
//! ```

use std::fmt;
use std::sync::Arc;

use ahash::AHashSet;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::config::TokenizerConfig;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::FilterPipeline;
use crate::analysis::tokenizer::Tokenizer;

/// The shared, read-only instance backing a [`TokenizerConfig`].
pub type ResolvedTokenizer = Arc<PipelineAnalyzer>;

/// A tokenizer followed by a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    pipeline: FilterPipeline,
    config: TokenizerConfig,
}

impl PipelineAnalyzer {
    /// Create a pipeline analyzer.
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        pipeline: FilterPipeline,
        config: TokenizerConfig,
    ) -> Self {
        PipelineAnalyzer {
            tokenizer,
            pipeline,
            config,
        }
    }

    /// Tokenize and filter `text`.
    pub fn analyze(&self, text: &str) -> TokenStream {
        self.pipeline.apply(self.tokenizer.tokenize(text))
    }

    /// Tokenize and filter `text`, collecting the tokens.
    pub fn analyze_to_vec(&self, text: &str) -> Vec<Token> {
        self.analyze(text).collect()
    }

    /// Analyze several documents in parallel.
    ///
    /// Each document is tokenized on its own; results are returned in input
    /// order.
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<Vec<Token>> {
        texts
            .par_iter()
            .map(|text| self.analyze_to_vec(text))
            .collect()
    }

    /// The distinct terms produced for `text`.
    pub fn term_set(&self, text: &str) -> AHashSet<String> {
        self.analyze(text).map(|token| token.text).collect()
    }

    /// Whether every term of `query` occurs among the terms of `value`.
    ///
    /// This is the conjunctive matching used for n-gram fields: term order and
    /// multiplicity are ignored. A query producing no terms matches nothing.
    pub fn matches_all(&self, query: &str, value: &str) -> bool {
        let value_terms = self.term_set(value);
        let mut query_terms = self.analyze(query).peekable();

        if query_terms.peek().is_none() {
            return false;
        }
        query_terms.all(|token| value_terms.contains(&token.text))
    }

    /// The underlying tokenizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// The filter pipeline.
    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// The configuration this analyzer was built from.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        PipelineAnalyzer::analyze(self, text)
    }

    fn name(&self) -> &'static str {
        self.config.name()
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("config", &self.config)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &self.pipeline.filter_names())
            .finish()
    }
}
