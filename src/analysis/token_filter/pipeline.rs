//! Ordered chains of token filters.

use std::fmt;
use std::sync::Arc;

use super::{AsciiFoldingFilter, Filter, LowercaseFilter, RemoveLongFilter};

use crate::analysis::token::TokenStream;

/// Default byte limit above which tokens are dropped.
pub const DEFAULT_MAX_TOKEN_BYTES: usize = 255;

/// An ordered chain of filters applied to every token stream.
///
/// The chain is built once per tokenizer configuration and shared between
/// threads.
#[derive(Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterPipeline {
    /// An empty pipeline that passes tokens through unchanged.
    pub fn new() -> Self {
        FilterPipeline::default()
    }

    /// Lowercase, then remove tokens longer than `limit` bytes.
    ///
    /// Lowercasing can grow a token (`İ` is two bytes, `i̇` three), so the
    /// limit is checked on the final text.
    pub fn standard(limit: usize) -> Self {
        FilterPipeline::new()
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveLongFilter::new(limit)))
    }

    /// Fold to ASCII, lowercase, then remove tokens longer than `limit` bytes.
    pub fn source_code(limit: usize) -> Self {
        FilterPipeline::new()
            .add_filter(Arc::new(AsciiFoldingFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveLongFilter::new(limit)))
    }

    /// Append a filter to the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Wrap `tokens` in every filter, in order.
    pub fn apply(&self, tokens: TokenStream) -> TokenStream {
        self.filters
            .iter()
            .fold(tokens, |stream, filter| filter.filter(stream))
    }

    /// Names of the filters, in application order.
    pub fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("filters", &self.filter_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(tokens: Vec<Token>) -> TokenStream {
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_standard_pipeline() {
        let pipeline = FilterPipeline::standard(4);
        assert_eq!(pipeline.filter_names(), vec!["lowercase", "remove_long"]);

        let tokens = vec![
            Token::with_offsets("Ab", 0, 0, 2),
            Token::with_offsets("Toolong", 1, 3, 10),
            Token::with_offsets("CAFÉ", 2, 11, 16),
        ];
        let result: Vec<Token> = pipeline.apply(stream(tokens)).collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "ab");
    }

    #[test]
    fn test_limit_applies_after_lowercasing() {
        // "İ" lowercases to "i̇", growing from two bytes to three
        let text = format!("{}a", "İ".repeat(127));
        assert_eq!(text.len(), 255);

        let pipeline = FilterPipeline::standard(DEFAULT_MAX_TOKEN_BYTES);
        let tokens = vec![
            Token::with_offsets(text.as_str(), 0, 0, 255),
            Token::with_offsets("İ", 1, 256, 258),
        ];
        let result: Vec<Token> = pipeline.apply(stream(tokens)).collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "i\u{307}");
        assert_eq!(result[0].position, 1);
    }

    #[test]
    fn test_limit_applies_after_folding() {
        // "⑽" is three bytes and folds to the four bytes "(10)"
        let text = "⑽".repeat(85);
        assert_eq!(text.len(), 255);

        let pipeline = FilterPipeline::source_code(DEFAULT_MAX_TOKEN_BYTES);
        let tokens = vec![
            Token::with_offsets(text.as_str(), 0, 0, 255),
            Token::with_offsets("⑽", 1, 256, 259),
        ];
        let result: Vec<Token> = pipeline.apply(stream(tokens)).collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "(10)");
        assert!(result.iter().all(|t| t.text.len() <= DEFAULT_MAX_TOKEN_BYTES));
    }

    #[test]
    fn test_source_code_pipeline() {
        let pipeline = FilterPipeline::source_code(DEFAULT_MAX_TOKEN_BYTES);
        assert_eq!(
            pipeline.filter_names(),
            vec!["ascii_folding", "lowercase", "remove_long"]
        );

        let tokens = vec![
            Token::with_offsets("Café", 0, 0, 5),
            Token::with_offsets("Parser", 1, 5, 11),
        ];
        let result: Vec<String> = pipeline.apply(stream(tokens)).map(|t| t.text).collect();

        assert_eq!(result, vec!["cafe", "parser"]);
    }

    #[test]
    fn test_empty_pipeline_passes_through() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let tokens = vec![Token::with_offsets("Keep", 0, 0, 4)];
        let result: Vec<Token> = pipeline.apply(stream(tokens.clone())).collect();
        assert_eq!(result, tokens);
    }

    #[test]
    fn test_pipeline_is_lazy() {
        let pipeline = FilterPipeline::standard(DEFAULT_MAX_TOKEN_BYTES);
        let endless = (0..).map(|i| Token::with_offsets("X", i, i, i + 1));

        let first: Vec<Token> = pipeline.apply(Box::new(endless)).take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2].position, 2);
    }
}
