//! Per-field analyzer.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::ResolvedTokenizer;
use crate::analysis::config::TokenizerConfig;
use crate::analysis::registry::TokenizerRegistry;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Binds field names to tokenizer configurations.
///
/// Each field is attached to exactly one [`TokenizerConfig`], resolved through
/// a shared [`TokenizerRegistry`]. Index building and query parsing go through
/// the same resolved instance, so both sides see identical token streams.
/// Fields that were never bound use the default configuration.
///
/// Fields with equal configurations share one resolved tokenizer; a
/// dictionary is loaded once no matter how many fields use it.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use kopis::analysis::analyzer::PerFieldAnalyzer;
/// use kopis::analysis::config::TokenizerConfig;
/// use kopis::analysis::registry::TokenizerRegistry;
///
/// let registry = Arc::new(TokenizerRegistry::new());
/// let mut analyzer = PerFieldAnalyzer::new(Arc::clone(&registry)).unwrap();
/// analyzer.add_field("id", TokenizerConfig::Raw).unwrap();
///
/// let id: Vec<_> = analyzer.analyze_field("id", "AB-12 x").map(|t| t.text).collect();
/// assert_eq!(id, vec!["ab-12 x"]);
///
/// let body: Vec<_> = analyzer.analyze_field("body", "AB-12 x").map(|t| t.text).collect();
/// assert_eq!(body, vec!["ab", "12", "x"]);
/// ```
#[derive(Clone, Debug)]
pub struct PerFieldAnalyzer {
    registry: Arc<TokenizerRegistry>,

    /// Analyzer for fields not in the map.
    default_analyzer: ResolvedTokenizer,

    /// Map of field names to their specific analyzers.
    field_analyzers: AHashMap<String, ResolvedTokenizer>,
}

impl PerFieldAnalyzer {
    /// Create a per-field analyzer whose default is the `default` tokenizer.
    pub fn new(registry: Arc<TokenizerRegistry>) -> Result<Self> {
        Self::with_default(registry, &TokenizerConfig::Default)
    }

    /// Create a per-field analyzer with a custom default configuration.
    pub fn with_default(registry: Arc<TokenizerRegistry>, config: &TokenizerConfig) -> Result<Self> {
        let default_analyzer = registry.resolve(config)?;
        Ok(PerFieldAnalyzer {
            registry,
            default_analyzer,
            field_analyzers: AHashMap::new(),
        })
    }

    /// Attach `config` to `field`, replacing any previous binding.
    ///
    /// The configuration is resolved immediately, so invalid parameters and
    /// missing resources are reported here rather than during analysis.
    pub fn add_field(&mut self, field: impl Into<String>, config: TokenizerConfig) -> Result<()> {
        let analyzer = self.registry.resolve(&config)?;
        self.field_analyzers.insert(field.into(), analyzer);
        Ok(())
    }

    /// Get the analyzer for a specific field.
    pub fn get_analyzer(&self, field: &str) -> &ResolvedTokenizer {
        self.field_analyzers
            .get(field)
            .unwrap_or(&self.default_analyzer)
    }

    /// Get the configuration attached to a field.
    pub fn config(&self, field: &str) -> &TokenizerConfig {
        self.get_analyzer(field).config()
    }

    /// Get the default analyzer.
    pub fn default_analyzer(&self) -> &ResolvedTokenizer {
        &self.default_analyzer
    }

    /// Analyze text with the analyzer for the given field.
    pub fn analyze_field(&self, field: &str, text: &str) -> TokenStream {
        self.get_analyzer(field).analyze(text)
    }

    /// Conjunctive match of `query` against `value` under the field's analyzer.
    pub fn matches_all(&self, field: &str, query: &str, value: &str) -> bool {
        self.get_analyzer(field).matches_all(query, value)
    }

    /// Names of the explicitly bound fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.field_analyzers.keys().map(String::as_str)
    }
}

impl Analyzer for PerFieldAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.default_analyzer.analyze(text)
    }

    fn name(&self) -> &'static str {
        "per_field"
    }
}
