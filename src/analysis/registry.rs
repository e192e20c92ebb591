//! Resolution and caching of tokenizer configurations.
//!
//! A [`TokenizerRegistry`] turns a [`TokenizerConfig`] into a shared
//! [`ResolvedTokenizer`]. Each distinct configuration is built at most once:
//! the registry keeps one slot per configuration, and concurrent first
//! resolutions of the same configuration wait on that slot and reuse the
//! instance built by whichever caller got there first. Lindera segmenters are
//! cached the same way, per language, so each dictionary is loaded once
//! however many configurations refer to it.
//!
//! There is no process-wide registry. Create one per index or process context
//! and pass it to both the index-building and the query-parsing paths.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use kopis::analysis::config::TokenizerConfig;
//! use kopis::analysis::registry::TokenizerRegistry;
//!
//! let registry = TokenizerRegistry::new();
//! let config = TokenizerConfig::Regex { pattern: r"\W+".to_string() };
//!
//! let first = registry.resolve(&config).unwrap();
//! let second = registry.resolve(&config.clone()).unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! let tokens: Vec<_> = registry
//!     .tokenize(&config, "a,b;C")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(tokens, vec!["a", "b", "c"]);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use ahash::AHashMap;
use lindera::segmenter::Segmenter;
use log::{debug, error, info, warn};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::analysis::analyzer::pipeline::{PipelineAnalyzer, ResolvedTokenizer};
use crate::analysis::config::{RegistryConfig, TOKENIZER_NAMES, TokenizerConfig};
use crate::analysis::dictionary::{self, Language};
use crate::analysis::token::Token;
use crate::analysis::token_filter::FilterPipeline;
use crate::analysis::tokenizer::{
    ChineseCompatibleTokenizer, IcuTokenizer, LinderaTokenizer, NgramTokenizer, RawTokenizer,
    RegexTokenizer, SimpleTokenizer, SourceCodeTokenizer, Tokenizer, WhitespaceTokenizer,
};
use crate::error::Result;

/// A cache slot. Holding its lock while building serializes concurrent first
/// resolutions; `None` means not built yet (or the last attempt failed).
type Slot<T> = Arc<Mutex<Option<T>>>;

/// Counters describing the work a registry has done.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    /// Number of tokenizer configurations constructed.
    pub tokenizers_built: u64,
    /// Number of dictionaries loaded.
    pub dictionaries_loaded: u64,
    /// Number of resolutions answered from the cache.
    pub cache_hits: u64,
}

/// Resolves tokenizer configurations to cached, shared tokenizers.
pub struct TokenizerRegistry {
    config: RegistryConfig,
    tokenizers: RwLock<AHashMap<TokenizerConfig, Slot<ResolvedTokenizer>>>,
    segmenters: RwLock<AHashMap<Language, Slot<Arc<Segmenter>>>>,
    tokenizers_built: AtomicU64,
    dictionaries_loaded: AtomicU64,
    cache_hits: AtomicU64,
}

impl TokenizerRegistry {
    /// Create a registry with default settings and embedded dictionaries.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a registry with custom settings.
    pub fn with_config(config: RegistryConfig) -> Self {
        TokenizerRegistry {
            config,
            tokenizers: RwLock::new(AHashMap::new()),
            segmenters: RwLock::new(AHashMap::new()),
            tokenizers_built: AtomicU64::new(0),
            dictionaries_loaded: AtomicU64::new(0),
            cache_hits: AtomicU64::new(0),
        }
    }

    /// The registry settings.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Resolve `config` to its shared tokenizer, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is structurally invalid, and
    /// a resource error if a backing dictionary fails to load. Nothing is
    /// cached after a failure; the next call tries again.
    pub fn resolve(&self, config: &TokenizerConfig) -> Result<ResolvedTokenizer> {
        config.validate()?;

        let slot = slot(&self.tokenizers, config);
        let mut resolved = slot.lock();
        if let Some(analyzer) = resolved.as_ref() {
            self.cache_hits.fetch_add(1, Ordering::Relaxed);
            debug!("Tokenizer cache hit for {config}");
            return Ok(Arc::clone(analyzer));
        }

        let start = Instant::now();
        let analyzer = Arc::new(self.build(config)?);
        *resolved = Some(Arc::clone(&analyzer));
        self.tokenizers_built.fetch_add(1, Ordering::Relaxed);
        info!(
            "Built tokenizer {config} in {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(analyzer)
    }

    /// Resolve `config` and analyze `text` with it.
    ///
    /// The output is exactly what the indexing path produces for the same
    /// configuration and text.
    pub fn tokenize(&self, config: &TokenizerConfig, text: &str) -> Result<Vec<Token>> {
        Ok(self.resolve(config)?.analyze_to_vec(text))
    }

    /// The segmenter for `language`, loading its dictionary on first use.
    pub fn segmenter(&self, language: Language) -> Result<Arc<Segmenter>> {
        let slot = slot(&self.segmenters, &language);
        let mut loaded = slot.lock();
        if let Some(segmenter) = loaded.as_ref() {
            return Ok(Arc::clone(segmenter));
        }

        let start = Instant::now();
        let segmenter = Arc::new(self.load_segmenter(language).inspect_err(|e| {
            error!("Failed to load {language} dictionary: {e}");
        })?);
        *loaded = Some(Arc::clone(&segmenter));
        self.dictionaries_loaded.fetch_add(1, Ordering::Relaxed);
        info!(
            "Loaded {language} dictionary in {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(segmenter)
    }

    /// Names of every tokenizer variant, in declaration order.
    pub fn list_available(&self) -> Vec<&'static str> {
        TOKENIZER_NAMES.to_vec()
    }

    /// Snapshot of the registry counters.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            tokenizers_built: self.tokenizers_built.load(Ordering::Relaxed),
            dictionaries_loaded: self.dictionaries_loaded.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
        }
    }

    /// Number of resolved tokenizers currently cached.
    pub fn len(&self) -> usize {
        self.tokenizers
            .read()
            .values()
            .filter(|slot| slot.lock().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached tokenizer and segmenter.
    ///
    /// Instances already handed out stay valid; later resolutions build new
    /// ones.
    pub fn clear(&self) {
        self.tokenizers.write().clear();
        self.segmenters.write().clear();
    }

    fn build(&self, config: &TokenizerConfig) -> Result<PipelineAnalyzer> {
        let tokenizer: Arc<dyn Tokenizer> = match config {
            TokenizerConfig::Default => Arc::new(SimpleTokenizer::new()),
            TokenizerConfig::Whitespace => Arc::new(WhitespaceTokenizer::new()),
            TokenizerConfig::Raw => Arc::new(RawTokenizer::new()),
            TokenizerConfig::Regex { pattern } => Arc::new(RegexTokenizer::new(pattern)?),
            TokenizerConfig::Ngram {
                min_gram,
                max_gram,
                prefix_only,
            } => Arc::new(NgramTokenizer::new(*min_gram, *max_gram, *prefix_only)?),
            TokenizerConfig::SourceCode => Arc::new(SourceCodeTokenizer::new()),
            TokenizerConfig::ChineseCompatible => Arc::new(ChineseCompatibleTokenizer::new()),
            TokenizerConfig::ChineseLindera => self.dictionary_tokenizer(Language::Chinese)?,
            TokenizerConfig::KoreanLindera => self.dictionary_tokenizer(Language::Korean)?,
            TokenizerConfig::JapaneseLindera => self.dictionary_tokenizer(Language::Japanese)?,
            TokenizerConfig::Icu => Arc::new(IcuTokenizer::new()),
        };

        let limit = self.config.max_token_bytes;
        let pipeline = match config {
            TokenizerConfig::SourceCode => FilterPipeline::source_code(limit),
            _ => FilterPipeline::standard(limit),
        };

        Ok(PipelineAnalyzer::new(tokenizer, pipeline, config.clone()))
    }

    fn dictionary_tokenizer(&self, language: Language) -> Result<Arc<dyn Tokenizer>> {
        Ok(Arc::new(LinderaTokenizer::new(language, self.segmenter(language)?)))
    }

    fn load_segmenter(&self, language: Language) -> Result<Segmenter> {
        let Some(dir) = &self.config.dictionary_dir else {
            return dictionary::load_embedded(language);
        };

        let language_dir = dir.join(language.code());
        if language_dir.is_dir() {
            dictionary::load_dir(language, &language_dir)
        } else {
            warn!(
                "No {language} dictionary under {}, using the embedded dictionary",
                dir.display()
            );
            dictionary::load_embedded(language)
        }
    }
}

impl Default for TokenizerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TokenizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizerRegistry")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

/// Get the slot for `key`, creating an empty one if needed.
fn slot<K, T>(map: &RwLock<AHashMap<K, Slot<T>>>, key: &K) -> Slot<T>
where
    K: Clone + Eq + std::hash::Hash,
{
    if let Some(slot) = map.read().get(key) {
        return Arc::clone(slot);
    }
    Arc::clone(map.write().entry(key.clone()).or_default())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_resolve_is_cached() {
        let registry = TokenizerRegistry::new();
        let config = TokenizerConfig::Ngram {
            min_gram: 2,
            max_gram: 2,
            prefix_only: false,
        };

        let first = registry.resolve(&config).unwrap();
        let second = registry.resolve(&config).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.stats(),
            RegistryStats {
                tokenizers_built: 1,
                dictionaries_loaded: 0,
                cache_hits: 1,
            }
        );
    }

    #[test]
    fn test_distinct_configs_build_separately() {
        let registry = TokenizerRegistry::new();
        let a = registry
            .resolve(&TokenizerConfig::Regex {
                pattern: ",".to_string(),
            })
            .unwrap();
        let b = registry
            .resolve(&TokenizerConfig::Regex {
                pattern: ";".to_string(),
            })
            .unwrap();

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_invalid_config_is_not_cached() {
        let registry = TokenizerRegistry::new();
        let err = registry
            .resolve(&TokenizerConfig::Ngram {
                min_gram: 3,
                max_gram: 2,
                prefix_only: false,
            })
            .unwrap_err();

        assert!(err.is_config());
        assert!(registry.is_empty());
        assert_eq!(registry.stats().tokenizers_built, 0);
    }

    #[test]
    fn test_segmenter_shared_across_configs() {
        let registry = TokenizerRegistry::new();
        registry.resolve(&TokenizerConfig::JapaneseLindera).unwrap();
        let first = registry.segmenter(Language::Japanese).unwrap();
        let second = registry.segmenter(Language::Japanese).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.stats().dictionaries_loaded, 1);
    }

    #[test]
    fn test_source_code_uses_folding_pipeline() {
        let registry = TokenizerRegistry::new();
        let analyzer = registry.resolve(&TokenizerConfig::SourceCode).unwrap();
        assert_eq!(
            analyzer.pipeline().filter_names(),
            vec!["ascii_folding", "lowercase", "remove_long"]
        );

        let analyzer = registry.resolve(&TokenizerConfig::Icu).unwrap();
        assert_eq!(
            analyzer.pipeline().filter_names(),
            vec!["lowercase", "remove_long"]
        );
    }

    #[test]
    fn test_custom_token_limit() {
        let registry =
            TokenizerRegistry::with_config(RegistryConfig::default().with_max_token_bytes(3));
        let tokens = registry
            .tokenize(&TokenizerConfig::Whitespace, "abc abcd ab")
            .unwrap();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["abc", "ab"]);
        assert_eq!(tokens[1].position, 2);
    }

    #[test]
    fn test_dictionary_dir_without_language_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let registry =
            TokenizerRegistry::with_config(RegistryConfig::default().with_dictionary_dir(dir.path()));

        // No "zh" directory: the embedded dictionary is used
        let tokens = registry
            .tokenize(&TokenizerConfig::ChineseLindera, "能够进行汉语的形态素解析。")
            .unwrap();
        let embedded = TokenizerRegistry::new()
            .tokenize(&TokenizerConfig::ChineseLindera, "能够进行汉语的形态素解析。")
            .unwrap();

        assert_eq!(tokens, embedded);
        assert_eq!(registry.stats().dictionaries_loaded, 1);
    }

    #[test]
    fn test_broken_dictionary_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let zh = dir.path().join("zh");
        fs::create_dir(&zh).unwrap();
        fs::write(zh.join("matrix.mtx"), [0xffu8; 8]).unwrap();

        let registry =
            TokenizerRegistry::with_config(RegistryConfig::default().with_dictionary_dir(dir.path()));
        let err = registry
            .resolve(&TokenizerConfig::ChineseLindera)
            .unwrap_err();

        assert!(err.is_resource());
        assert!(registry.is_empty());
        assert_eq!(registry.stats().dictionaries_loaded, 0);
    }

    #[test]
    fn test_clear() {
        let registry = TokenizerRegistry::new();
        let before = registry.resolve(&TokenizerConfig::Default).unwrap();
        registry.clear();
        assert!(registry.is_empty());

        let after = registry.resolve(&TokenizerConfig::Default).unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(registry.stats().tokenizers_built, 2);
    }

    #[test]
    fn test_list_available() {
        let registry = TokenizerRegistry::new();
        let names = registry.list_available();

        assert_eq!(names.len(), 11);
        assert_eq!(names[0], "default");
        assert_eq!(names[10], "icu");
    }
}
