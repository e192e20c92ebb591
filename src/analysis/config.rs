//! Tokenizer configuration.
//!
//! A [`TokenizerConfig`] names one tokenizer variant together with its
//! parameters. Configurations are plain values: two configs that compare equal
//! are interchangeable and resolve to the same shared tokenizer.
//!
//! # Examples
//!
//! ```
//! use kopis::analysis::config::{TokenizerConfig, make_config};
//! use serde_json::json;
//!
//! let params = json!({"min_gram": 3, "max_gram": 3});
//! let config = make_config("ngram", params.as_object().unwrap()).unwrap();
//!
//! assert_eq!(
//!     config,
//!     TokenizerConfig::Ngram { min_gram: 3, max_gram: 3, prefix_only: false }
//! );
//! assert_eq!(config.name(), "ngram");
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::analysis::token_filter::DEFAULT_MAX_TOKEN_BYTES;
use crate::analysis::tokenizer::NgramTokenizer;
use crate::analysis::tokenizer::regex::validate_pattern;
use crate::error::{KopisError, Result};

/// Default minimum n-gram length when `min_gram` is omitted.
pub const DEFAULT_MIN_GRAM: usize = 2;

/// Default maximum n-gram length when `max_gram` is omitted.
pub const DEFAULT_MAX_GRAM: usize = 3;

/// Every tokenizer variant name, in declaration order.
pub const TOKENIZER_NAMES: [&str; 11] = [
    "default",
    "whitespace",
    "raw",
    "regex",
    "ngram",
    "source_code",
    "chinese_compatible",
    "chinese_lindera",
    "korean_lindera",
    "japanese_lindera",
    "icu",
];

fn default_min_gram() -> usize {
    DEFAULT_MIN_GRAM
}

fn default_max_gram() -> usize {
    DEFAULT_MAX_GRAM
}

/// A tokenizer variant and its parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TokenizerConfig {
    /// Alphanumeric runs; whitespace and punctuation separate.
    #[default]
    Default,
    /// Runs of non-whitespace.
    Whitespace,
    /// The whole input as one token.
    Raw,
    /// Runs of text between matches of a separator pattern.
    Regex { pattern: String },
    /// Character n-grams over the whole input.
    Ngram {
        #[serde(default = "default_min_gram")]
        min_gram: usize,
        #[serde(default = "default_max_gram")]
        max_gram: usize,
        #[serde(default)]
        prefix_only: bool,
    },
    /// Identifiers split on case and letter/digit transitions.
    SourceCode,
    /// One token per CJK character, grouped non-CJK runs.
    ChineseCompatible,
    /// Chinese morphological segmentation over CC-CEDICT.
    ChineseLindera,
    /// Korean morphological segmentation over ko-dic.
    KoreanLindera,
    /// Japanese morphological segmentation over UniDic.
    JapaneseLindera,
    /// Unicode word boundaries.
    Icu,
}

impl TokenizerConfig {
    /// The variant name, as accepted by [`make_config`].
    pub fn name(&self) -> &'static str {
        match self {
            TokenizerConfig::Default => "default",
            TokenizerConfig::Whitespace => "whitespace",
            TokenizerConfig::Raw => "raw",
            TokenizerConfig::Regex { .. } => "regex",
            TokenizerConfig::Ngram { .. } => "ngram",
            TokenizerConfig::SourceCode => "source_code",
            TokenizerConfig::ChineseCompatible => "chinese_compatible",
            TokenizerConfig::ChineseLindera => "chinese_lindera",
            TokenizerConfig::KoreanLindera => "korean_lindera",
            TokenizerConfig::JapaneseLindera => "japanese_lindera",
            TokenizerConfig::Icu => "icu",
        }
    }

    /// Check the structural invariants of the parameters.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a pattern that does not compile or
    /// can match an empty span, and for n-gram bounds with `min_gram < 1` or
    /// `min_gram > max_gram`.
    pub fn validate(&self) -> Result<()> {
        match self {
            TokenizerConfig::Regex { pattern } => validate_pattern(pattern),
            TokenizerConfig::Ngram {
                min_gram,
                max_gram,
                prefix_only,
            } => NgramTokenizer::new(*min_gram, *max_gram, *prefix_only).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Parse a configuration from its JSON form, e.g.
    /// `{"type": "regex", "pattern": "\\W+"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let object = value
            .as_object()
            .ok_or_else(|| KopisError::config("Tokenizer configuration must be a JSON object"))?;

        let mut params = object.clone();
        let name = match params.remove("type") {
            Some(Value::String(name)) => name,
            Some(other) => {
                return Err(KopisError::config(format!(
                    "Tokenizer type must be a string, got {other}"
                )));
            }
            None => return Err(KopisError::config("Tokenizer configuration is missing 'type'")),
        };

        make_config(&name, &params)
    }

    /// Serialize to the JSON form accepted by [`TokenizerConfig::from_json`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for TokenizerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenizerConfig::Regex { pattern } => write!(f, "regex({pattern:?})"),
            TokenizerConfig::Ngram {
                min_gram,
                max_gram,
                prefix_only,
            } => write!(
                f,
                "ngram(min_gram={min_gram}, max_gram={max_gram}, prefix_only={prefix_only})"
            ),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for TokenizerConfig {
    type Err = KopisError;

    /// Build a configuration from a bare variant name with default parameters.
    fn from_str(s: &str) -> Result<Self> {
        make_config(s, &Map::new())
    }
}

/// Build a [`TokenizerConfig`] from a variant name and a parameter bag.
///
/// Recognized parameters are `pattern` (string, required) for `regex` and
/// `min_gram`, `max_gram` (unsigned integers) and `prefix_only` (boolean) for
/// `ngram`. Other variants take no parameters.
///
/// # Errors
///
/// Returns a configuration error for an unknown name, an unrecognized or
/// mistyped parameter, or parameters that fail [`TokenizerConfig::validate`].
pub fn make_config(name: &str, params: &Map<String, Value>) -> Result<TokenizerConfig> {
    let config = match name {
        "default" => TokenizerConfig::Default,
        "whitespace" => TokenizerConfig::Whitespace,
        "raw" => TokenizerConfig::Raw,
        "regex" => {
            check_params(name, params, &["pattern"])?;
            let pattern = match params.get("pattern") {
                Some(value) => string_param(name, "pattern", value)?,
                None => {
                    return Err(KopisError::config("Tokenizer 'regex' requires a 'pattern'"));
                }
            };
            TokenizerConfig::Regex { pattern }
        }
        "ngram" => {
            check_params(name, params, &["min_gram", "max_gram", "prefix_only"])?;
            TokenizerConfig::Ngram {
                min_gram: params
                    .get("min_gram")
                    .map(|v| uint_param(name, "min_gram", v))
                    .transpose()?
                    .unwrap_or(DEFAULT_MIN_GRAM),
                max_gram: params
                    .get("max_gram")
                    .map(|v| uint_param(name, "max_gram", v))
                    .transpose()?
                    .unwrap_or(DEFAULT_MAX_GRAM),
                prefix_only: params
                    .get("prefix_only")
                    .map(|v| bool_param(name, "prefix_only", v))
                    .transpose()?
                    .unwrap_or(false),
            }
        }
        "source_code" => TokenizerConfig::SourceCode,
        "chinese_compatible" => TokenizerConfig::ChineseCompatible,
        "chinese_lindera" => TokenizerConfig::ChineseLindera,
        "korean_lindera" => TokenizerConfig::KoreanLindera,
        "japanese_lindera" => TokenizerConfig::JapaneseLindera,
        "icu" => TokenizerConfig::Icu,
        _ => {
            return Err(KopisError::config(format!(
                "Unknown tokenizer '{name}' (available: {})",
                TOKENIZER_NAMES.join(", ")
            )));
        }
    };

    if !matches!(config, TokenizerConfig::Regex { .. } | TokenizerConfig::Ngram { .. }) {
        check_params(name, params, &[])?;
    }
    config.validate()?;
    Ok(config)
}

fn check_params(name: &str, params: &Map<String, Value>, allowed: &[&str]) -> Result<()> {
    match params.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(KopisError::config(format!(
            "Tokenizer '{name}' does not accept parameter '{key}'"
        ))),
        None => Ok(()),
    }
}

fn string_param(name: &str, key: &str, value: &Value) -> Result<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        KopisError::config(format!("Parameter '{key}' of '{name}' must be a string, got {value}"))
    })
}

fn uint_param(name: &str, key: &str, value: &Value) -> Result<usize> {
    value
        .as_u64()
        .and_then(|v| usize::try_from(v).ok())
        .ok_or_else(|| {
            KopisError::config(format!(
                "Parameter '{key}' of '{name}' must be an unsigned integer, got {value}"
            ))
        })
}

fn bool_param(name: &str, key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| {
        KopisError::config(format!("Parameter '{key}' of '{name}' must be a boolean, got {value}"))
    })
}

/// Settings shared by every tokenizer a registry builds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Directory holding compiled Lindera dictionaries, one per language
    /// under `<dir>/<code>/`. Embedded dictionaries are used when unset or
    /// when a language is missing from the directory.
    pub dictionary_dir: Option<PathBuf>,

    /// Tokens longer than this many bytes are dropped.
    pub max_token_bytes: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            dictionary_dir: None,
            max_token_bytes: DEFAULT_MAX_TOKEN_BYTES,
        }
    }
}

impl RegistryConfig {
    /// Use dictionaries from `dir`.
    pub fn with_dictionary_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.dictionary_dir = Some(dir.into());
        self
    }

    /// Set the token byte limit.
    pub fn with_max_token_bytes(mut self, limit: usize) -> Self {
        self.max_token_bytes = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_make_config_every_name() {
        for name in TOKENIZER_NAMES {
            let params = if name == "regex" {
                params(json!({"pattern": r"\s+"}))
            } else {
                Map::new()
            };
            let config = make_config(name, &params).unwrap();
            assert_eq!(config.name(), name);
        }
    }

    #[test]
    fn test_ngram_defaults() {
        let config = make_config("ngram", &Map::new()).unwrap();
        assert_eq!(
            config,
            TokenizerConfig::Ngram {
                min_gram: 2,
                max_gram: 3,
                prefix_only: false
            }
        );

        let config = make_config("ngram", &params(json!({"prefix_only": true}))).unwrap();
        assert_eq!(
            config,
            TokenizerConfig::Ngram {
                min_gram: 2,
                max_gram: 3,
                prefix_only: true
            }
        );
    }

    #[test]
    fn test_make_config_errors() {
        let cases = [
            ("bogus", json!({})),
            ("regex", json!({})),
            ("regex", json!({"pattern": 3})),
            ("regex", json!({"pattern": "("})),
            ("regex", json!({"pattern": r"\s*"})),
            ("ngram", json!({"min_gram": 0})),
            ("ngram", json!({"min_gram": 4, "max_gram": 3})),
            ("ngram", json!({"min_gram": -1})),
            ("ngram", json!({"prefix_only": "yes"})),
            ("ngram", json!({"size": 3})),
            ("whitespace", json!({"pattern": "x"})),
        ];

        for (name, value) in cases {
            let err = make_config(name, &params(value.clone())).unwrap_err();
            assert!(err.is_config(), "{name} {value} gave {err}");
        }
    }

    #[test]
    fn test_structural_equality() {
        let a = make_config("regex", &params(json!({"pattern": ","}))).unwrap();
        let b = TokenizerConfig::Regex {
            pattern: ",".to_string(),
        };
        let c = TokenizerConfig::Regex {
            pattern: ";".to_string(),
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_json_round_trip() {
        let config = TokenizerConfig::Ngram {
            min_gram: 1,
            max_gram: 4,
            prefix_only: true,
        };
        let json = config.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"type":"ngram","min_gram":1,"max_gram":4,"prefix_only":true}"#
        );
        assert_eq!(TokenizerConfig::from_json(&json).unwrap(), config);

        let config = TokenizerConfig::from_json(r#"{"type": "source_code"}"#).unwrap();
        assert_eq!(config, TokenizerConfig::SourceCode);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(TokenizerConfig::from_json("[1]").unwrap_err().is_config());
        assert!(TokenizerConfig::from_json("{}").unwrap_err().is_config());
        assert!(
            TokenizerConfig::from_json(r#"{"type": "regex", "pattern": ""}"#)
                .unwrap_err()
                .is_config()
        );
        assert!(matches!(
            TokenizerConfig::from_json("not json"),
            Err(KopisError::Json(_))
        ));
    }

    #[test]
    fn test_from_str_and_display() {
        assert_eq!("icu".parse::<TokenizerConfig>().unwrap(), TokenizerConfig::Icu);
        assert!("regex".parse::<TokenizerConfig>().is_err());

        let config = TokenizerConfig::Regex {
            pattern: r"\W+".to_string(),
        };
        assert_eq!(config.to_string(), r#"regex("\\W+")"#);
        assert_eq!(TokenizerConfig::KoreanLindera.to_string(), "korean_lindera");
    }

    #[test]
    fn test_registry_config_default() {
        let config = RegistryConfig::default();
        assert_eq!(config.dictionary_dir, None);
        assert_eq!(config.max_token_bytes, 255);

        let config: RegistryConfig = serde_json::from_str(r#"{"max_token_bytes": 64}"#).unwrap();
        assert_eq!(config.max_token_bytes, 64);
        assert_eq!(config.dictionary_dir, None);
    }
}
