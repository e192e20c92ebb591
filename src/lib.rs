//! # Kopis
//!
//! A tokenization engine for full-text search in Rust.
//!
//! ## Features
//!
//! - Delimiter, pattern, n-gram and source-code tokenizers
//! - CJK-aware and Unicode word-boundary segmentation
//! - Dictionary-backed morphological segmentation for Chinese, Korean and Japanese
//! - A shared filter pipeline (oversize-token removal, ASCII folding, lowercasing)
//! - A registry that builds each configuration once and shares it between
//!   index building and query parsing
//!
//! ## Example
//!
//! ```
//! use kopis::analysis::{TokenizerRegistry, make_config};
//!
//! let registry = TokenizerRegistry::new();
//! let config = make_config("source_code", &Default::default()).unwrap();
//! let tokens: Vec<_> = registry
//!     .tokenize(&config, "camelCaseHTTPServer")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["camel", "case", "http", "server"]);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
