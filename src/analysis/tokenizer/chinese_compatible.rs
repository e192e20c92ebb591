//! Chinese-compatible tokenizer implementation.

use super::Tokenizer;

use crate::analysis::char_class::is_cjk;
use crate::analysis::token::{Token, TokenStream};

/// A script-aware tokenizer for mixed CJK and alphabetic text.
///
/// Every CJK character (by Unicode block) is a token of its own. Maximal runs
/// of non-CJK alphanumeric characters are grouped into one token. Punctuation,
/// symbols and whitespace are dropped and only ever end an alphanumeric run.
///
/// # Examples
///
/// ```
/// use kopis::analysis::tokenizer::Tokenizer;
/// use kopis::analysis::tokenizer::chinese_compatible::ChineseCompatibleTokenizer;
///
/// let tokens: Vec<_> = ChineseCompatibleTokenizer::new()
///     .tokenize("我爱Rust编程！")
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["我", "爱", "Rust", "编", "程"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ChineseCompatibleTokenizer;

impl ChineseCompatibleTokenizer {
    /// Create a new chinese-compatible tokenizer.
    pub fn new() -> Self {
        ChineseCompatibleTokenizer
    }
}

impl Tokenizer for ChineseCompatibleTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();
        let mut run_start = None;

        for (offset, c) in text.char_indices() {
            let cjk = is_cjk(c);
            if cjk || !c.is_alphanumeric() {
                if let Some(start) = run_start.take() {
                    tokens.push(Token::from_span(text, tokens.len(), start, offset));
                }
                if cjk {
                    let end = offset + c.len_utf8();
                    tokens.push(Token::from_span(text, tokens.len(), offset, end));
                }
            } else if run_start.is_none() {
                run_start = Some(offset);
            }
        }
        if let Some(start) = run_start {
            tokens.push(Token::from_span(text, tokens.len(), start, text.len()));
        }

        Box::new(tokens.into_iter())
    }

    fn name(&self) -> &'static str {
        "chinese_compatible"
    }
}
