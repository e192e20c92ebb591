//! ASCII folding filter implementation.
//!
//! Replaces accented Latin letters with their unaccented ASCII counterparts,
//! e.g. `café` becomes `cafe`. A character is folded when its compatibility
//! decomposition, stripped of combining marks, is plain ASCII; a handful of
//! letters without a decomposition (`ß`, `æ`, `ø`, ...) use a fixed table.
//! Every other character is left untouched.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;

/// A filter that folds accented Latin letters to ASCII.
#[derive(Clone, Debug, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    /// Create a new ASCII folding filter.
    pub fn new() -> Self {
        AsciiFoldingFilter
    }
}

impl Filter for AsciiFoldingFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(fold_token))
    }

    fn name(&self) -> &'static str {
        "ascii_folding"
    }
}

fn fold_token(token: Token) -> Token {
    if token.text.is_ascii() {
        return token;
    }
    let folded = fold(&token.text);
    token.with_text(folded)
}

/// Fold `text` to ASCII where a mapping exists.
pub fn fold(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        fold_char(c, &mut folded);
    }
    folded
}

fn fold_char(c: char, out: &mut String) {
    if c.is_ascii() {
        out.push(c);
        return;
    }
    if let Some(replacement) = special_fold(c) {
        out.push_str(replacement);
        return;
    }

    let stripped: String = std::iter::once(c)
        .nfkd()
        .filter(|d| !is_combining_mark(*d))
        .collect();
    if !stripped.is_empty() && stripped.is_ascii() {
        out.push_str(&stripped);
    } else {
        out.push(c);
    }
}

fn special_fold(c: char) -> Option<&'static str> {
    let replacement = match c {
        'ß' => "ss",
        'ẞ' => "SS",
        'æ' => "ae",
        'Æ' => "AE",
        'ø' => "o",
        'Ø' => "O",
        'đ' => "d",
        'Đ' => "D",
        'ł' => "l",
        'Ł' => "L",
        'œ' => "oe",
        'Œ' => "OE",
        'þ' => "th",
        'Þ' => "TH",
        _ => return None,
    };
    Some(replacement)
}
