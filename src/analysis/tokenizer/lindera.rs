//! Lindera-backed morphological tokenizer.
//!
//! Backs the `chinese_lindera`, `korean_lindera` and `japanese_lindera`
//! variants. The segmenter is loaded once per language by the registry and
//! shared.

use std::borrow::Cow;
use std::sync::Arc;

use lindera::segmenter::Segmenter;
use log::error;

use super::Tokenizer;

use crate::analysis::dictionary::Language;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer that segments text by minimum-cost dictionary lookup.
///
/// Segments consisting only of whitespace or punctuation are not emitted, and
/// the remaining tokens are numbered consecutively.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use kopis::analysis::dictionary::{Language, load_embedded};
/// use kopis::analysis::tokenizer::Tokenizer;
/// use kopis::analysis::tokenizer::lindera::LinderaTokenizer;
///
/// let segmenter = Arc::new(load_embedded(Language::Chinese).unwrap());
/// let tokenizer = LinderaTokenizer::new(Language::Chinese, segmenter);
/// let tokens: Vec<_> = tokenizer.tokenize("能够进行汉语的形态素解析。").map(|t| t.text).collect();
/// assert_eq!(tokens, vec!["能够", "进行", "汉语", "的", "形态", "素", "解析"]);
/// ```
#[derive(Clone)]
pub struct LinderaTokenizer {
    language: Language,
    segmenter: Arc<Segmenter>,
}

impl LinderaTokenizer {
    /// Create a tokenizer over a shared segmenter.
    pub fn new(language: Language, segmenter: Arc<Segmenter>) -> Self {
        LinderaTokenizer {
            language,
            segmenter,
        }
    }

    /// The language of the underlying dictionary.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The shared segmenter.
    pub fn segmenter(&self) -> &Arc<Segmenter> {
        &self.segmenter
    }
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let segments = match self.segmenter.segment(Cow::Borrowed(text)) {
            Ok(segments) => segments,
            Err(e) => {
                error!("Failed to segment text with the {} dictionary: {e}", self.language);
                return Vec::new().into_token_stream();
            }
        };

        let mut tokens = Vec::with_capacity(segments.len());
        for segment in segments {
            if !segment.surface.chars().any(char::is_alphanumeric) {
                continue;
            }
            tokens.push(Token::with_offsets(
                segment.surface,
                tokens.len(),
                segment.byte_start,
                segment.byte_end,
            ));
        }

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        self.language.tokenizer_name()
    }
}

impl std::fmt::Debug for LinderaTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinderaTokenizer")
            .field("language", &self.language)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dictionary::load_embedded;

    fn tokenizer(language: Language) -> LinderaTokenizer {
        LinderaTokenizer::new(language, Arc::new(load_embedded(language).unwrap()))
    }

    fn texts(tokenizer: &LinderaTokenizer, text: &str) -> Vec<String> {
        tokenizer.tokenize(text).map(|t| t.text).collect()
    }

    #[test]
    fn test_tokenize_japanese() {
        let tokenizer = tokenizer(Language::Japanese);

        assert_eq!(
            texts(&tokenizer, "日本語の形態素解析を行うことができます。"),
            vec![
                "日本", "語", "の", "形態", "素", "解析", "を", "行う", "こと", "が", "でき",
                "ます"
            ]
        );

        let tokens = texts(&tokenizer, "私は昨日友達と映画を見に行きました");
        for word in ["昨日", "友達", "映画"] {
            assert!(tokens.iter().any(|t| t == word), "{word} in {tokens:?}");
        }
    }

    #[test]
    fn test_tokenize_korean() {
        let tokenizer = tokenizer(Language::Korean);

        assert_eq!(
            texts(&tokenizer, "한국어의형태해석을실시할수있습니다."),
            vec![
                "한국어", "의", "형태", "해석", "을", "실시", "할", "수", "있", "습니다"
            ]
        );

        let tokens = texts(&tokenizer, "오늘 친구와 영화를 보러 갔습니다");
        for word in ["오늘", "친구", "영화"] {
            assert!(tokens.iter().any(|t| t == word), "{word} in {tokens:?}");
        }
    }

    #[test]
    fn test_tokenize_chinese() {
        let tokenizer = tokenizer(Language::Chinese);

        assert_eq!(
            texts(&tokenizer, "能够进行汉语的形态素解析。"),
            vec!["能够", "进行", "汉语", "的", "形态", "素", "解析"]
        );

        let tokens = texts(&tokenizer, "我今天去北京大学看朋友");
        for word in ["今天", "朋友"] {
            assert!(tokens.iter().any(|t| t == word), "{word} in {tokens:?}");
        }
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokenizer = tokenizer(Language::Japanese);
        let tokens: Vec<Token> = tokenizer.tokenize("私は、本を読む").collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["私", "は", "本", "を", "読む"]);
        // The ideographic comma is dropped without leaving a position gap
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 9);
        assert_eq!(tokens[2].end_offset, 12);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = tokenizer(Language::Korean);
        assert_eq!(tokenizer.tokenize("").count(), 0);
        assert_eq!(tokenizer.tokenize(" 。").count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(tokenizer(Language::Chinese).name(), "chinese_lindera");
        assert_eq!(tokenizer(Language::Korean).name(), "korean_lindera");
        assert_eq!(tokenizer(Language::Japanese).name(), "japanese_lindera");
    }
}
