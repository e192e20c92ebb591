//! Source code tokenizer implementation.
//!
//! Splits identifiers the way programmers read them:
//!
//! ```text
//! camelCaseHTTPServer  ->  camel | Case | HTTP | Server
//! snake_case_name      ->  snake | case | name
//! utf8Decoder          ->  utf | 8 | Decoder
//! ```

use super::Tokenizer;
use super::simple::runs;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

/// A tokenizer for identifiers in source code.
///
/// Non-alphanumeric characters separate tokens as in the `default` tokenizer.
/// Inside an alphanumeric run a new token starts on:
///
/// - a lowercase-to-uppercase transition (`camelCase`)
/// - a letter-to-digit or digit-to-letter transition (`utf8`)
/// - the last uppercase letter of an uppercase run that is followed by a
///   lowercase letter, so the acronym stays whole and that letter begins the
///   next word (`HTTPServer` -> `HTTP`, `Server`)
///
/// Folding and lowercasing are left to the filter pipeline.
#[derive(Clone, Debug, Default)]
pub struct SourceCodeTokenizer;

impl SourceCodeTokenizer {
    /// Create a new source code tokenizer.
    pub fn new() -> Self {
        SourceCodeTokenizer
    }
}

impl Tokenizer for SourceCodeTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let mut tokens = Vec::new();

        for (run_start, run_end) in runs(text, char::is_alphanumeric) {
            let chars: Vec<(usize, char)> = text[run_start..run_end]
                .char_indices()
                .map(|(offset, c)| (run_start + offset, c))
                .collect();

            let mut word_start = run_start;
            for k in 1..chars.len() {
                let (offset, current) = chars[k];
                let previous = chars[k - 1].1;
                let next = chars.get(k + 1).map(|&(_, c)| c);

                if is_word_break(previous, current, next) {
                    tokens.push(Token::from_span(text, tokens.len(), word_start, offset));
                    word_start = offset;
                }
            }
            tokens.push(Token::from_span(text, tokens.len(), word_start, run_end));
        }

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "source_code"
    }
}

/// Whether a word boundary falls between `previous` and `current`.
fn is_word_break(previous: char, current: char, next: Option<char>) -> bool {
    if previous.is_lowercase() && current.is_uppercase() {
        return true;
    }
    if (previous.is_alphabetic() && current.is_numeric())
        || (previous.is_numeric() && current.is_alphabetic())
    {
        return true;
    }
    previous.is_uppercase() && current.is_uppercase() && next.is_some_and(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        SourceCodeTokenizer::new()
            .tokenize(text)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_camel_case_with_acronym() {
        assert_eq!(
            texts("camelCaseHTTPServer"),
            vec!["camel", "Case", "HTTP", "Server"]
        );
    }

    #[test]
    fn test_acronym_at_start_and_end() {
        assert_eq!(texts("HTTPServer"), vec!["HTTP", "Server"]);
        assert_eq!(texts("getHTTP"), vec!["get", "HTTP"]);
        assert_eq!(texts("ABCd"), vec!["AB", "Cd"]);
    }

    #[test]
    fn test_snake_case_and_punctuation() {
        assert_eq!(
            texts("snake_case_name = foo.barBaz();"),
            vec!["snake", "case", "name", "foo", "bar", "Baz"]
        );
    }

    #[test]
    fn test_digit_transitions() {
        assert_eq!(texts("utf8Decoder"), vec!["utf", "8", "Decoder"]);
        assert_eq!(texts("v2beta1"), vec!["v", "2", "beta", "1"]);
    }

    #[test]
    fn test_offsets_and_positions() {
        let tokens: Vec<Token> = SourceCodeTokenizer::new().tokenize("fooBar baz").collect();

        assert_eq!(tokens[1].text, "Bar");
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[1].end_offset, 6);
        assert_eq!(tokens[2].position, 2);
        assert_eq!(tokens[2].start_offset, 7);
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(texts("XmlHttpRequest"), vec!["Xml", "Http", "Request"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(SourceCodeTokenizer::new().name(), "source_code");
    }
}
