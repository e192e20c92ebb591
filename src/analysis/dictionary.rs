//! Morphological dictionaries for the Chinese, Korean and Japanese tokenizers.
//!
//! Each [`Language`] maps to one Lindera dictionary compiled into the binary:
//! CC-CEDICT for Chinese, ko-dic for Korean and UniDic for Japanese. A
//! directory holding a compiled Lindera dictionary can be loaded instead.
//! Loaded dictionaries are immutable; the registry wraps each [`Segmenter`]
//! in an `Arc` and shares it with every tokenizer of that language.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use lindera::dictionary::load_dictionary;
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use serde::{Deserialize, Serialize};

use crate::error::{KopisError, Result};

/// Languages with a dictionary-backed tokenizer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Chinese,
    Korean,
    Japanese,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Language; 3] = [Language::Chinese, Language::Korean, Language::Japanese];

    /// ISO 639-1 code, also the sub-directory name of a dictionary directory.
    pub fn code(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Korean => "ko",
            Language::Japanese => "ja",
        }
    }

    /// Name of the tokenizer variant backed by this language's dictionary.
    pub fn tokenizer_name(self) -> &'static str {
        match self {
            Language::Chinese => "chinese_lindera",
            Language::Korean => "korean_lindera",
            Language::Japanese => "japanese_lindera",
        }
    }

    /// URI of the dictionary embedded in the binary.
    pub fn embedded_uri(self) -> &'static str {
        match self {
            Language::Chinese => "embedded://cc-cedict",
            Language::Korean => "embedded://ko-dic",
            Language::Japanese => "embedded://unidic",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = KopisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zh" | "chinese" => Ok(Language::Chinese),
            "ko" | "korean" => Ok(Language::Korean),
            "ja" | "japanese" => Ok(Language::Japanese),
            _ => Err(KopisError::config(format!("Unknown dictionary language '{s}'"))),
        }
    }
}

/// Build a segmenter over the dictionary embedded for `language`.
pub fn load_embedded(language: Language) -> Result<Segmenter> {
    load(language, language.embedded_uri())
}

/// Build a segmenter over the compiled Lindera dictionary stored in `dir`.
pub fn load_dir<P: AsRef<Path>>(language: Language, dir: P) -> Result<Segmenter> {
    let dir = dir.as_ref();
    let path = dir.canonicalize().map_err(|e| {
        KopisError::resource(format!(
            "Failed to open {language} dictionary directory {}: {e}",
            dir.display()
        ))
    })?;

    load(language, &format!("file://{}", path.display()))
}

fn load(language: Language, uri: &str) -> Result<Segmenter> {
    let dictionary = load_dictionary(uri).map_err(|e| {
        KopisError::resource(format!("Failed to load {language} dictionary {uri}: {e}"))
    })?;

    Ok(Segmenter::new(Mode::Normal, dictionary, None))
}
