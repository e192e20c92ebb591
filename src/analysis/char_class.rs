//! Character classification by Unicode block and category.
//!
//! Shared by the script-aware tokenizers and by the dictionary segmenter's
//! unknown-word handling.

/// Coarse classification of a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Any Unicode whitespace
    Whitespace,
    /// Alphabetic characters outside the CJK blocks (Latin, Cyrillic, Greek, ...)
    Alpha,
    /// Numeric characters
    Numeric,
    /// Han ideographs
    Ideograph,
    /// Japanese Hiragana
    Hiragana,
    /// Japanese Katakana (including the prolonged sound mark)
    Katakana,
    /// Korean Hangul syllables and Jamo
    Hangul,
    /// Everything else: punctuation, symbols, controls
    Other,
}

impl CharClass {
    /// Classify a character.
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if is_ideograph(c) {
            CharClass::Ideograph
        } else if matches!(c, '\u{3040}'..='\u{309F}') {
            CharClass::Hiragana
        } else if matches!(c, '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}')
        {
            CharClass::Katakana
        } else if is_hangul(c) {
            CharClass::Hangul
        } else if c.is_numeric() {
            CharClass::Numeric
        } else if c.is_alphabetic() {
            CharClass::Alpha
        } else {
            CharClass::Other
        }
    }

    /// Whether the class belongs to a CJK script.
    pub fn is_cjk(self) -> bool {
        matches!(
            self,
            CharClass::Ideograph | CharClass::Hiragana | CharClass::Katakana | CharClass::Hangul
        )
    }

    /// Whether consecutive characters of this class may form one unknown word.
    pub fn is_groupable(self) -> bool {
        matches!(
            self,
            CharClass::Alpha | CharClass::Numeric | CharClass::Katakana
        )
    }
}

/// Han ideograph blocks.
pub fn is_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}' | // CJK Extension E
        '\u{2CEB0}'..='\u{2EBEF}' | // CJK Extension F
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{3005}' | '\u{3007}'     // iteration mark, ideographic zero
    )
}

fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{AC00}'..='\u{D7AF}' | // Hangul Syllables
        '\u{1100}'..='\u{11FF}' | // Hangul Jamo
        '\u{3130}'..='\u{318F}'   // Hangul Compatibility Jamo
    )
}

/// Whether a character is CJK by block membership.
pub fn is_cjk(c: char) -> bool {
    CharClass::of(c).is_cjk()
}
