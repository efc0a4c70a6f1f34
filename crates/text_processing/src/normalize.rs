//! Unicode, whitespace and punctuation canonicalization
//!
//! Recognizer output arrives with decomposed combining sequences, zero-width
//! marks and smart punctuation. Everything downstream (lexicon lookups,
//! keyword regexes) assumes the canonical form produced here.

use unicode_normalization::UnicodeNormalization;

/// Invisible characters the recognizer and copy-paste paths smuggle in.
const INVISIBLES: &[char] = &[
    '\u{200B}', // zero width space
    '\u{200C}', // zero width non-joiner
    '\u{200D}', // zero width joiner
    '\u{2060}', // word joiner
    '\u{FEFF}', // BOM
];

/// Unicode canonical composition (NFC), so decomposed Tamil combining
/// sequences compare equal to the lexicon spellings.
pub fn nfc(text: &str) -> String {
    text.nfc().collect()
}

/// Strip invisible marks, turn non-breaking spaces into plain spaces,
/// collapse whitespace runs and trim.
pub fn normalize_whitespace(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !INVISIBLES.contains(c))
        .map(|c| if c == '\u{00A0}' { ' ' } else { c })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unify smart punctuation: curly quotes to straight, ellipsis variants to
/// `...`, en/em dashes to `-`.
pub fn normalize_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' => out.push('"'),
            '\u{2026}' => out.push_str("..."),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

/// The full canonicalization pass, in the order the formalizer requires:
/// NFC, then whitespace, then punctuation.
pub fn canonicalize(text: &str) -> String {
    normalize_punctuation(&normalize_whitespace(&nfc(text)))
}
