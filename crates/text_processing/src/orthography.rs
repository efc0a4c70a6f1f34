//! Tamil orthography sanity checks
//!
//! Lightweight signals that a token came out of the recognizer mangled.
//! Advisory only: diagnostics are collected and reported, the token is
//! never altered.

use serde::{Deserialize, Serialize};

/// Tamil virama (puḷḷi), the mark that strips a consonant's inherent vowel.
const VIRAMA: char = '\u{0BCD}';

/// True for an independent (uyir) vowel glyph அ–ஔ.
pub fn is_uyir_vowel(c: char) -> bool {
    matches!(c as u32, 0x0B85..=0x0B94)
}

/// True for a consonant (mei base) glyph க–ஹ.
pub fn is_mei_consonant(c: char) -> bool {
    matches!(c as u32, 0x0B95..=0x0BB9)
}

/// True for the virama mark.
pub fn is_virama(c: char) -> bool {
    c == VIRAMA
}

/// What looked wrong about a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrthographyIssue {
    /// Token begins with a bare consonant+virama (no Tamil word starts with
    /// a pure consonant), e.g. "க்கா...".
    LeadingVirama,
    /// A standalone vowel glyph strictly inside the token; independent
    /// vowels only occur word-initially, so this usually means two words
    /// were glued together.
    InteriorStandaloneVowel,
}

/// One advisory diagnostic for one token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrthographyDiagnostic {
    pub token: String,
    pub issue: OrthographyIssue,
}

/// Run the orthography checks over a single token.
pub fn check_token(token: &str) -> Vec<OrthographyDiagnostic> {
    let chars: Vec<char> = token.chars().collect();
    let mut diagnostics = Vec::new();

    if chars.len() >= 2 && is_mei_consonant(chars[0]) && is_virama(chars[1]) {
        diagnostics.push(OrthographyDiagnostic {
            token: token.to_string(),
            issue: OrthographyIssue::LeadingVirama,
        });
    }

    if chars.len() >= 3 {
        let interior = &chars[1..chars.len() - 1];
        if interior.iter().any(|&c| is_uyir_vowel(c)) {
            diagnostics.push(OrthographyDiagnostic {
                token: token.to_string(),
                issue: OrthographyIssue::InteriorStandaloneVowel,
            });
        }
    }

    diagnostics
}
