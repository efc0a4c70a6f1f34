//! Spoken-number normalization
//!
//! Replaces spoken number words (both languages, dialect and mis-hearing
//! variants included) with digit strings, so the keyword patterns only ever
//! deal with digits. Runs over whole transcripts before segmentation and
//! again over individual segments; the pass is idempotent.

use std::collections::HashMap;

use regex::Regex;
use voice_billing_lexicon::LexiconSet;

/// Word-boundary number-word replacer compiled from a lexicon set.
#[derive(Debug)]
pub struct NumberNormalizer {
    /// Alternation over every number word, longest first.
    word_pattern: Regex,
    /// Spoken word → numeric value, both languages merged.
    values: HashMap<String, f64>,
    /// `50 5` → `55` after per-word substitution.
    tens_units: Regex,
}

impl NumberNormalizer {
    pub fn from_lexicon(lexicon: &LexiconSet) -> Self {
        let mut values: HashMap<String, f64> = HashMap::new();
        for (word, value) in lexicon.tamil_numbers.iter().chain(lexicon.english_numbers.iter()) {
            values.insert(word.clone(), *value);
        }

        // Longest first so compounds like ஒன்றரை are not eaten by their
        // suffix words; ties break lexicographically for determinism.
        let mut words: Vec<&String> = values.keys().collect();
        words.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let word_pattern = Regex::new(&format!(r"\b(?:{alternation})\b")).unwrap();
        let tens_units = Regex::new(r"\b([2-9]0)\s+([1-9])\b").unwrap();

        Self {
            word_pattern,
            values,
            tens_units,
        }
    }

    /// Lowercase the text and substitute every spoken number word with its
    /// digit string, then fold adjacent tens+units pairs ("twenty five" →
    /// `20 5` → `25`).
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let substituted = self
            .word_pattern
            .replace_all(&lowered, |caps: &regex::Captures<'_>| {
                match self.values.get(&caps[0]) {
                    Some(value) => format_number(*value),
                    None => caps[0].to_string(),
                }
            });

        self.tens_units
            .replace_all(&substituted, |caps: &regex::Captures<'_>| {
                let tens: i64 = caps[1].parse().unwrap_or(0);
                let unit: i64 = caps[2].parse().unwrap_or(0);
                (tens + unit).to_string()
            })
            .into_owned()
    }
}

/// Digits without a trailing `.0` for whole values, plain decimal otherwise.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
