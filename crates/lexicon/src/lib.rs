//! Lexicon and correction tables for the voice billing parser
//!
//! All recognition targets live here as data: spoken-number words, quantity
//! and rate keywords, the grocery item lexicon, the colloquial→formal
//! (diglossia) map and the exact recognizer-error corrections. The tables
//! are aggregated into one immutable [`LexiconSet`] that is built once at
//! startup and injected into the engines — swapping locale means swapping
//! the set, never touching the algorithms.

mod builtin;
mod error;

pub use error::{LexiconError, Result};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// The complete, immutable table set the parsing engines run against.
///
/// `Default` yields the built-in Tamil/English grocery tables; a deployment
/// can override any section from YAML. Two kinds of correction mapping are
/// kept deliberately distinct: exact-match dictionaries (`diglossia`,
/// `asr_corrections`) and the fuzzy-match corpus (`items`), so exact
/// replacement and similarity-threshold correction never blur together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSet {
    /// Tamil spoken-number words → numeric value
    #[serde(default = "builtin::tamil_numbers")]
    pub tamil_numbers: HashMap<String, f64>,

    /// English spoken-number words (incl. mis-hearings) → numeric value
    #[serde(default = "builtin::english_numbers")]
    pub english_numbers: HashMap<String, f64>,

    /// Quantity unit keywords (weight, volume, count), both languages
    #[serde(default = "builtin::quantity_units")]
    pub quantity_units: Vec<String>,

    /// Price/rate keywords (rupee variants etc.), both languages
    #[serde(default = "builtin::rate_keywords")]
    pub rate_keywords: Vec<String>,

    /// Grocery item lexicon; declaration order is the fuzzy tie-break order
    #[serde(default = "builtin::grocery_items")]
    pub items: Vec<String>,

    /// Colloquial spoken Tamil → formal written Tamil (exact match)
    #[serde(default = "builtin::diglossia_map")]
    pub diglossia: HashMap<String, String>,

    /// Misheard token → canonical token (exact match)
    #[serde(default = "builtin::asr_corrections")]
    pub asr_corrections: HashMap<String, String>,

    /// English loanwords passed through unchanged inside Tamil speech
    #[serde(default = "builtin::english_loanwords")]
    pub loanwords: Vec<String>,
}

impl Default for LexiconSet {
    fn default() -> Self {
        Self {
            tamil_numbers: builtin::tamil_numbers(),
            english_numbers: builtin::english_numbers(),
            quantity_units: builtin::quantity_units(),
            rate_keywords: builtin::rate_keywords(),
            items: builtin::grocery_items(),
            diglossia: builtin::diglossia_map(),
            asr_corrections: builtin::asr_corrections(),
            loanwords: builtin::english_loanwords(),
        }
    }
}

impl LexiconSet {
    /// Built-in tables, validated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon set from a YAML file. Missing sections fall back to
    /// the built-in tables; the merged set is validated before use.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(LexiconError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load a lexicon set from a YAML string.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let set: LexiconSet =
            serde_yaml::from_str(content).map_err(|e| LexiconError::Parse(e.to_string()))?;
        set.validate()?;
        Ok(set)
    }

    /// Check the lexicon contract: no empty keywords, no correction entry
    /// mapping to an empty string, no non-positive nonsense in the keyword
    /// lists. Logs a warning for suspicious-but-legal entries.
    pub fn validate(&self) -> Result<()> {
        for (table, map) in [("diglossia", &self.diglossia), ("asr_corrections", &self.asr_corrections)] {
            for (k, v) in map {
                if k.is_empty() || v.is_empty() {
                    return Err(LexiconError::InvalidEntry(format!(
                        "{table} maps {k:?} -> {v:?}; empty strings are not allowed"
                    )));
                }
                if k == v {
                    tracing::warn!(table, key = %k, "correction entry maps a token to itself");
                }
            }
        }

        for (table, list) in [
            ("quantity_units", &self.quantity_units),
            ("rate_keywords", &self.rate_keywords),
            ("items", &self.items),
            ("loanwords", &self.loanwords),
        ] {
            if list.iter().any(|s| s.trim().is_empty()) {
                return Err(LexiconError::InvalidEntry(format!(
                    "{table} contains an empty keyword"
                )));
            }
        }

        for (table, map) in [
            ("tamil_numbers", &self.tamil_numbers),
            ("english_numbers", &self.english_numbers),
        ] {
            for (word, value) in map {
                if word.is_empty() {
                    return Err(LexiconError::InvalidEntry(format!(
                        "{table} contains an empty number word"
                    )));
                }
                if !value.is_finite() || *value < 0.0 {
                    return Err(LexiconError::InvalidEntry(format!(
                        "{table} maps {word:?} to invalid value {value}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// True if the token is on the English-loanword allowlist
    /// (case-insensitive).
    pub fn is_loanword(&self, token: &str) -> bool {
        let lower = token.to_lowercase();
        self.loanwords.iter().any(|w| *w == lower)
    }

    /// Process-wide shared default lexicon.
    pub fn shared() -> Arc<LexiconSet> {
        static DEFAULT: Lazy<Arc<LexiconSet>> = Lazy::new(|| Arc::new(LexiconSet::default()));
        Arc::clone(&DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_validates() {
        LexiconSet::default().validate().expect("built-in tables must be valid");
    }

    #[test]
    fn test_shared_is_same_instance() {
        let a = LexiconSet::shared();
        let b = LexiconSet::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_yaml_override_merges_with_builtins() {
        let yaml = r#"
items:
  - "தக்காளி"
  - "tomato"
"#;
        let set = LexiconSet::from_yaml_str(yaml).unwrap();
        assert_eq!(set.items.len(), 2);
        // Untouched sections keep the built-ins
        assert!(set.tamil_numbers.contains_key("இரண்டு"));
        assert!(set.rate_keywords.iter().any(|k| k == "rupees"));
    }

    #[test]
    fn test_empty_correction_value_rejected() {
        let yaml = r#"
diglossia:
  "ரெண்டு": ""
"#;
        let err = LexiconSet::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry(_)));
    }

    #[test]
    fn test_missing_file_error() {
        let err = LexiconSet::from_yaml_file("/nonexistent/lexicon.yaml").unwrap_err();
        assert!(matches!(err, LexiconError::FileNotFound(_)));
    }

    #[test]
    fn test_loanword_lookup_is_case_insensitive() {
        let set = LexiconSet::default();
        assert!(set.is_loanword("kg"));
        assert!(set.is_loanword("KG"));
        assert!(!set.is_loanword("தக்காளி"));
    }
}
