//! Linguistic formalization engine
//!
//! Turns colloquial, noisy recognizer text into formal written Tamil (and
//! tidy English): Unicode/whitespace/punctuation canonicalization, the
//! colloquial→formal diglossia mapping, exact recognizer-error corrections,
//! fuzzy lexicon correction, and advisory orthography validation. Pure over
//! its fixed tables — always returns best-effort text, never fails.

use std::sync::Arc;

use voice_billing_core::{contains_tamil, CorrectionEvent};
use voice_billing_lexicon::LexiconSet;

use crate::normalize::canonicalize;
use crate::orthography::{check_token, OrthographyDiagnostic};
use crate::similarity::find_closest_match;

/// Similarity threshold for fuzzy lexicon correction.
const FUZZY_THRESHOLD: f64 = 0.75;

/// Result of a formalization pass: the corrected text plus everything the
/// engine noticed along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct FormalizeReport {
    /// Formalized text.
    pub text: String,
    /// Token rewrites that were applied, in input order.
    pub corrections: Vec<CorrectionEvent>,
    /// Advisory orthography findings; these never alter the text.
    pub diagnostics: Vec<OrthographyDiagnostic>,
}

/// Colloquial→formal text engine over an injected lexicon set.
#[derive(Debug, Clone)]
pub struct Formalizer {
    lexicon: Arc<LexiconSet>,
}

impl Formalizer {
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        Self { lexicon }
    }

    /// Formalize text, returning only the corrected string.
    pub fn formalize(&self, text: &str) -> String {
        self.formalize_with_report(text).text
    }

    /// Formalize text and report every correction and diagnostic.
    pub fn formalize_with_report(&self, text: &str) -> FormalizeReport {
        let canonical = canonicalize(text);

        let mut out_tokens: Vec<String> = Vec::new();
        let mut corrections = Vec::new();
        let mut diagnostics = Vec::new();

        for token in canonical.split(' ').filter(|t| !t.is_empty()) {
            let corrected = self.formalize_token(token, &mut corrections);
            diagnostics.extend(check_token(&corrected));
            out_tokens.push(corrected);
        }

        FormalizeReport {
            text: out_tokens.join(" "),
            corrections,
            diagnostics,
        }
    }

    fn formalize_token(&self, token: &str, corrections: &mut Vec<CorrectionEvent>) -> String {
        // Numbers and bare punctuation pass through every stage unchanged.
        if is_numeric_token(token) || is_punctuation_token(token) {
            return token.to_string();
        }

        // Code-mixing guard: English loanwords stay exactly as spoken.
        if self.lexicon.is_loanword(token) {
            return token.to_string();
        }

        // Diglossia: exact lookup, case-sensitive first, then lower-cased.
        if let Some(formal) = self.exact_lookup(&self.lexicon.diglossia, token) {
            tracing::trace!(original = %token, corrected = %formal, "diglossia mapping");
            corrections.push(CorrectionEvent::diglossia(token, formal.clone()));
            return formal;
        }

        // Exact recognizer-error corrections, same lookup discipline.
        if let Some(canonical) = self.exact_lookup(&self.lexicon.asr_corrections, token) {
            tracing::trace!(original = %token, corrected = %canonical, "exact correction");
            corrections.push(CorrectionEvent::asr_error(token, canonical.clone(), 1.0));
            return canonical;
        }

        // Fuzzy lexicon correction, Tamil tokens only.
        if contains_tamil(token) {
            let (matched, score) = find_closest_match(
                token,
                self.lexicon.items.iter().map(String::as_str),
                FUZZY_THRESHOLD,
            );
            if matched != token {
                tracing::trace!(original = %token, corrected = %matched, score, "fuzzy correction");
                corrections.push(CorrectionEvent::asr_error(token, matched.clone(), score));
                return matched;
            }
        }

        token.to_string()
    }

    fn exact_lookup(
        &self,
        table: &std::collections::HashMap<String, String>,
        token: &str,
    ) -> Option<String> {
        if let Some(hit) = table.get(token) {
            return Some(hit.clone());
        }
        let lower = token.to_lowercase();
        if lower != token {
            if let Some(hit) = table.get(&lower) {
                return Some(hit.clone());
            }
        }
        None
    }
}

fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        && token.chars().any(|c| c.is_ascii_digit())
}

fn is_punctuation_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}
