//! Correction events emitted by the formalization engine

use serde::{Deserialize, Serialize};

/// What kind of rewrite produced a correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrectionKind {
    /// Colloquial spoken form mapped to its formal written form.
    Diglossia,
    /// Noisy recognizer output fuzzily matched to a lexicon entry.
    AsrError,
}

/// Record of one token rewrite made while formalizing text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEvent {
    /// Token as it appeared in the input.
    pub original: String,
    /// Token after correction.
    pub corrected: String,
    /// Which table produced the rewrite.
    pub kind: CorrectionKind,
    /// 1.0 for exact diglossia hits, the similarity score for fuzzy hits.
    pub confidence: f64,
}

impl CorrectionEvent {
    pub fn diglossia(original: impl Into<String>, corrected: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            corrected: corrected.into(),
            kind: CorrectionKind::Diglossia,
            confidence: 1.0,
        }
    }

    pub fn asr_error(
        original: impl Into<String>,
        corrected: impl Into<String>,
        confidence: f64,
    ) -> Self {
        Self {
            original: original.into(),
            corrected: corrected.into(),
            kind: CorrectionKind::AsrError,
            confidence,
        }
    }
}
