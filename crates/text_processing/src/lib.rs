//! Text processing for the voice billing parser
//!
//! This crate hosts the two linguistic engines the transcript parser leans
//! on:
//! - **Similarity matching**: Levenshtein-based fuzzy lookup against the
//!   domain lexicon, shared by the formalizer and the segmenter.
//! - **Formalization**: canonicalizes Unicode/whitespace/punctuation, maps
//!   colloquial spoken Tamil to formal written Tamil, applies exact and
//!   fuzzy recognizer-error corrections, and runs advisory orthography
//!   checks.
//!
//! Everything here is synchronous and pure over the injected
//! [`voice_billing_lexicon::LexiconSet`].

pub mod formalize;
pub mod normalize;
pub mod orthography;
pub mod similarity;

pub use formalize::{FormalizeReport, Formalizer};
pub use normalize::canonicalize;
pub use orthography::{OrthographyDiagnostic, OrthographyIssue};
pub use similarity::{find_closest_match, levenshtein, similarity};
