//! Core types for the voice billing transcript parser
//!
//! This crate provides the foundational types shared by the lexicon,
//! text-processing and parser crates:
//! - Parsed line items as extracted from speech
//! - Script detection for mixed Tamil/English input
//! - Correction events emitted by the formalization engine

pub mod correction;
pub mod item;
pub mod script;

pub use correction::{CorrectionEvent, CorrectionKind};
pub use item::ParsedItem;
pub use script::{contains_tamil, dominant_script, is_code_mixed, Script};
