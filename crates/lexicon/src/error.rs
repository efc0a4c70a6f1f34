//! Lexicon loading and validation errors

use thiserror::Error;

/// Errors raised while loading or validating a lexicon set.
///
/// These only occur at startup / locale-swap time; the parsing engines
/// themselves are total and never fail.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// Lexicon file does not exist
    #[error("lexicon file not found: {0}")]
    FileNotFound(String),

    /// Reading the file failed
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization failed
    #[error("failed to parse lexicon file: {0}")]
    Parse(String),

    /// A table entry violates the lexicon contract
    #[error("invalid lexicon entry: {0}")]
    InvalidEntry(String),
}

/// Result type for lexicon operations
pub type Result<T> = std::result::Result<T, LexiconError>;
