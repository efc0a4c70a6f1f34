//! Voice transcript parsing for grocery billing
//!
//! Turns the live, unsegmented speech-recognizer transcript (mixed
//! Tamil/English) into ordered line items with a name, quantity and
//! per-unit rate:
//! - spoken numbers are normalized to digits across both languages,
//! - price expressions (or, failing that, known item names) bound the
//!   individual items,
//! - each bounded segment yields quantity, spoken total price and a
//!   formalized item name,
//! - the trailing, still-incomplete speech is always surfaced as the last
//!   ("live") item.
//!
//! The whole pipeline is synchronous and stateless: call
//! [`BillingParser::parse_continuous_input`] again on every transcript
//! update.
//!
//! ```
//! use voice_billing_parser::BillingParser;
//!
//! let parser = BillingParser::with_default_lexicon();
//! let items = parser.parse_continuous_input("tomato 2 kg 50 rupees");
//! assert_eq!(items[0].name.as_deref(), Some("Tomato"));
//! assert_eq!(items[0].rate, Some(25.0));
//! ```

pub mod numbers;
pub mod patterns;
pub mod segment;
pub mod stream;

pub use numbers::NumberNormalizer;
pub use patterns::KeywordPatterns;
pub use segment::SegmentParser;
pub use stream::StreamSegmenter;

use std::sync::Arc;

use voice_billing_core::ParsedItem;
use voice_billing_lexicon::LexiconSet;
use voice_billing_text_processing::Formalizer;

/// The two-entry-point facade the application layers talk to.
#[derive(Debug, Clone)]
pub struct BillingParser {
    formalizer: Formalizer,
    segmenter: StreamSegmenter,
}

impl BillingParser {
    /// Build a parser over an injected lexicon set, compiling all keyword
    /// patterns once.
    pub fn new(lexicon: Arc<LexiconSet>) -> Self {
        let numbers = Arc::new(NumberNormalizer::from_lexicon(&lexicon));
        let patterns = Arc::new(KeywordPatterns::from_lexicon(&lexicon));
        let formalizer = Formalizer::new(Arc::clone(&lexicon));
        let segment_parser = SegmentParser::new(
            Arc::clone(&numbers),
            Arc::clone(&patterns),
            formalizer.clone(),
        );
        let segmenter = StreamSegmenter::new(numbers, patterns, segment_parser);

        Self {
            formalizer,
            segmenter,
        }
    }

    /// Parser over the built-in Tamil/English grocery lexicon.
    pub fn with_default_lexicon() -> Self {
        Self::new(LexiconSet::shared())
    }

    /// Parse the full transcript heard so far into ordered line items; the
    /// last element is the live, possibly incomplete item. Called by the UI
    /// layer on every transcript change.
    pub fn parse_continuous_input(&self, transcript: &str) -> Vec<ParsedItem> {
        self.segmenter.parse_continuous(transcript)
    }

    /// Formalize text for rendering (PDF export, final display).
    pub fn formalize_for_display(&self, text: &str) -> String {
        self.formalizer.formalize(text)
    }
}
