//! Continuous-transcript segmentation
//!
//! Splits the full live transcript into per-item segments. Price
//! expressions are the primary boundary signal: a spoken price closes the
//! item it belongs to. When no price has been spoken anywhere, known item
//! names are the fallback boundary. Whatever trails the last boundary is
//! the live, still-incomplete item and is always surfaced last.
//!
//! Stateless: every call re-parses the transcript it is given, so the
//! caller can re-invoke on every recognizer update.

use std::ops::Range;
use std::sync::Arc;

use voice_billing_core::ParsedItem;

use crate::numbers::NumberNormalizer;
use crate::patterns::KeywordPatterns;
use crate::segment::SegmentParser;

/// Segments a growing transcript and parses each slice.
#[derive(Debug, Clone)]
pub struct StreamSegmenter {
    numbers: Arc<NumberNormalizer>,
    patterns: Arc<KeywordPatterns>,
    segment_parser: SegmentParser,
}

impl StreamSegmenter {
    pub fn new(
        numbers: Arc<NumberNormalizer>,
        patterns: Arc<KeywordPatterns>,
        segment_parser: SegmentParser,
    ) -> Self {
        Self {
            numbers,
            patterns,
            segment_parser,
        }
    }

    /// Parse the full transcript into ordered line items, the last one
    /// possibly incomplete (the live item).
    pub fn parse_continuous(&self, transcript: &str) -> Vec<ParsedItem> {
        // Spoken numbers become digits before any boundary search, so the
        // price patterns see "50 rupees" even when "fifty rupees" was said.
        let normalized = self.numbers.normalize(transcript);
        if normalized.trim().is_empty() {
            return Vec::new();
        }

        let price_boundaries = self.price_boundaries(&normalized);
        if !price_boundaries.is_empty() {
            tracing::debug!(
                boundaries = price_boundaries.len(),
                "segmenting on price expressions"
            );
            self.parse_price_segments(&normalized, &price_boundaries)
        } else {
            tracing::debug!("no price expression; segmenting on item names");
            self.parse_name_segments(&normalized)
        }
    }

    /// Primary path: every price-expression match end closes a segment.
    fn parse_price_segments(&self, text: &str, boundaries: &[Range<usize>]) -> Vec<ParsedItem> {
        let mut items = Vec::new();
        let mut start = 0;

        for boundary in boundaries {
            let item = self.segment_parser.parse(&text[start..boundary.end]);
            if item.is_substantial() {
                items.push(item);
            }
            start = boundary.end;
        }

        // The tail is the live item: appended regardless of which fields it
        // managed to fill, as long as something was actually said.
        let tail = &text[start..];
        if !tail.trim().is_empty() {
            items.push(self.segment_parser.parse(tail));
        }

        items
    }

    /// Fallback path: recognized item names open segments; the text before
    /// the first name leads into that first segment, and everything up to
    /// the next name accumulates with the name that precedes it.
    fn parse_name_segments(&self, text: &str) -> Vec<ParsedItem> {
        let hits = self.name_boundaries(text);
        if hits.is_empty() {
            // No structure at all: the whole transcript is the live item.
            return vec![self.segment_parser.parse(text)];
        }

        let mut items = Vec::new();
        for (i, hit) in hits.iter().enumerate() {
            let seg_start = if i == 0 { 0 } else { hit.start };
            let seg_end = hits.get(i + 1).map_or(text.len(), |next| next.start);
            let item = self.segment_parser.parse(&text[seg_start..seg_end]);

            let is_live_tail = i + 1 == hits.len();
            if is_live_tail || item.is_substantial() {
                items.push(item);
            }
        }

        items
    }

    /// All price-expression matches, both orderings, earliest first;
    /// overlapping matches keep the earlier (then longer) one.
    fn price_boundaries(&self, text: &str) -> Vec<Range<usize>> {
        let mut ranges: Vec<Range<usize>> = self
            .patterns
            .price_num_first
            .find_iter(text)
            .chain(self.patterns.price_kw_first.find_iter(text))
            .map(|m| m.range())
            .collect();

        ranges.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut merged: Vec<Range<usize>> = Vec::new();
        for range in ranges {
            if merged.last().map_or(true, |last| range.start >= last.end) {
                merged.push(range);
            }
        }
        merged
    }

    /// Occurrences of known item names, longest name first so multi-word
    /// names claim their span before any substring name can.
    fn name_boundaries(&self, text: &str) -> Vec<Range<usize>> {
        let mut claimed: Vec<Range<usize>> = Vec::new();

        for pattern in &self.patterns.item_names {
            for m in pattern.regex.find_iter(text) {
                let range = m.range();
                let overlaps = claimed
                    .iter()
                    .any(|c| range.start < c.end && c.start < range.end);
                if !overlaps {
                    claimed.push(range);
                }
            }
        }

        claimed.sort_by_key(|r| r.start);
        claimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voice_billing_lexicon::LexiconSet;
    use voice_billing_text_processing::Formalizer;

    fn segmenter() -> StreamSegmenter {
        let lexicon = LexiconSet::shared();
        let numbers = Arc::new(NumberNormalizer::from_lexicon(&lexicon));
        let patterns = Arc::new(KeywordPatterns::from_lexicon(&lexicon));
        let parser = SegmentParser::new(
            Arc::clone(&numbers),
            Arc::clone(&patterns),
            Formalizer::new(lexicon),
        );
        StreamSegmenter::new(numbers, patterns, parser)
    }

    #[test]
    fn test_empty_transcript() {
        assert!(segmenter().parse_continuous("").is_empty());
        assert!(segmenter().parse_continuous("   ").is_empty());
    }

    #[test]
    fn test_single_completed_item() {
        let items = segmenter().parse_continuous("tomato 2 kg 50 rupees");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Tomato"));
        assert_eq!(items[0].rate, Some(25.0));
    }

    #[test]
    fn test_two_items_in_spoken_order() {
        let items = segmenter().parse_continuous("tomato 2 kg 50 rupees potato 1 kg 20 rupees");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("Tomato"));
        assert_eq!(items[0].rate, Some(25.0));
        assert_eq!(items[1].name.as_deref(), Some("Potato"));
        assert_eq!(items[1].rate, Some(20.0));
    }

    #[test]
    fn test_trailing_live_item_after_price() {
        let items = segmenter().parse_continuous("tomato 2 kg 50 rupees onion 1 kg");
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name.as_deref(), Some("Onion"));
        assert_eq!(items[1].quantity.as_deref(), Some("1 kg"));
        assert_eq!(items[1].rate, None);
    }

    #[test]
    fn test_no_price_single_live_item() {
        let items = segmenter().parse_continuous("tomato 2 kg");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Tomato"));
        assert_eq!(items[0].quantity.as_deref(), Some("2 kg"));
        assert_eq!(items[0].rate, None);
    }

    #[test]
    fn test_name_fallback_two_items() {
        let items = segmenter().parse_continuous("தக்காளி 2 கிலோ வெங்காயம் 1 கிலோ");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("தக்காளி"));
        assert_eq!(items[0].quantity.as_deref(), Some("2 கிலோ"));
        assert_eq!(items[1].name.as_deref(), Some("வெங்காயம்"));
        assert_eq!(items[1].quantity.as_deref(), Some("1 கிலோ"));
    }

    #[test]
    fn test_lead_in_attaches_to_first_item() {
        let items = segmenter().parse_continuous("fresh tomato 2 kg");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name.as_deref(), Some("Fresh tomato"));
    }

    #[test]
    fn test_tamil_transcript_with_price() {
        let items = segmenter().parse_continuous("இரண்டு கிலோ தக்காளி ஐம்பது ரூபாய்");
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.quantity.as_deref(), Some("2 கிலோ"));
        assert_eq!(item.rate, Some(25.0));
        assert_eq!(item.name.as_deref(), Some("தக்காளி"));
    }

    #[test]
    fn test_primary_wins_over_secondary() {
        // One price among three names: primary segmentation only, so the
        // second and third names merge into the live tail.
        let items = segmenter().parse_continuous("tomato 50 rupees potato onion");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name.as_deref(), Some("Tomato"));
        assert_eq!(items[1].name.as_deref(), Some("Potato onion"));
    }

    #[test]
    fn test_noise_only_transcript_yields_live_item() {
        let items = segmenter().parse_continuous("umm okay so");
        assert_eq!(items.len(), 1);
        // The live item carries whatever little was heard
        assert_eq!(items[0].quantity, None);
        assert_eq!(items[0].rate, None);
    }

    #[test]
    fn test_deterministic_reparse() {
        let s = segmenter();
        let transcript = "tomato 2 kg 50 rupees potato 1 kg 20 rupees onion";
        assert_eq!(s.parse_continuous(transcript), s.parse_continuous(transcript));
    }

    #[test]
    fn test_growing_transcript_keeps_committed_items_stable() {
        let s = segmenter();
        let first = s.parse_continuous("tomato 2 kg 50 rupees pot");
        let second = s.parse_continuous("tomato 2 kg 50 rupees potato 1 kg 20 rupees");
        assert_eq!(first[0], second[0]);
        assert_eq!(second.len(), 2);
        assert_eq!(second[1].rate, Some(20.0));
    }
}
