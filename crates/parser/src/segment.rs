//! Single-segment field extraction
//!
//! Takes one bounded slice of transcript (one spoken line item) and pulls
//! out the quantity, the spoken price and the residual item name, in that
//! order. Each step strips what it matched so the later steps only see the
//! leftovers. Total over any input: a noise segment simply yields a
//! `ParsedItem` with every field absent.

use std::sync::Arc;

use voice_billing_core::{contains_tamil, ParsedItem};
use voice_billing_text_processing::Formalizer;

use crate::numbers::NumberNormalizer;
use crate::patterns::KeywordPatterns;

/// Parser for one already-bounded transcript slice.
#[derive(Debug, Clone)]
pub struct SegmentParser {
    numbers: Arc<NumberNormalizer>,
    patterns: Arc<KeywordPatterns>,
    formalizer: Formalizer,
}

struct QuantityMatch {
    /// Original-form quantity string, magnitude and unit joined by a space.
    text: String,
    magnitude: f64,
}

impl SegmentParser {
    pub fn new(
        numbers: Arc<NumberNormalizer>,
        patterns: Arc<KeywordPatterns>,
        formalizer: Formalizer,
    ) -> Self {
        Self {
            numbers,
            patterns,
            formalizer,
        }
    }

    /// Extract a line item from one segment of speech.
    pub fn parse(&self, segment: &str) -> ParsedItem {
        // Step 1: lowercase + spoken numbers to digits.
        let mut text = self.numbers.normalize(segment);

        // Step 2: quantity, then step 3: spoken total price.
        let quantity = self.extract_quantity(&mut text);
        let total_price = self.extract_price(&mut text);

        // Step 4: per-unit rate. The spoken price covers the whole
        // quantity, so divide; a missing or unusable magnitude divides by 1.
        let divisor = quantity
            .as_ref()
            .map(|q| q.magnitude)
            .filter(|m| *m > 0.0)
            .unwrap_or(1.0);
        let rate = match total_price {
            Some(total) => Some(total / divisor),
            // No price keyword heard: if a quantity was present, a leftover
            // bare number is taken as the spoken total.
            None if quantity.is_some() => self.extract_bare_number(&mut text).map(|n| n / divisor),
            None => None,
        };

        // Steps 5–6: the residue is the item name.
        let name = self.extract_name(&text);

        ParsedItem {
            name,
            quantity: quantity.map(|q| q.text),
            rate,
        }
    }

    fn extract_quantity(&self, text: &mut String) -> Option<QuantityMatch> {
        for pattern in [
            &self.patterns.quantity_num_first,
            &self.patterns.quantity_unit_first,
        ] {
            if let Some(caps) = pattern.captures(text) {
                let num = caps.name("num").map(|m| m.as_str().to_string())?;
                let unit = caps.name("unit").map(|m| m.as_str().to_string())?;
                let range = caps.get(0).map(|m| m.range())?;
                let magnitude = num.parse::<f64>().unwrap_or(1.0);
                text.replace_range(range, " ");
                return Some(QuantityMatch {
                    text: format!("{num} {unit}"),
                    magnitude,
                });
            }
        }

        // Secondary pass: a Tamil fraction word glued to a unit survived
        // number normalization; keep its original form in the output.
        if let Some(caps) = self.patterns.fraction_quantity.captures(text) {
            let whole = caps.get(0)?;
            let original = whole.as_str().to_string();
            let magnitude = caps
                .name("frac")
                .and_then(|m| KeywordPatterns::fraction_value(m.as_str()))
                .unwrap_or(1.0);
            let range = whole.range();
            text.replace_range(range, " ");
            return Some(QuantityMatch {
                text: original,
                magnitude,
            });
        }

        None
    }

    fn extract_price(&self, text: &mut String) -> Option<f64> {
        // First matching pattern wins.
        for pattern in [&self.patterns.price_num_first, &self.patterns.price_kw_first] {
            if let Some(caps) = pattern.captures(text) {
                let num = caps.name("num")?.as_str().to_string();
                let range = caps.get(0)?.range();
                text.replace_range(range, " ");
                return num.parse::<f64>().ok();
            }
        }
        None
    }

    fn extract_bare_number(&self, text: &mut String) -> Option<f64> {
        let m = self.patterns.bare_number.find(text)?;
        let range = m.range();
        let value = m.as_str().parse::<f64>().ok();
        text.replace_range(range, " ");
        value
    }

    /// Strip everything that cannot be part of a name, then formalize Tamil
    /// or capitalize Latin. Digits and punctuation never survive, so a
    /// numbers-only segment yields no name.
    fn extract_name(&self, text: &str) -> Option<String> {
        let filtered: String = text
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic()
                    || matches!(c as u32, 0x0B80..=0x0BFF)
                    || c == '-'
                    || c.is_whitespace()
                {
                    c
                } else {
                    ' '
                }
            })
            .collect();
        let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");

        let has_letters = collapsed
            .chars()
            .any(|c| c.is_ascii_alphabetic() || matches!(c as u32, 0x0B80..=0x0BFF));
        if !has_letters {
            return None;
        }

        if contains_tamil(&collapsed) {
            Some(self.formalizer.formalize(&collapsed))
        } else {
            Some(capitalize(&collapsed))
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
