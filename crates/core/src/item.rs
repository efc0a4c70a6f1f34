//! Parsed line item types

use serde::{Deserialize, Serialize};

/// One line item extracted from the spoken transcript.
///
/// Every field is optional: the parser never invents a value it could not
/// find, so downstream consumers can distinguish "rate is 0" from "rate
/// unknown". The trailing live item in a parse result routinely has one or
/// more fields absent while the speaker is mid-sentence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Canonical item label: capitalized for Latin script, formalized Tamil
    /// otherwise.
    pub name: Option<String>,

    /// Original-form quantity string combining magnitude and unit,
    /// e.g. "2 kg" or "0.5 கிலோ".
    pub quantity: Option<String>,

    /// Per-unit price: the spoken total divided by the quantity magnitude
    /// (divisor 1 when no quantity was heard). Never the raw spoken total
    /// when a quantity is known.
    pub rate: Option<f64>,
}

impl ParsedItem {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.rate.is_none()
    }

    /// True when the item carries at least a name or a quantity.
    ///
    /// This is the keep/drop rule the segmenter applies to closed segments;
    /// pure-noise slices fail it.
    pub fn is_substantial(&self) -> bool {
        self.name.is_some() || self.quantity.is_some()
    }

    /// True when all three fields were extracted.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.quantity.is_some() && self.rate.is_some()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_item() {
        let item = ParsedItem::default();
        assert!(item.is_empty());
        assert!(!item.is_substantial());
        assert!(!item.is_complete());
    }

    #[test]
    fn test_substantial_with_quantity_only() {
        let item = ParsedItem::default().with_quantity("2 kg");
        assert!(item.is_substantial());
        assert!(!item.is_complete());
    }

    #[test]
    fn test_complete_item() {
        let item = ParsedItem::default()
            .with_name("Tomato")
            .with_quantity("2 kg")
            .with_rate(25.0);
        assert!(item.is_complete());
        assert!(!item.is_empty());
    }

    #[test]
    fn test_rate_alone_is_not_substantial() {
        let item = ParsedItem::default().with_rate(10.0);
        assert!(!item.is_substantial());
        assert!(!item.is_empty());
    }
}
