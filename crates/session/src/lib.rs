//! Commit bookkeeping for a listening session
//!
//! The parsing core is stateless and re-parses the whole transcript on
//! every recognizer update, so the same completed items come back call
//! after call. Deciding which of them are *new* is the caller's job, not
//! the parser's — this crate is that caller-side ledger. Items are tracked
//! by a stable fingerprint of (name, quantity, rate); the trailing live
//! item is never committed because it is still being spoken.

use std::collections::HashSet;

use voice_billing_core::ParsedItem;

/// Split a parse result into the committed-candidate prefix and the live
/// tail. The segmenter always surfaces in-progress speech as the last
/// element, so the tail is simply the final item, when present.
pub fn split_live(items: &[ParsedItem]) -> (&[ParsedItem], Option<&ParsedItem>) {
    match items.split_last() {
        Some((live, completed)) => (completed, Some(live)),
        None => (&[], None),
    }
}

/// Stable identity of a parsed item for duplicate suppression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemFingerprint {
    name: Option<String>,
    quantity: Option<String>,
    /// Rate in paise-like fixed precision so float noise cannot split
    /// identical items into two fingerprints.
    rate_hundredths: Option<i64>,
}

impl ItemFingerprint {
    pub fn of(item: &ParsedItem) -> Self {
        Self {
            name: item.name.as_ref().map(|n| n.trim().to_lowercase()),
            quantity: item.quantity.as_ref().map(|q| q.trim().to_lowercase()),
            rate_hundredths: item.rate.map(|r| (r * 100.0).round() as i64),
        }
    }
}

/// Tracks which completed items have already been handed to the caller
/// during this listening session.
#[derive(Debug, Default)]
pub struct CommitLedger {
    committed: HashSet<ItemFingerprint>,
}

impl CommitLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the completed items from a fresh parse result that have not
    /// been committed before, marking them committed. The live tail is
    /// ignored entirely; pass the full result straight from the parser.
    pub fn take_uncommitted(&mut self, items: &[ParsedItem]) -> Vec<ParsedItem> {
        let (completed, _live) = split_live(items);

        let mut fresh = Vec::new();
        for item in completed {
            if !item.is_substantial() {
                continue;
            }
            let fingerprint = ItemFingerprint::of(item);
            if self.committed.insert(fingerprint) {
                tracing::debug!(name = ?item.name, "committing new item");
                fresh.push(item.clone());
            }
        }
        fresh
    }

    /// Number of items committed so far this session.
    pub fn committed_count(&self) -> usize {
        self.committed.len()
    }

    /// Forget everything; call when a new listening session starts.
    pub fn reset(&mut self) {
        self.committed.clear();
    }
}
