//! Compiled keyword patterns
//!
//! All quantity/price/item matching runs on regexes compiled once per
//! lexicon set, with keywords sorted longest-first so "kilogram" always
//! wins over "kg" wins over "g". Nothing is re-sorted or re-compiled per
//! call.

use regex::Regex;
use voice_billing_lexicon::LexiconSet;

/// The Tamil fraction words that may pair directly with a unit when the
/// number pass did not turn them into digits.
const FRACTION_WORDS: &[(&str, f64)] = &[("அரை", 0.5), ("கால்", 0.25), ("முக்கால்", 0.75)];

/// Units the fraction pattern recognizes.
const FRACTION_UNITS: &[&str] = &["கிலோ", "லிட்டர்", "kg", "l"];

/// One item-name matcher for secondary segmentation.
#[derive(Debug)]
pub struct ItemNamePattern {
    pub name: String,
    pub regex: Regex,
}

/// Every pattern the segment parser and segmenter need, compiled once.
#[derive(Debug)]
pub struct KeywordPatterns {
    /// `<number> <unit>` (number first)
    pub quantity_num_first: Regex,
    /// `<unit> <number>` (unit first)
    pub quantity_unit_first: Regex,
    /// Tamil fraction word + unit, e.g. "அரை கிலோ"
    pub fraction_quantity: Regex,
    /// `<number> <rate-keyword>`
    pub price_num_first: Regex,
    /// `<rate-keyword> <number>`
    pub price_kw_first: Regex,
    /// A bare digit run, for the no-keyword price fallback
    pub bare_number: Regex,
    /// Item-name matchers, longest name first
    pub item_names: Vec<ItemNamePattern>,
}

impl KeywordPatterns {
    pub fn from_lexicon(lexicon: &LexiconSet) -> Self {
        let units_after_number = alternation(&lexicon.quantity_units, Boundary::TrailOnly);
        let units_before_number = alternation(&lexicon.quantity_units, Boundary::LeadOnly);
        let rates_after_number = alternation(&lexicon.rate_keywords, Boundary::TrailOnly);
        let rates_before_number = alternation(&lexicon.rate_keywords, Boundary::LeadOnly);

        let quantity_num_first = Regex::new(&format!(
            r"\b(?P<num>\d+(?:\.\d+)?)\s*(?P<unit>{units_after_number})"
        ))
        .unwrap();
        let quantity_unit_first = Regex::new(&format!(
            r"(?P<unit>{units_before_number})\s*(?P<num>\d+(?:\.\d+)?)\b"
        ))
        .unwrap();

        let fraction_words = FRACTION_WORDS
            .iter()
            .map(|(w, _)| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let fraction_units = FRACTION_UNITS
            .iter()
            .map(|u| regex::escape(u))
            .collect::<Vec<_>>()
            .join("|");
        let fraction_quantity = Regex::new(&format!(
            r"\b(?P<frac>{fraction_words})\s*(?P<unit>{fraction_units})\b"
        ))
        .unwrap();

        let price_num_first = Regex::new(&format!(
            r"\b(?P<num>\d+(?:\.\d+)?)\s*(?P<kw>{rates_after_number})"
        ))
        .unwrap();
        let price_kw_first = Regex::new(&format!(
            r"(?P<kw>{rates_before_number})\s*(?P<num>\d+(?:\.\d+)?)\b"
        ))
        .unwrap();

        let bare_number = Regex::new(r"\b\d+(?:\.\d+)?\b").unwrap();

        // Longest name first so multi-word names claim their span before
        // any single-word substring gets a chance.
        let mut names: Vec<&String> = lexicon.items.iter().collect();
        names.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        let item_names = names
            .into_iter()
            .map(|name| ItemNamePattern {
                name: name.clone(),
                regex: Regex::new(&format!(r"\b{}\b", regex::escape(name))).unwrap(),
            })
            .collect();

        Self {
            quantity_num_first,
            quantity_unit_first,
            fraction_quantity,
            price_num_first,
            price_kw_first,
            bare_number,
            item_names,
        }
    }

    /// Numeric value of a fraction word matched by `fraction_quantity`.
    pub fn fraction_value(word: &str) -> Option<f64> {
        FRACTION_WORDS
            .iter()
            .find(|(w, _)| *w == word)
            .map(|(_, v)| *v)
    }
}

/// Which side of a keyword needs a `\b` guard. The side adjacent to the
/// number needs none (digits provide the edge), and symbol keywords like
/// "₹" never get one — a word boundary cannot sit next to a non-word
/// character.
enum Boundary {
    /// Keyword follows the number: guard only its trailing edge.
    TrailOnly,
    /// Keyword precedes the number: guard only its leading edge.
    LeadOnly,
}

fn alternation(keywords: &[String], boundary: Boundary) -> String {
    let mut sorted: Vec<&String> = keywords.iter().collect();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let branches: Vec<String> = sorted
        .into_iter()
        .map(|kw| {
            let escaped = regex::escape(kw);
            let first_word = kw.chars().next().is_some_and(is_word_char);
            let last_word = kw.chars().last().is_some_and(is_word_char);
            match boundary {
                Boundary::TrailOnly if last_word => format!(r"{escaped}\b"),
                Boundary::LeadOnly if first_word => format!(r"\b{escaped}"),
                _ => escaped,
            }
        })
        .collect();

    format!("(?:{})", branches.join("|"))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
