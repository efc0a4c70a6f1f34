//! Integration tests for the full transcript parsing pipeline
//!
//! These exercise the public facade the way the UI layer uses it: repeated
//! calls over a growing transcript, mixed Tamil/English speech, and the
//! live-tail contract.

use voice_billing_lexicon::LexiconSet;
use voice_billing_parser::BillingParser;

fn parser() -> BillingParser {
    BillingParser::with_default_lexicon()
}

#[test]
fn single_english_item_complete() {
    let items = parser().parse_continuous_input("tomato 2 kg 50 rupees");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    assert_eq!(item.name.as_deref(), Some("Tomato"));
    assert_eq!(item.quantity.as_deref(), Some("2 kg"));
    assert_eq!(item.rate, Some(25.0));
}

#[test]
fn two_english_items_in_order() {
    let items = parser().parse_continuous_input("tomato 2 kg 50 rupees potato 1 kg 20 rupees");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("Tomato"));
    assert_eq!(items[0].rate, Some(25.0));
    assert_eq!(items[1].name.as_deref(), Some("Potato"));
    assert_eq!(items[1].rate, Some(20.0));
}

#[test]
fn live_item_has_no_rate_before_price_is_spoken() {
    let items = parser().parse_continuous_input("tomato 2 kg");
    assert_eq!(items.len(), 1);
    let live = &items[0];
    assert_eq!(live.name.as_deref(), Some("Tomato"));
    assert_eq!(live.quantity.as_deref(), Some("2 kg"));
    assert_eq!(live.rate, None);
}

#[test]
fn tamil_item_with_spoken_numbers() {
    let items = parser().parse_continuous_input("இரண்டு கிலோ தக்காளி ஐம்பது ரூபாய்");
    assert_eq!(items.len(), 1);
    let item = &items[0];
    let quantity = item.quantity.as_deref().unwrap();
    assert!(quantity.contains('2'), "quantity was {quantity:?}");
    assert!(quantity.contains("கிலோ"), "quantity was {quantity:?}");
    assert_eq!(item.rate, Some(25.0));
    assert_eq!(item.name.as_deref(), Some("தக்காளி"));
}

#[test]
fn dialectal_tamil_is_formalized() {
    // Colloquial number word and a misrecognized item spelling
    let items = parser().parse_continuous_input("ரெண்டு கிலோ தக்காலி ஐம்பது ரூபாய்");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_deref(), Some("தக்காளி"));
    assert_eq!(items[0].rate, Some(25.0));
}

#[test]
fn spoken_english_number_words() {
    let items = parser().parse_continuous_input("sugar one kg forty rupees");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity.as_deref(), Some("1 kg"));
    assert_eq!(items[0].rate, Some(40.0));
}

#[test]
fn rate_is_total_divided_by_quantity() {
    let items = parser().parse_continuous_input("onion five kg hundred rupees");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity.as_deref(), Some("5 kg"));
    assert_eq!(items[0].rate, Some(20.0));
}

#[test]
fn growing_transcript_reparse_is_stable() {
    let p = parser();

    // The UI calls once per recognizer update; earlier items must not drift.
    let snapshots = [
        "tomato",
        "tomato 2 kg",
        "tomato 2 kg 50 rupees",
        "tomato 2 kg 50 rupees potato",
        "tomato 2 kg 50 rupees potato 1 kg 20 rupees",
    ];

    let mut last_first_item = None;
    for snapshot in snapshots {
        let items = p.parse_continuous_input(snapshot);
        assert!(!items.is_empty(), "no items for {snapshot:?}");
        if snapshot.contains("50 rupees") {
            let first = items[0].clone();
            assert_eq!(first.rate, Some(25.0));
            if let Some(prev) = &last_first_item {
                assert_eq!(&first, prev);
            }
            last_first_item = Some(first);
        }
    }
}

#[test]
fn mixed_language_transcript() {
    let items = parser().parse_continuous_input("தக்காளி 2 kg 50 rupees வெங்காயம் ஒரு கிலோ");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("தக்காளி"));
    assert_eq!(items[0].rate, Some(25.0));
    // Live tail: Tamil onion with quantity but no price yet
    assert_eq!(items[1].name.as_deref(), Some("வெங்காயம்"));
    assert_eq!(items[1].rate, None);
}

#[test]
fn name_fallback_segmentation_without_any_price() {
    let items = parser().parse_continuous_input("தக்காளி இரண்டு கிலோ வெங்காயம் ஒரு கிலோ");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name.as_deref(), Some("தக்காளி"));
    assert_eq!(items[0].quantity.as_deref(), Some("2 கிலோ"));
    assert_eq!(items[1].name.as_deref(), Some("வெங்காயம்"));
}

#[test]
fn empty_and_whitespace_transcripts() {
    assert!(parser().parse_continuous_input("").is_empty());
    assert!(parser().parse_continuous_input("  \t ").is_empty());
}

#[test]
fn custom_lexicon_is_injectable() {
    let yaml = r#"
items:
  - "dragonfruit"
rate_keywords:
  - "credits"
"#;
    let lexicon = std::sync::Arc::new(LexiconSet::from_yaml_str(yaml).unwrap());
    let p = BillingParser::new(lexicon);

    let items = p.parse_continuous_input("dragonfruit 2 kg 30 credits");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name.as_deref(), Some("Dragonfruit"));
    assert_eq!(items[0].rate, Some(15.0));
}

#[test]
fn formalize_for_display_is_idempotent() {
    let p = parser();
    let inputs = [
        "ரெண்டு கிலோ தக்காலி",
        "tomato 2 kg",
        "அரை கிலோ பால்",
    ];
    for input in inputs {
        let once = p.formalize_for_display(input);
        assert_eq!(p.formalize_for_display(&once), once, "input {input:?}");
    }
}
