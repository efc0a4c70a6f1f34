//! Benchmarks for the similarity matcher
//!
//! The fuzzy lexicon scan is the dominant cost of a parse, so this is the
//! number to watch when the lexicon grows.
//!
//! Run with: cargo bench -p voice-billing-text-processing

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use voice_billing_lexicon::LexiconSet;
use voice_billing_text_processing::{find_closest_match, levenshtein, Formalizer};

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    for (label, a, b) in [
        ("latin_short", "tomoto", "tomato"),
        ("tamil_short", "தக்காலி", "தக்காளி"),
        ("tamil_long", "உருளகிழங்கு", "உருளைக்கிழங்கு"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &(a, b), |bench, (a, b)| {
            bench.iter(|| levenshtein(a, b))
        });
    }

    group.finish();
}

fn bench_lexicon_scan(c: &mut Criterion) {
    let lexicon = LexiconSet::shared();

    c.bench_function("find_closest_match/full_lexicon", |b| {
        b.iter(|| {
            find_closest_match(
                "தக்காலி",
                lexicon.items.iter().map(String::as_str),
                0.75,
            )
        })
    });
}

fn bench_formalize(c: &mut Criterion) {
    let formalizer = Formalizer::new(LexiconSet::shared());
    let utterance = "ரெண்டு கிலோ தக்காலி ஐம்பது ரூபாய் வெங்கயம் ஒரு கிலோ முப்பது ரூபாய்";

    c.bench_function("formalize/two_item_utterance", |b| {
        b.iter(|| formalizer.formalize(utterance))
    });
}

criterion_group!(benches, bench_levenshtein, bench_lexicon_scan, bench_formalize);
criterion_main!(benches);
