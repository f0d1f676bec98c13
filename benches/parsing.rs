//! Parser benchmarks
//!
//! Measures single-word parsing, whole-verse batch parsing, and the
//! normalizer in isolation.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

// ============================================================================
// Test Data
// ============================================================================

mod data {
    /// בְּרֵאשִׁית
    pub fn word() -> &'static str {
        "\u{05D1}\u{05BC}\u{05B0}\u{05E8}\u{05B5}\u{05D0}\u{05E9}\u{05C1}\u{05B4}\u{05D9}\u{05EA}"
    }

    /// Genesis 1:2 (pointed, no cantillation)
    pub fn verse() -> &'static str {
        concat!(
            "\u{05D5}\u{05B0}\u{05D4}\u{05B8}\u{05D0}\u{05B8}\u{05E8}\u{05B6}\u{05E5}", // והארץ
            " ",
            "\u{05D4}\u{05B8}\u{05D9}\u{05B0}\u{05EA}\u{05B8}\u{05D4}", // היתה
            " ",
            "\u{05EA}\u{05B9}\u{05D4}\u{05D5}\u{05BC}", // תהו
            " ",
            "\u{05D5}\u{05B8}\u{05D1}\u{05B9}\u{05D4}\u{05D5}\u{05BC}", // ובהו
            " ",
            "\u{05D5}\u{05B0}\u{05D7}\u{05B9}\u{05E9}\u{05C1}\u{05B6}\u{05DA}\u{05B0}", // וחשך
            " ",
            "\u{05E2}\u{05B7}\u{05DC}\u{05BE}\u{05E4}\u{05BC}\u{05B0}\u{05E0}\u{05B5}\u{05D9}", // עַל־פְּנֵי
            " ",
            "\u{05EA}\u{05B0}\u{05D4}\u{05D5}\u{05B9}\u{05DD}", // תהום
        )
    }
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_parse_word(c: &mut Criterion) {
    let word = data::word();
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(word.len() as u64));
    group.bench_function("single_word", |b| {
        b.iter(|| hebphonics::parse(black_box(word)))
    });
    group.finish();
}

fn bench_parse_verse(c: &mut Criterion) {
    let verse = data::verse();
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(verse.len() as u64));
    group.bench_function("verse", |b| {
        b.iter(|| hebphonics::parse_words(black_box(verse)))
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let verse = data::verse();
    c.bench_function("normalize_verse", |b| {
        b.iter(|| hebphonics::normalizer::normalize(black_box(verse)))
    });
}

fn bench_batch(c: &mut Criterion) {
    let parser = hebphonics::Parser::new();
    let words: Vec<&str> = data::verse().split(' ').collect();
    c.bench_function("parse_words_batch", |b| {
        b.iter(|| hebphonics::parse_words_batch(black_box(&parser), black_box(&words)))
    });
}

criterion_group!(
    benches,
    bench_parse_word,
    bench_parse_verse,
    bench_normalize,
    bench_batch
);
criterion_main!(benches);
