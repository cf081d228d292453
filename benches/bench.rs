//! Criterion benchmarks for faq-matcher.
//!
//! Covers message analysis, ranking a generated catalog and batch statistics.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use faq_matcher::analysis::analyzer::MessageAnalyzer;
use faq_matcher::config::RulesConfig;
use faq_matcher::faq::Faq;
use faq_matcher::matching::{match_all_faqs, match_message};
use faq_matcher::stats::MatchStats;

const WORDS: &[&str] = &[
    "kargo", "siparis", "iade", "para", "sifre", "giris", "hesap", "fatura", "adres", "teslimat",
    "odeme", "kart", "indirim", "kupon", "urun", "stok", "iptal", "degisim", "garanti", "destek",
];

/// Generate a catalog where every FAQ carries three keywords.
fn generate_catalog(count: usize) -> Vec<Faq> {
    (0..count)
        .map(|i| {
            let keywords: Vec<&str> = (0..3).map(|j| WORDS[(i * 7 + j * 3) % WORDS.len()]).collect();
            Faq::new(format!("faq-{i}"), format!("Soru {i}"), format!("Cevap {i}"))
                .with_keywords(keywords)
                .with_category(WORDS[i % WORDS.len()])
        })
        .collect()
}

/// Generate messages of eight words each.
fn generate_messages(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            (0..8)
                .map(|j| WORDS[(i * 5 + j * 11) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn config() -> RulesConfig {
    RulesConfig::default()
        .with_stopwords(vec!["ve", "bir", "bu"])
        .with_synonym_group("iade", vec!["iptal", "degisim"])
        .with_synonym_group("kargo", vec!["teslimat", "gonderi"])
        .with_synonym_group("odeme", vec!["kart", "fatura"])
}

fn bench_analysis(c: &mut Criterion) {
    let analyzer = MessageAnalyzer::from_config(&config());
    let text = "Merhaba, İADE talebim için KARGO ücretini ödeyecek miyim? Çok acil!";

    let mut group = c.benchmark_group("analysis");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("message_terms", |b| {
        b.iter(|| analyzer.terms(black_box(text)))
    });
    group.finish();
}

fn bench_matching(c: &mut Criterion) {
    let config = config();
    let message = "kargo iptal fatura adres sorunu var";

    let mut group = c.benchmark_group("matching");
    for size in [50, 500, 5000] {
        let faqs = generate_catalog(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("match_message_{size}"), |b| {
            b.iter(|| match_message(black_box(message), black_box(&faqs), &config))
        });
        group.bench_function(format!("match_all_faqs_{size}"), |b| {
            b.iter(|| match_all_faqs(black_box(message), black_box(&faqs), &config))
        });
    }
    group.finish();
}

fn bench_stats(c: &mut Criterion) {
    let config = config();
    let faqs = generate_catalog(200);
    let messages = generate_messages(1000);

    let mut group = c.benchmark_group("stats");
    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("collect_1000", |b| {
        b.iter(|| MatchStats::collect(black_box(&messages), &faqs, &config, 10))
    });
    group.finish();
}

criterion_group!(benches, bench_analysis, bench_matching, bench_stats);
criterion_main!(benches);
