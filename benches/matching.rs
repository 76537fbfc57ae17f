//! Performance benchmarks for keyscan
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keyscan::matcher;
use memchr::memmem;

/// Synthetic english-ish corpus of roughly `words` words.
fn corpus(words: usize) -> Vec<u8> {
    let vocab = [
        "the", "she", "sells", "seashells", "by", "shore", "his", "hers", "a", "usher",
        "shell", "here", "there", "theirs",
    ];
    let mut text = Vec::new();
    for i in 0..words {
        text.extend_from_slice(vocab[i % vocab.len()].as_bytes());
        text.push(b' ');
    }
    text
}

fn patterns(count: usize) -> Vec<String> {
    // distinct prefixes of a shared stem plus short common words
    (0..count)
        .map(|i| match i % 4 {
            0 => format!("she{}", i / 4),
            1 => format!("her{}", i / 4),
            2 => format!("th{}", i / 4),
            _ => format!("s{}e", i / 4),
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("automaton_build");
    for count in [8, 64, 512] {
        let set = patterns(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &set, |b, set| {
            b.iter(|| matcher::build(black_box(set)).unwrap())
        });
    }
    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let automaton = matcher::build(["he", "she", "his", "hers", "usher", "shell"]).unwrap();

    let mut group = c.benchmark_group("scan");
    for words in [100, 10_000, 100_000] {
        let text = corpus(words);
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| matcher::search(&automaton, black_box(text)))
        });
    }
    group.finish();
}

fn bench_scan_vs_per_pattern_memmem(c: &mut Criterion) {
    let set = ["he", "she", "his", "hers", "usher", "shell"];
    let automaton = matcher::build(set).unwrap();
    let text = corpus(10_000);

    let mut group = c.benchmark_group("scan_vs_memmem");
    group.bench_function("automaton_single_pass", |b| {
        b.iter(|| matcher::search(&automaton, black_box(&text)))
    });
    group.bench_function("memmem_one_pass_per_pattern", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for pattern in set {
                total += memmem::find_iter(black_box(&text), pattern.as_bytes()).count();
            }
            total
        })
    });
    group.finish();
}

fn bench_scan_many_patterns(c: &mut Criterion) {
    // scan cost should stay flat as the pattern set grows
    let text = corpus(10_000);
    let mut group = c.benchmark_group("scan_pattern_count");
    for count in [4, 64, 512] {
        let automaton = matcher::build(patterns(count)).unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &automaton,
            |b, automaton| b.iter(|| matcher::search(automaton, black_box(&text))),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_scan,
    bench_scan_vs_per_pattern_memmem,
    bench_scan_many_patterns
);
criterion_main!(benches);
