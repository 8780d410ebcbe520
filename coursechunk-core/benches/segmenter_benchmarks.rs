//! Performance benchmarks for the segmenter
//!
//! Run with: cargo bench --bench segmenter_benchmarks

use coursechunk_core::{Granularity, Segmenter, SegmenterConfig};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate transcript-like text of roughly `size` bytes
fn generate_text(size: usize, base_sentence: &str) -> String {
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    let mut end = size.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let segmenter = Segmenter::default();

    for size in [1024, 10_240, 102_400, 1_024_000] {
        let text = generate_text(size, "This is a lecture sentence of moderate length! ");

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment", size), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark Latin versus CJK input
fn bench_scripts(c: &mut Criterion) {
    let mut group = c.benchmark_group("scripts");
    let segmenter = Segmenter::default();

    let latin = generate_text(102_400, "Sentences are grouped into chunks? Yes they are! ");
    let cjk = generate_text(102_400, "文は塊にまとめられます。本当ですか？はい！");

    for (name, text) in [("latin", latin), ("cjk", cjk)] {
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("segment", name), &text, |b, text| {
            b.iter(|| segmenter.segment(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark sentence versus paragraph granularity
fn bench_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("granularity");
    let text = generate_text(102_400, "A short paragraph line!\nAnother line?\n\n");

    for granularity in [Granularity::Sentence, Granularity::Paragraph] {
        let config = SegmenterConfig::default().with_granularity(granularity);
        let segmenter = Segmenter::new(config).unwrap();

        group.bench_with_input(
            BenchmarkId::new("segment", format!("{granularity:?}")),
            &text,
            |b, text| {
                b.iter(|| segmenter.segment(black_box(text)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_scripts, bench_granularity);
criterion_main!(benches);
