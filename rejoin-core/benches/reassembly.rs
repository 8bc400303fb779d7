//! Performance benchmarks for fragment reassembly
//!
//! Run with: cargo bench --bench reassembly

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rejoin_core::{head_overlap, Composer, Fragment, MaximalOverlapSelector, PairSelector};
use std::hint::black_box;

/// Generate text of the given size with few repeated runs
fn generate_text(size: usize) -> String {
    (0..size)
        .map(|i| char::from(b'a' + ((i * 7 + i / 26) % 26) as u8))
        .collect()
}

/// Cut text into windows that overlap their neighbours, then interleave the order
fn shred(text: &str, width: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let step = width - overlap;
    let mut pieces = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + width).min(chars.len());
        pieces.push(chars[start..end].iter().collect::<String>());
        if end == chars.len() {
            break;
        }
        start += step;
    }

    let (even, odd): (Vec<_>, Vec<_>) = pieces
        .into_iter()
        .enumerate()
        .partition(|(i, _)| i % 2 == 0);
    odd.into_iter()
        .rev()
        .chain(even)
        .map(|(_, piece)| piece)
        .collect()
}

/// Benchmark head overlap on growing haystacks
fn bench_head_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("head_overlap");

    for size in [64, 256, 1024] {
        let haystack: Vec<char> = generate_text(size).chars().collect();
        let head: Vec<char> = haystack[size / 2..].iter().copied().chain("zz".chars()).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("chars", size), &haystack, |b, haystack| {
            b.iter(|| head_overlap(black_box(&head), black_box(haystack)));
        });
    }

    group.finish();
}

/// Benchmark a single pair search
fn bench_select_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_pair");

    for count in [8, 32, 64] {
        let fragments: Vec<Fragment> = shred(&generate_text(count * 12), 20, 8)
            .into_iter()
            .map(Fragment::from)
            .collect();

        group.bench_with_input(BenchmarkId::new("fragments", count), &fragments, |b, fragments| {
            b.iter(|| MaximalOverlapSelector.select_pair(black_box(fragments)));
        });
    }

    group.finish();
}

/// Benchmark full reassembly
fn bench_reassemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("reassemble");
    group.sample_size(20);

    for size in [256, 1024, 2048] {
        let pieces = shred(&generate_text(size), 24, 10);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("bytes", size), &pieces, |b, pieces| {
            b.iter(|| {
                let mut composer = Composer::standard(black_box(pieces).iter().map(String::as_str));
                composer.write_backup();
                let _ = composer.reassemble().unwrap();
                composer.to_text()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_head_overlap, bench_select_pair, bench_reassemble);
criterion_main!(benches);
