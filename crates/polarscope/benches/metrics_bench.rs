//! Benchmarks for table loading and pairwise comparison.
//!
//! Run with: cargo bench --bench metrics_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use polarscope::prelude::*;

/// Create a synthetic review CSV for benchmarking.
fn create_synthetic_csv(n_reviews: usize, n_models: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let mut csv = String::from("text,polarity");
    for m in 0..n_models {
        csv.push_str(&format!(",model{}_sentiment_code", m));
    }
    csv.push('\n');

    for i in 0..n_reviews {
        csv.push_str(&format!("\"review {}, synthetic\",{}", i, rng.gen_range(1..=2)));
        for _ in 0..n_models {
            csv.push_str(&format!(",{}", rng.gen_range(0..=2)));
        }
        csv.push('\n');
    }

    csv
}

fn bench_parse_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_table");

    for n_reviews in [1_000, 5_000, 20_000].iter() {
        let csv = create_synthetic_csv(*n_reviews, 15);
        group.bench_with_input(BenchmarkId::from_parameter(n_reviews), &csv, |b, csv| {
            b.iter(|| parse_table(black_box(csv)).unwrap())
        });
    }

    group.finish();
}

fn bench_compare_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_columns");

    for n_reviews in [1_000, 5_000, 20_000].iter() {
        let table = parse_table(&create_synthetic_csv(*n_reviews, 2)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n_reviews), &table, |b, table| {
            b.iter(|| {
                compare_columns(black_box(table), "polarity", "model0_sentiment_code").unwrap()
            })
        });
    }

    group.finish();
}

fn bench_leaderboard(c: &mut Criterion) {
    let table = parse_table(&create_synthetic_csv(5_000, 15)).unwrap();
    c.bench_function("model_leaderboard_5000x15", |b| {
        b.iter(|| model_leaderboard(black_box(&table)).unwrap())
    });
}

criterion_group!(benches, bench_parse_table, bench_compare_columns, bench_leaderboard);
criterion_main!(benches);
