//! Aggregation benchmarks over seeded synthetic herds
//!
//! Establishes the scaling baseline for the read-side queries: score
//! distribution, breed breakdown, trend generation, and leaderboard sort.
//!
//! Run with: cargo bench --bench aggregations

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use herdscore::{aggregate, leaderboard, synth, trend, AnimalRecord};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SMALL_SIZE: usize = 1_000;
const MEDIUM_SIZE: usize = 100_000;

fn fixture(n: usize) -> Vec<AnimalRecord> {
    let as_of = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
    synth::herd(&mut StdRng::seed_from_u64(0xCA77), n, as_of)
}

fn bench_score_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_distribution");
    let edges = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let herd = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &herd, |b, herd| {
            b.iter(|| aggregate::score_distribution(black_box(herd), black_box(&edges)).unwrap());
        });
    }
    group.finish();
}

fn bench_breed_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("breed_distribution");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let herd = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &herd, |b, herd| {
            b.iter(|| aggregate::breed_distribution(black_box(herd)));
        });
    }
    group.finish();
}

fn bench_trend(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_trend_30d");
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let herd = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &herd, |b, herd| {
            b.iter(|| trend::daily_trend(black_box(herd), 30, as_of).unwrap());
        });
    }
    group.finish();
}

fn bench_leaderboard(c: &mut Criterion) {
    let mut group = c.benchmark_group("leaderboard_top10");

    for size in [SMALL_SIZE, MEDIUM_SIZE] {
        let herd = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &herd, |b, herd| {
            b.iter(|| leaderboard::rank(black_box(herd), Some(10), |_| None));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_score_distribution,
    bench_breed_distribution,
    bench_trend,
    bench_leaderboard
);
criterion_main!(benches);
