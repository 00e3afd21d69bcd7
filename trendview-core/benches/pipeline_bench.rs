//! Criterion benchmarks for the analytics pipeline.
//!
//! Benchmarks:
//! 1. Series generation at dashboard and multi-year lengths
//! 2. Moving average over those series at several windows
//! 3. Full pipeline run (generate + smooth + project)

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use trendview_core::rng::StdRandom;
use trendview_core::{generate, smooth, AnalyticsPipeline};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for length in [121usize, 1_260, 5_040] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let mut rng = StdRandom::seeded(42);
            b.iter(|| generate(black_box("BENCH"), length, today(), &mut rng));
        });
    }
    group.finish();
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth");
    let series = generate("BENCH", 1_260, today(), &mut StdRandom::seeded(42)).unwrap();
    for window in [14usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(window), &window, |b, &window| {
            b.iter(|| smooth(black_box(&series), window));
        });
    }
    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let pipeline = AnalyticsPipeline::default();
    let mut rng = StdRandom::seeded(7);
    c.bench_function("pipeline_default", |b| {
        b.iter(|| pipeline.run(black_box("BENCH"), today(), &mut rng));
    });
}

criterion_group!(benches, bench_generate, bench_smooth, bench_pipeline);
criterion_main!(benches);
