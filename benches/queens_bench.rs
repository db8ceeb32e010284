//! Criterion benchmarks for the N-Queens search engines.
//!
//! Measures the conflict-count kernel and short, seeded runs of both
//! engines on capped iteration budgets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_metaheur::board::Board;
use queens_metaheur::ga::{GaConfig, GaRunner};
use queens_metaheur::hc::{HcConfig, HcRunner};

fn bench_conflict_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_conflicts");
    for n in [8usize, 16, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let board = Board::staircase(n);
            b.iter(|| {
                let mut board = black_box(board.clone());
                black_box(board.conflicts())
            });
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    c.bench_function("ga_500_generations", |b| {
        let config = GaConfig::default()
            .with_max_generations(500)
            .with_seed(42);
        b.iter(|| black_box(GaRunner::run(&config)));
    });
}

fn bench_hc(c: &mut Criterion) {
    c.bench_function("hc_2000_iterations", |b| {
        let config = HcConfig::default()
            .with_max_iterations(2000)
            .with_seed(42);
        b.iter(|| black_box(HcRunner::run(&config)));
    });
}

criterion_group!(benches, bench_conflict_count, bench_ga, bench_hc);
criterion_main!(benches);
