//! Criterion benchmarks for spotter-dtw: single alignments per step pattern and batch ranking.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use spotter_dtw::{Dtw, LocalCostMatrix, StartMode, StepPattern};

fn make_cost_matrix(rows: usize, cols: usize, phase: f64) -> LocalCostMatrix {
    let values: Vec<f64> = (0..rows)
        .flat_map(|m| (0..cols).map(move |n| ((m as f64 * 0.1).sin() - (n as f64 * 0.1 + phase).sin()).abs()))
        .collect();
    LocalCostMatrix::from_row_major(rows, cols, values).unwrap()
}

fn bench_align(c: &mut Criterion) {
    let shapes = [(64usize, 32usize), (256, 64), (1024, 128)];

    let mut group = c.benchmark_group("dtw_align");

    for &(rows, cols) in &shapes {
        let costs = make_cost_matrix(rows, cols, 0.0);
        for pattern in StepPattern::ALL {
            let id = BenchmarkId::new(format!("{rows}x{cols}"), pattern);
            let dtw = Dtw::new(pattern).with_start_mode(StartMode::Free);

            group.bench_with_input(id, &(costs.clone(), dtw), |bencher, (costs, dtw)| {
                bencher.iter(|| dtw.align(costs.as_view()).unwrap());
            });
        }
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let references: Vec<LocalCostMatrix> = (0..50)
        .map(|i| make_cost_matrix(256, 64, i as f64 * 0.2))
        .collect();
    let dtw = Dtw::three_row_skip().with_start_mode(StartMode::Free);

    c.bench_function("dtw_rank_50x256x64_three_row_skip", |b| {
        b.iter(|| dtw.rank(&references).unwrap());
    });
}

criterion_group!(benches, bench_align, bench_rank);
criterion_main!(benches);
