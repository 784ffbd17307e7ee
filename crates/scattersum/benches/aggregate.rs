use criterion::{
    criterion_group, criterion_main, AxisScale, BenchmarkId, Criterion, PlotConfiguration,
    Throughput,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use scattersum::{aggregate, CenterAccumulator, Dataset};
use std::collections::HashMap;

// pi * 100_000
const RANDOM_SEED: u64 = 314159;

struct Input {
    values: Vec<f32>,
    assignments: Vec<usize>,
    distances: Vec<f32>,
}

fn generate_input(n_rows: usize, n_cols: usize, n_centers: usize) -> Input {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(RANDOM_SEED);

    let values = (0..n_rows * n_cols).map(|_| rng.random::<f32>()).collect();
    let assignments = (0..n_rows).map(|_| rng.random_range(0..n_centers)).collect();
    let distances = (0..n_rows).map(|_| rng.random::<f32>()).collect();

    Input {
        values,
        assignments,
        distances,
    }
}

fn bench(c: &mut Criterion) {
    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);

    let n_cols = 16usize;
    let sizes = [
        ("100k", 100_000usize),
        ("1M", 1_000_000usize),
        ("10M", 10_000_000usize),
    ];
    let ks = [4usize, 64usize];

    for &k in &ks {
        let mut inputs: HashMap<usize, Input> = HashMap::new();
        for &(_, size) in &sizes {
            inputs.insert(size, generate_input(size, n_cols, k));
        }

        let mut group = c.benchmark_group(format!("aggregate/k{k}"));
        group.plot_config(plot_config.clone());

        for &(size_name, size) in sizes.iter() {
            group.throughput(Throughput::Elements((size * n_cols) as u64));
            group.bench_with_input(BenchmarkId::from_parameter(size_name), &size, |b, size| {
                let input = inputs.get(size).unwrap();
                let dataset = Dataset::from_slice(&input.values, *size, n_cols).unwrap();
                let accumulator = CenterAccumulator::new(k, n_cols);
                b.iter(|| {
                    aggregate(dataset, &input.assignments, &input.distances, &accumulator)
                        .unwrap()
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
