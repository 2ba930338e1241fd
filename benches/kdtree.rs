use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use kd_index::{KdTreeBuilder, PointStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_store(n: usize, dim: usize) -> PointStore<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    let coords: Vec<f64> = (0..n * dim).map(|_| rng.gen_range(-1000.0..1000.0)).collect();
    PointStore::from_flat(coords, dim).unwrap()
}

fn generate_queries(n: usize, dim: usize) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..n)
        .map(|_| (0..dim).map(|_| rng.gen_range(-1000.0..1000.0)).collect())
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [1_000, 10_000] {
        for dim in [2, 3] {
            let store = generate_store(n, dim);
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("n={n}/dim={dim}")),
                &store,
                |b, store| {
                    b.iter(|| KdTreeBuilder::new().build(store).unwrap());
                },
            );
        }
    }
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let n = 10_000;
    let dim = 3;
    let store = generate_store(n, dim);
    let tree = KdTreeBuilder::new().build(&store).unwrap();
    let queries = generate_queries(100, dim);

    let mut group = c.benchmark_group("nearest");
    for k in [1, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("k={k}")), &k, |b, &k| {
            b.iter(|| {
                for query in &queries {
                    tree.nearest(&store, query, k).unwrap();
                }
            });
        });
    }

    // Scan baseline to keep the tree honest.
    group.bench_function("k=10/brute-force", |b| {
        b.iter(|| {
            for query in &queries {
                let mut all: Vec<(f64, u32)> = (0..n as u32)
                    .map(|i| {
                        let p = store.point(i);
                        let d = p
                            .iter()
                            .zip(query)
                            .map(|(a, b)| (a - b) * (a - b))
                            .sum::<f64>()
                            .sqrt();
                        (d, i)
                    })
                    .collect();
                all.sort_by(|a, b| a.partial_cmp(b).unwrap());
                all.truncate(10);
            }
        });
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest);
criterion_main!(benches);
