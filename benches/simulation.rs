use criterion::Criterion;
use criterion::{criterion_group, criterion_main};
use mcpi::simulation::Simulation;
use rand::Rng;

fn count_inside_by_hand<R: Rng>(n: usize, rng: &mut R) -> usize {
    (0..n)
        .filter(|_| {
            let x: f64 = rng.gen_range(-1.0..=1.0);
            let y: f64 = rng.gen_range(-1.0..=1.0);
            x * x + y * y <= 1.0
        })
        .count()
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");

    for n in [1_000, 100_000] {
        group.bench_function(format!("simulation_{}", n), |b| {
            let mut sim = Simulation::seeded(0);
            b.iter(|| sim.run(n).unwrap())
        });
        group.bench_function(format!("by_hand_{}", n), |b| {
            let mut rng = rand::thread_rng();
            b.iter(|| count_inside_by_hand(n, &mut rng))
        });
    }
}

fn bench_convergence(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_convergence");
    let sizes = [100, 1_000, 10_000];

    group.bench_function("three_sizes", |b| {
        let mut sim = Simulation::seeded(0);
        b.iter(|| sim.analyze_convergence(&sizes, 0.95).unwrap())
    });
}

criterion_group!(benches, bench_run, bench_convergence);
criterion_main!(benches);
