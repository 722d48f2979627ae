//! Criterion benchmarks for the TSP genetic algorithm.
//!
//! Uses random Euclidean instances so the numbers reflect GA overhead
//! (ranking, OX, swap mutation, evaluation) rather than any input quirk.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_tsp::ga::operators::{order_crossover, shuffled_permutation};
use u_tsp::ga::random::create_rng;
use u_tsp::ga::{GaConfig, GaEngine};
use u_tsp::tsp::{tour_cost, DistanceMatrix, TspProblem};

fn random_instance(n: usize, seed: u64) -> DistanceMatrix {
    let mut rng = create_rng(seed);
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    DistanceMatrix::from_coordinates(&coords)
}

fn bench_ga_evolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_evolve");
    group.sample_size(10);

    for (n, pop, gen) in [(20usize, 50usize, 100usize), (50, 50, 100), (100, 100, 50)] {
        let problem = TspProblem::new(random_instance(n, 42)).expect("n >= 2");
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut engine = GaEngine::new(black_box(p), c.clone()).expect("valid");
                    black_box(engine.evolve())
                })
            },
        );
    }
    group.finish();
}

fn bench_order_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("order_crossover");

    for &n in &[50usize, 200, 1000] {
        let mut rng = create_rng(7);
        let p1 = shuffled_permutation(n, &mut rng);
        let p2 = shuffled_permutation(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(p1, p2), |b, (p1, p2)| {
            b.iter(|| black_box(order_crossover(black_box(p1), black_box(p2), &mut rng)))
        });
    }
    group.finish();
}

fn bench_tour_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour_cost");

    for &n in &[50usize, 200, 1000] {
        let dm = random_instance(n, 3);
        let tour = shuffled_permutation(n, &mut create_rng(3));
        group.bench_with_input(BenchmarkId::from_parameter(n), &(dm, tour), |b, (dm, tour)| {
            b.iter(|| black_box(tour_cost(black_box(dm), black_box(tour))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ga_evolve, bench_order_crossover, bench_tour_cost);
criterion_main!(benches);
