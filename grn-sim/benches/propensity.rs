use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use grn_model::{grn_population, GrnRates};
use grn_sim::algorithm::{Algorithm, Direct, FirstReaction, SelectReaction};
use grn_sim::propensity::{compute_propensities, exprand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn exprand_benchmark(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1u64);
    let mut group = c.benchmark_group("exprand_benchmark");
    group.bench_function("exprand 0.5", |b| {
        b.iter(|| exprand(black_box(0.5), black_box(&mut rng)))
    });
    group.finish();
}

fn propensities_benchmark(c: &mut Criterion) {
    let model = grn_population(&GrnRates::default()).unwrap();
    let state = [0, 1, 500, 2000];
    let mut propensities = vec![0.; model.channels().len()];
    c.bench_function("grn propensities", |b| {
        b.iter(|| {
            compute_propensities(
                model.channels(),
                black_box(&state),
                &mut propensities,
            )
        })
    });
}

fn select_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_reaction");
    let mut rng = ChaCha8Rng::seed_from_u64(26);
    let propensities = [0.9, 5000., 0., 10., 40., 0.01];

    for algorithm in [Algorithm::from(Direct), FirstReaction.into()] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{:?}", algorithm)),
            &algorithm,
            |b, algorithm| {
                b.iter(|| algorithm.select(black_box(&propensities), &mut rng))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    exprand_benchmark,
    propensities_benchmark,
    select_benchmark
);
criterion_main!(benches);
