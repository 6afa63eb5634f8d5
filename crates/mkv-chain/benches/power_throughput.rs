use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mkv_chain::{gen_random_chain, Distribution, RngHandle};

fn power_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let chain = gen_random_chain(64, 8, &mut rng).unwrap();
    let start = Distribution::uniform(64);

    c.bench_function("probability_mat_32", |b| {
        b.iter(|| black_box(chain.probability_mat(black_box(32)).unwrap()));
    });

    c.bench_function("distribution_32", |b| {
        b.iter(|| black_box(chain.distribution(32, &start).unwrap()));
    });
}

criterion_group!(benches, power_bench);
criterion_main!(benches);
