use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::{OsRng, StdRng};

use lotto_picker::sampling::{draw, generate_uniform, validate};

fn bench_uniform(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    c.bench_function("uniform_1_45", |b| {
        b.iter(|| generate_uniform(&mut rng, black_box(1), black_box(45)))
    });
    c.bench_function("uniform_full_i64", |b| {
        b.iter(|| generate_uniform(&mut rng, black_box(i64::MIN), black_box(i64::MAX)))
    });
    c.bench_function("uniform_1_45_os", |b| {
        b.iter(|| generate_uniform(&mut OsRng, black_box(1), black_box(45)))
    });
}

fn bench_draw(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);

    let lotto = validate(Some(1), Some(45), Some(6), BTreeSet::from([13])).unwrap();
    c.bench_function("draw_6_of_45", |b| b.iter(|| draw(&mut rng, black_box(&lotto))));

    let wide = validate(Some(1), Some(1_000_000), Some(10), BTreeSet::new()).unwrap();
    c.bench_function("draw_10_of_1m", |b| b.iter(|| draw(&mut rng, black_box(&wide))));
}

criterion_group!(benches, bench_uniform, bench_draw);
criterion_main!(benches);
