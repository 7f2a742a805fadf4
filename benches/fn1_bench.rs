//! Benchmark for function-arrow composition.
//!
//! Compares composed arrows against hand-written closures to evaluate
//! the overhead (if any) of the abstraction.

use criterion::{Criterion, criterion_group, criterion_main};
use kindling::function::Fn1;
use kindling::typeclass::{Functor, Profunctor};
use std::hint::black_box;

fn benchmark_fn1_composition(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fn1_composition");

    group.bench_function("fn1_then_chain", |bencher| {
        bencher.iter(|| {
            let arrow = Fn1::new(|n: i32| n + 2).then(|n| n * 3).then(|n| n - 1);
            black_box(arrow.apply(black_box(7)))
        });
    });

    group.bench_function("manual_closure_chain", |bencher| {
        bencher.iter(|| {
            let composed = |n: i32| (n + 2) * 3 - 1;
            black_box(composed(black_box(7)))
        });
    });

    group.finish();
}

fn benchmark_fn1_di_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fn1_di_map");

    group.bench_function("profunctor_di_map", |bencher| {
        bencher.iter(|| {
            let arrow =
                Fn1::new(|n: i32| n + 2).di_map(|z: i32| z.wrapping_sub(1), |b| b.wrapping_mul(3));
            black_box(arrow.apply(black_box(7)))
        });
    });

    group.bench_function("manual_remap", |bencher| {
        bencher.iter(|| {
            let remapped = |z: i32| (z.wrapping_sub(1) + 2).wrapping_mul(3);
            black_box(remapped(black_box(7)))
        });
    });

    group.finish();
}

fn benchmark_fn1_fmap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("fn1_fmap");

    group.bench_function("functor_fmap", |bencher| {
        bencher.iter(|| {
            let arrow = Fn1::new(|n: i32| n + 2).fmap(|n| n.to_string());
            black_box(arrow.apply(black_box(40)))
        });
    });

    group.bench_function("manual_map", |bencher| {
        bencher.iter(|| {
            let mapped = |n: i32| (n + 2).to_string();
            black_box(mapped(black_box(40)))
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_fn1_composition,
    benchmark_fn1_di_map,
    benchmark_fn1_fmap
);
criterion_main!(benches);
