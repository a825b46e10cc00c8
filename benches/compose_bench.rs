//! Benchmark for the composition strategies.
//!
//! Compares nested `compose`, the `pipe!` macros, runtime pipes over boxed
//! functions, the lazy pipelines and `Composable` against a hand-written
//! closure doing the same work.

#![cfg(all(
    feature = "compose",
    feature = "eager",
    feature = "lazy",
    feature = "composable"
))]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pipekit::compose::{BoxedFn, compose, pipe_fold, pipe_iterative};
use pipekit::composable::Composable;
use pipekit::eager::Pipe;
use pipekit::lazy::{LazyPipe, PipelineStart};

fn add_one(value: u64) -> u64 {
    value.wrapping_add(1)
}

fn double(value: u64) -> u64 {
    value.wrapping_mul(2)
}

fn square(value: u64) -> u64 {
    value.wrapping_mul(value)
}

// =============================================================================
// Static Chain Benchmark
// =============================================================================

fn benchmark_static_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("static_chain");

    let hand_written = |value: u64| square(double(add_one(value)));
    let nested = compose(compose(add_one, double), square);
    let folded = pipekit::pipe!(add_one, double, square);
    let iterative = pipekit::pipe_iterative!(add_one, double, square);
    let started = PipelineStart.then(add_one).then(double).then(square);
    let operator = Composable::new(add_one) >> double >> square;

    group.bench_function("hand_written", |bencher| {
        bencher.iter(|| black_box(hand_written(black_box(7))));
    });

    group.bench_function("compose", |bencher| {
        bencher.iter(|| black_box(nested(black_box(7))));
    });

    group.bench_function("pipe_macro", |bencher| {
        bencher.iter(|| black_box(folded(black_box(7))));
    });

    group.bench_function("pipe_iterative_macro", |bencher| {
        bencher.iter(|| black_box(iterative(black_box(7))));
    });

    group.bench_function("lazy_pipeline", |bencher| {
        bencher.iter(|| black_box(started.call(black_box(7))));
    });

    group.bench_function("composable", |bencher| {
        bencher.iter(|| black_box(operator.call(black_box(7))));
    });

    group.bench_function("eager_pipe", |bencher| {
        bencher.iter(|| {
            black_box(
                Pipe::new(black_box(7_u64))
                    .then(add_one)
                    .then(double)
                    .then(square)
                    .into_inner(),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Runtime Chain Benchmark
// =============================================================================

fn build_stages(length: usize) -> Vec<BoxedFn<u64, u64>> {
    (0..length)
        .map(|index| -> BoxedFn<u64, u64> {
            match index % 3 {
                0 => Box::new(add_one),
                1 => Box::new(double),
                _ => Box::new(square),
            }
        })
        .collect()
}

fn benchmark_runtime_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("runtime_chain");

    for length in [4, 16, 64] {
        let folded = pipe_fold(build_stages(length));
        group.bench_with_input(BenchmarkId::new("pipe_fold", length), &folded, |bencher, folded| {
            bencher.iter(|| black_box(folded(black_box(3))));
        });

        let iterative = pipe_iterative(build_stages(length));
        group.bench_with_input(
            BenchmarkId::new("pipe_iterative", length),
            &iterative,
            |bencher, iterative| {
                bencher.iter(|| black_box(iterative(black_box(3))));
            },
        );

        let deferred = build_stages(length)
            .into_iter()
            .try_fold(LazyPipe::new().start(|value: u64| value), |pipe, stage| {
                pipe.then(stage)
            });
        if let Ok(deferred) = deferred {
            group.bench_with_input(
                BenchmarkId::new("lazy_pipe", length),
                &deferred,
                |bencher, deferred| {
                    bencher.iter(|| black_box(deferred.call(black_box(3))));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_static_chain, benchmark_runtime_chain);
criterion_main!(benches);
