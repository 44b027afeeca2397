//! Benchmark tests for table evaluation and mutation.
//!
//! Run with: cargo bench --bench eval_benchmarks

use criterion::{criterion_group, criterion_main, Criterion};
use tabfn_core::{tabulate, Function, LinkedTabulated, Point, TabulatedFunction};

fn sine() -> fn(f64) -> f64 {
    f64::sin
}

fn bench_array_evaluate(c: &mut Criterion) {
    let table = match tabulate(&sine(), -10.0, 10.0, 1000) {
        Ok(t) => t,
        Err(e) => panic!("tabulation failed: {e}"),
    };
    let inputs: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 0.022 - 11.0).collect();

    c.bench_function("array_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(table.value(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_linked_evaluate(c: &mut Criterion) {
    let table = match LinkedTabulated::from_function(&sine(), -10.0, 10.0, 1000) {
        Ok(t) => t,
        Err(e) => panic!("tabulation failed: {e}"),
    };
    let inputs: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 0.022 - 11.0).collect();

    c.bench_function("linked_evaluate", |b| {
        b.iter(|| {
            for &input in &inputs {
                std::hint::black_box(table.value(std::hint::black_box(input)));
            }
        });
    });
}

fn bench_array_insert(c: &mut Criterion) {
    let base = match tabulate(&sine(), 0.0, 100.0, 101) {
        Ok(t) => t,
        Err(e) => panic!("tabulation failed: {e}"),
    };

    c.bench_function("array_insert_interior", |b| {
        b.iter(|| {
            let mut table = base.clone();
            for i in 0..100 {
                let x = f64::from(i) + 0.5;
                let _ = std::hint::black_box(table.insert(Point::new(x, x)));
            }
            std::hint::black_box(table.points_count())
        });
    });
}

fn bench_linked_insert(c: &mut Criterion) {
    let base = match LinkedTabulated::from_function(&sine(), 0.0, 100.0, 101) {
        Ok(t) => t,
        Err(e) => panic!("tabulation failed: {e}"),
    };

    c.bench_function("linked_insert_interior", |b| {
        b.iter(|| {
            let mut table = base.clone();
            for i in 0..100 {
                let x = f64::from(i) + 0.5;
                let _ = std::hint::black_box(table.insert(Point::new(x, x)));
            }
            std::hint::black_box(table.points_count())
        });
    });
}

criterion_group!(
    benches,
    bench_array_evaluate,
    bench_linked_evaluate,
    bench_array_insert,
    bench_linked_insert
);
criterion_main!(benches);
