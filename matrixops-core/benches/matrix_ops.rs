//! Benchmarks for the matrix operations, driven only through the public API.
//!
//! Each group sweeps square sizes over powers of two.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use matrixops_core::Matrix;

const MATMUL_SIZES: (usize, usize) = (8, 128);
const TRANSPOSE_SIZES: (usize, usize) = (8, 512);
const ADD_SIZES: (usize, usize) = (8, 1024);
const NORM_SIZES: (usize, usize) = (8, 1024);

fn powers_of_two((start, end): (usize, usize)) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(start), |&n| Some(n * 2)).take_while(move |&n| n <= end)
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn bench_matmul(c: &mut Criterion) {
    init_logger();
    let mut group = c.benchmark_group("matmul");

    for n in powers_of_two(MATMUL_SIZES) {
        let a = Matrix::full(n, n, 1.0).unwrap();
        let b = Matrix::full(n, n, 2.0).unwrap();

        group.throughput(Throughput::Elements((n * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| black_box(&a).matmul(black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for n in powers_of_two(TRANSPOSE_SIZES) {
        let m = Matrix::full(n, n, 1.5).unwrap();

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| black_box(&m).transpose());
        });
    }

    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");

    for n in powers_of_two(ADD_SIZES) {
        let a = Matrix::full(n, n, 1.0).unwrap();
        let b = Matrix::full(n, n, 2.0).unwrap();

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| black_box(&a).add(black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_norm(c: &mut Criterion) {
    let mut group = c.benchmark_group("norm");

    for n in powers_of_two(NORM_SIZES) {
        let m = Matrix::full(n, n, 2.5).unwrap();

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |bencher, _| {
            bencher.iter(|| black_box(&m).norm());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_transpose, bench_add, bench_norm);
criterion_main!(benches);
