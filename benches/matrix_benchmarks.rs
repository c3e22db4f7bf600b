//! Benchmarks for parsing and matrix operations.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use matrixtool_core::{Grid, determinant, grid_to_text, multiply, parse};

/// Square matrix text with `n` rows of mixed integer and fractional values.
fn generate_matrix_text(n: usize) -> String {
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| format!("{}", (r * n + c) as f64 * 0.5 - 3.0))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn generate_grid(n: usize) -> Grid {
    let rows = (0..n)
        .map(|r| (0..n).map(|c| ((r + 1) * (c + 2) % 7) as f64 - 2.5).collect())
        .collect();
    Grid::from_rows(rows).expect("benchmark grid is rectangular")
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for size in [10, 100, 300].iter() {
        let text = generate_matrix_text(*size);
        group.bench_with_input(BenchmarkId::new("square", size), &text, |b, text| {
            b.iter(|| black_box(parse(black_box(text))))
        });
    }

    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");

    for size in [10, 50, 100].iter() {
        let a = generate_grid(*size);
        let b = generate_grid(*size);
        group.bench_with_input(BenchmarkId::new("square", size), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(multiply(black_box(a), black_box(b))))
        });
    }

    group.finish();
}

fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for size in [3, 10, 50].iter() {
        let grid = generate_grid(*size);
        group.bench_with_input(BenchmarkId::new("square", size), &grid, |b, grid| {
            b.iter(|| black_box(determinant(black_box(grid))))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let grid = generate_grid(100);
    c.bench_function("grid_to_text_100", |b| b.iter(|| black_box(grid_to_text(black_box(&grid)))));
}

criterion_group!(benches, bench_parse, bench_multiply, bench_determinant, bench_format);
criterion_main!(benches);
