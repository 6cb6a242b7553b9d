//! Benchmarks for incremental mesh construction.
//!
//! Measures:
//! 1. Random point sets at several sizes (insertion, location and legalization)
//! 2. Square grids, which are maximally cocircular
//! 3. Point location on a finished mesh (walk vs full scan)
//!
//! Set `PLANAR_DELAUNAY_BENCH_LOG=1` to print mesh summaries before measuring.

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use planar_delaunay::core::algorithms::locate::{locate, locate_by_scan};
use planar_delaunay::prelude::*;
use std::hint::black_box;

/// Point counts used for construction benchmarks
const COUNTS: &[usize] = &[100, 1_000, 5_000];

/// Fixed seed so every run triangulates the same points
const SEED: u64 = 0x5EED;

fn bench_logging_enabled() -> bool {
    std::env::var("PLANAR_DELAUNAY_BENCH_LOG")
        .map(|value| value != "0")
        .unwrap_or(false)
}

fn build_mesh(points: &[Point<f64>]) -> Mesh<f64> {
    let mut mesh = Mesh::new();
    for point in points {
        // Seeded input has no duplicates; ignore rejections rather than abort
        let _ = mesh.insert(*point);
    }
    mesh
}

fn benchmark_random_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction/random");
    for &count in COUNTS {
        let points = generate_random_points_seeded(count, (-100.0, 100.0), SEED)
            .expect("Failed to generate random points");
        if bench_logging_enabled() {
            eprintln!("random/{count}: {}", build_mesh(&points));
        }

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| black_box(build_mesh(black_box(points))));
        });
    }
    group.finish();
}

fn benchmark_grid_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction/grid");
    for per_axis in [10_usize, 30] {
        // Row-major order: the whole first row stays pending until the second
        let points = generate_grid_points(per_axis, 1.0, [0.0, 0.0])
            .expect("Failed to generate grid points");
        if bench_logging_enabled() {
            eprintln!("grid/{per_axis}: {}", build_mesh(&points));
        }

        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(per_axis), &points, |b, points| {
            b.iter(|| black_box(build_mesh(black_box(points))));
        });
    }
    group.finish();
}

fn benchmark_point_location(c: &mut Criterion) {
    let points = generate_random_points_seeded(2_000, (-100.0, 100.0), SEED)
        .expect("Failed to generate random points");
    let mesh = build_mesh(&points);
    let queries = generate_random_points_seeded(200, (-100.0, 100.0), SEED + 1)
        .expect("Failed to generate query points");

    c.bench_function("locate/walk_200_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(locate(&mesh, black_box(query), None).unwrap());
            }
        });
    });

    c.bench_function("locate/scan_200_queries", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(locate_by_scan(&mesh, black_box(query)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_random_construction,
    benchmark_grid_construction,
    benchmark_point_location
);
criterion_main!(benches);
