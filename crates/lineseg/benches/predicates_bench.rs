//! Criterion microbenches for the segment predicates.
//!
//! - pairwise: `intersects_segment` over degenerate-heavy lattice pairs.
//! - raycast: single edge, and `raycast_ring` over regular n-gons.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lineseg::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("seg2_pairwise");
    let pairs = lineseg::api::sample_pairs(LatticeCfg::default(), 41, 1024).unwrap();
    group.bench_function("intersects_segment_1024", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(s, t)| black_box(s).intersects_segment(*t))
                .count()
        })
    });
    group.bench_function("contains_segment_1024", |b| {
        b.iter(|| {
            pairs
                .iter()
                .filter(|(s, t)| black_box(s).contains_segment(*t))
                .count()
        })
    });
    group.finish();
}

fn regular_ngon(n: usize) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let th = (k as f64) * std::f64::consts::TAU / (n as f64);
            pt(th.cos(), th.sin())
        })
        .collect()
}

fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("seg2_raycast");
    let mut rng = StdRng::seed_from_u64(43);
    let queries: Vec<Point> = (0..256)
        .map(|_| pt(rng.gen_range(-1.2..1.2), rng.gen_range(-1.2..1.2)))
        .collect();
    let edge = seg(0.1, -0.9, -0.3, 0.8);
    group.bench_function("edge_256", |b| {
        b.iter(|| queries.iter().filter(|p| edge.raycast(**p).inside).count())
    });
    for &n in &[4usize, 16, 64, 256] {
        let ring = regular_ngon(n);
        group.bench_with_input(BenchmarkId::new("ring_256", n), &ring, |b, ring| {
            b.iter(|| {
                queries
                    .iter()
                    .filter(|p| raycast_ring(black_box(ring), **p).inside)
                    .count()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_raycast);
criterion_main!(benches);
