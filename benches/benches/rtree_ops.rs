// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rtree::{Config, Measure, RTree, Rect};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::<f64>::from_xywh(x0, y0, cell, cell));
        }
    }
    out
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_rects(count: usize, world: f64, size: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let x0 = rng.next_f64() * (world - size).max(1.0);
        let y0 = rng.next_f64() * (world - size).max(1.0);
        out.push(Rect::<f64>::from_xywh(x0, y0, size, size));
    }
    out
}

fn gen_clustered_rects(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Rect<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    for _ in 0..n_clusters {
        let cx = rng.next_f64() * 2000.0;
        let cy = rng.next_f64() * 2000.0;
        for _ in 0..per_cluster {
            let x0 = cx + (rng.next_f64() - 0.5) * spread;
            let y0 = cy + (rng.next_f64() - 0.5) * spread;
            out.push(Rect::<f64>::from_xywh(x0, y0, 4.0, 4.0));
        }
    }
    out
}

fn build(rects: &[Rect<f64>], config: Config) -> RTree<f64, u32> {
    let mut tree = RTree::with_config(config).unwrap();
    for (i, r) in rects.iter().copied().enumerate() {
        tree.insert(r, i as u32);
    }
    tree
}

fn entries(rects: &[Rect<f64>]) -> Vec<(Rect<f64>, u32)> {
    rects
        .iter()
        .copied()
        .enumerate()
        .map(|(i, r)| (r, i as u32))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_build_f64");
    for &n in &[32usize, 64, 128] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter(|| black_box(build(&rects, Config::default()).len()));
        });

        group.bench_function(format!("bulk_load_n{}", n), |b| {
            b.iter_batched(
                || entries(&rects),
                |entries| {
                    let tree = RTree::bulk_load(Config::default(), entries).unwrap();
                    black_box(tree.height());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_branch_factor(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_branch_factor");
    let rects = gen_random_rects(10_000, 2000.0, 8.0);
    let query = Rect::<f64>::from_xywh(500.0, 500.0, 200.0, 200.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    for &bf in &[4usize, 8, 16, 32] {
        for measure in [Measure::Area, Measure::Margin] {
            let config = Config::new(bf).with_measure(measure);
            group.bench_function(format!("build_query_bf{}_{:?}", bf, measure), |b| {
                b.iter(|| {
                    let tree = build(&rects, config);
                    black_box(tree.search(query).count())
                });
            });
        }
    }
    group.finish();
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_query_f64");
    let rects = gen_clustered_rects(40, 250, 120.0);
    let incremental = build(&rects, Config::default());
    let bulk = RTree::bulk_load(Config::default(), entries(&rects)).unwrap();
    let windows = [
        ("small", Rect::<f64>::from_xywh(900.0, 900.0, 40.0, 40.0)),
        ("medium", Rect::<f64>::from_xywh(500.0, 500.0, 400.0, 400.0)),
        ("everything", incremental.rect()),
    ];
    for (name, query) in windows {
        group.bench_function(format!("insert_built_{}", name), |b| {
            b.iter(|| black_box(incremental.search(query).count()));
        });
        group.bench_function(format!("bulk_built_{}", name), |b| {
            b.iter(|| black_box(bulk.search(query).count()));
        });
    }
    group.bench_function("point_queries_1k", |b| {
        let mut rng = Rng::new(0x5EED);
        b.iter(|| {
            let mut hits = 0;
            for _ in 0..1000 {
                let x = rng.next_f64() * 2000.0;
                let y = rng.next_f64() * 2000.0;
                hits += incremental.query_point(x, y).count();
            }
            black_box(hits)
        });
    });
    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_remove_f64");
    for &n in &[32usize, 64] {
        let rects = gen_grid_rects(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("remove_all_n{}", n), |b| {
            b.iter_batched(
                || build(&rects, Config::default()),
                |mut tree| {
                    for (i, r) in rects.iter().enumerate() {
                        let removed = tree.remove(r, &(i as u32));
                        debug_assert!(removed);
                    }
                    black_box(tree.is_empty())
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("churn_half_n{}", n), |b| {
            b.iter_batched(
                || build(&rects, Config::default()),
                |mut tree| {
                    for (i, r) in rects.iter().enumerate().step_by(2) {
                        tree.remove(r, &(i as u32));
                        tree.insert(*r, i as u32);
                    }
                    black_box(tree.len())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_branch_factor, bench_query, bench_remove);
criterion_main!(benches);
