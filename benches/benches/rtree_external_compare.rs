// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_rtree::{Config, RTree, Rect};

use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{AABB, RTree as RStarTree};

type Tagged = GeomWithData<Rectangle<[f64; 2]>, u32>;

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

fn to_rstar(v: &[Rect<f64>]) -> Vec<Tagged> {
    v.iter()
        .enumerate()
        .map(|(i, r)| {
            let rect = Rectangle::from_corners([r.min_x, r.min_y], [r.max_x, r.max_y]);
            GeomWithData::new(rect, i as u32)
        })
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let query = Rect::<f64>::from_xywh(100.0, 100.0, 400.0, 400.0);
        let envelope = AABB::from_corners([query.min_x, query.min_y], [query.max_x, query.max_y]);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_insert_query_n{}", n), |b| {
            b.iter(|| {
                let mut tree = RTree::<f64, u32>::with_config(Config::new(6)).unwrap();
                for (i, r) in rects.iter().copied().enumerate() {
                    tree.insert(r, i as u32);
                }
                black_box(tree.search(query).count())
            });
        });

        group.bench_function(format!("rstar_insert_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar(&rects),
                |items| {
                    let mut tree = RStarTree::new();
                    for item in items {
                        tree.insert(item);
                    }
                    black_box(tree.locate_in_envelope_intersecting(&envelope).count())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("understory_bulk_query_n{}", n), |b| {
            b.iter_batched(
                || {
                    rects
                        .iter()
                        .copied()
                        .enumerate()
                        .map(|(i, r)| (r, i as u32))
                        .collect::<Vec<_>>()
                },
                |entries| {
                    let tree = RTree::bulk_load(Config::new(6), entries).unwrap();
                    black_box(tree.search(query).count())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_bulk_query_n{}", n), |b| {
            b.iter_batched(
                || to_rstar(&rects),
                |items| {
                    let tree = RStarTree::bulk_load(items);
                    black_box(tree.locate_in_envelope_intersecting(&envelope).count())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("understory_remove_all_n{}", n), |b| {
            b.iter_batched(
                || {
                    let mut tree = RTree::<f64, u32>::with_config(Config::new(6)).unwrap();
                    for (i, r) in rects.iter().copied().enumerate() {
                        tree.insert(r, i as u32);
                    }
                    tree
                },
                |mut tree| {
                    for (i, r) in rects.iter().enumerate() {
                        tree.remove(r, &(i as u32));
                    }
                    black_box(tree.len())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_remove_all_n{}", n), |b| {
            b.iter_batched(
                || {
                    let items = to_rstar(&rects);
                    (RStarTree::bulk_load(items.clone()), items)
                },
                |(mut tree, items)| {
                    for item in &items {
                        tree.remove(item);
                    }
                    black_box(tree.size())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
