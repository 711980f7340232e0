// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Watch the tree restructure itself through its `tracing` events.
//!
//! Run:
//! - `RUST_LOG=understory_rtree=trace cargo run -p understory_rtree_demos --example rtree_tracing`

use tracing_subscriber::EnvFilter;
use understory_rtree::{Config, RTree, Rect};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .init();

    let mut tree: RTree<i64, u32> = RTree::with_config(Config::new(3)).unwrap();
    for i in 0..12_u32 {
        let x = i64::from(i) * 10;
        tracing::info!(i, "insert");
        tree.insert(Rect::new(x, 0, x + 5, 5), i);
    }
    tracing::info!(?tree, "after inserts");

    for i in 0..12_u32 {
        let x = i64::from(i) * 10;
        tree.remove(&Rect::new(x, 0, x + 5, 5), &i);
    }
    tracing::info!(?tree, "after removing everything");

    let bulk = RTree::bulk_load(
        Config::new(4),
        (0..100_u32).map(|i| {
            let x = i64::from(i % 10) * 10;
            let y = i64::from(i / 10) * 10;
            (Rect::new(x, y, x + 5, y + 5), i)
        }),
    )
    .unwrap();
    tracing::info!(?bulk, "bulk loaded");
}
