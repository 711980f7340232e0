// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory R-tree: insert, query, remove.

use understory_rtree::{Config, RTree, Rect};

fn main() {
    let mut tree: RTree<i64, u32> = RTree::with_config(Config::new(4)).unwrap();
    for i in 0..10 {
        let x = i64::from(i) * 10;
        tree.insert(Rect::new(x, 0, x + 8, 8), i);
    }
    println!("len={} height={} bounds={:?}", tree.len(), tree.height(), tree.rect());

    // Window query
    let hits: Vec<u32> = tree.search(Rect::new(15, 2, 35, 4)).map(|d| *d.value()).collect();
    println!("hits in window: {hits:?}");

    // Remove one entry; a mismatched payload removes nothing
    assert!(!tree.remove(&Rect::new(0, 0, 8, 8), &99));
    assert!(tree.remove(&Rect::new(0, 0, 8, 8), &0));
    println!("after removal: len={} bounds={:?}", tree.len(), tree.rect());
}
