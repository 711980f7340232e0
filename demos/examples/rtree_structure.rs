// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Print the node structure of a small tree, before and after removals.
//!
//! Run:
//! - `cargo run -p understory_rtree_demos --example rtree_structure`

use understory_rtree::{Config, Measure, NodeRef, RTree, Rect};

fn dump(node: NodeRef<'_, i64, char>, depth: usize) {
    let indent = "  ".repeat(depth);
    if node.is_leaf() {
        let items: String = node.items().iter().map(|d| *d.value()).collect();
        println!("{indent}leaf {:?} [{items}]", node.rect());
        return;
    }
    println!(
        "{indent}branch h={} size={} {:?}",
        node.height(),
        node.size(),
        node.rect()
    );
    for child in node.children() {
        dump(child, depth + 1);
    }
}

fn main() {
    let config = Config::new(4).with_measure(Measure::Margin);
    let mut tree: RTree<i64, char> = RTree::with_config(config).unwrap();
    for (i, c) in ('a'..='p').enumerate() {
        let i = i as i64;
        // Two clusters, far apart.
        let base = if i % 2 == 0 { 0 } else { 1000 };
        tree.insert(Rect::<i64>::from_xywh(base + i * 3, i * 2, 4, 4), c);
    }
    dump(tree.root(), 0);

    println!("-- removing the right-hand cluster --");
    for (i, c) in ('a'..='p').enumerate() {
        let i = i as i64;
        if i % 2 == 1 {
            tree.remove(&Rect::<i64>::from_xywh(1000 + i * 3, i * 2, 4, 4), &c);
        }
    }
    dump(tree.root(), 0);
}
