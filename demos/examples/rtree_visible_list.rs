// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-window example: rows indexed by their `kurbo` bounds, queried per scroll offset.
//!
//! Run:
//! - `cargo run -p understory_rtree_demos --example rtree_visible_list`

use kurbo::Rect;
use understory_rtree::RTreeF64;

const ROW_H: f64 = 20.0;
const WIDTH: f64 = 200.0;

fn main() {
    let rows = 1000_usize;
    let tree: RTreeF64<usize> = (0..rows)
        .map(|i| {
            let y0 = i as f64 * ROW_H;
            // Shrink by a hair so adjacent rows don't share an edge.
            let bounds: understory_rtree::Rect<f64> =
                Rect::new(0.0, y0, WIDTH, y0 + ROW_H - 0.01).into();
            (bounds, i)
        })
        .collect();
    println!(
        "indexed {} rows: height={} nodes={}",
        tree.len(),
        tree.height(),
        tree.node_count()
    );

    // Simulate a few scroll positions by changing the viewport rectangle
    for scroll in [0.0, 30.0, 200.0, 600.0] {
        let viewport = Rect::new(0.0, scroll, WIDTH, scroll + 100.0);
        let mut visible: Vec<usize> = tree.search(viewport.into()).map(|d| *d.value()).collect();
        visible.sort_unstable();
        println!("scroll={scroll:.1} -> visible indices: {:?}", visible);
    }

    // Hit test a pointer position, converting the matched bounds back to kurbo.
    for hit in tree.query_point(50.0, 415.0) {
        let bounds: Rect = (*hit.rect()).into();
        println!("pointer over row {} at {:?}", hit.value(), bounds);
    }
}
