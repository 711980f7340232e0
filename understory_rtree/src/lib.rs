// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rtree --heading-base-level=0

//! Understory R-tree: a dynamic 2D R-tree over axis-aligned rectangles.
//!
//! - Insert rectangles with arbitrary payloads; duplicates are allowed.
//! - Remove a specific `(rect, payload)` pair. Nodes emptied by a removal are pruned.
//! - Query lazily for every datum overlapping a rectangle or containing a point.
//! - Bulk-load a packed tree in one pass with [`RTree::bulk_load`].
//!
//! Overflowing nodes are split with Guttman's quadratic split. Node fanout, minimum fill,
//! and the size measure used for split and descent costs are set through [`Config`].
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Metrics use widened accumulator types (f32→f64, f64→f64, i64→i128).
//! Enable the `kurbo` feature for conversions from `kurbo::Rect`.
//!
//! # Example
//!
//! ```rust
//! use understory_rtree::{Config, RTree, Rect};
//!
//! let mut tree: RTree<i64, &str> = RTree::with_config(Config::new(4)).unwrap();
//! tree.insert(Rect::new(0, 0, 10, 10), "a");
//! tree.insert(Rect::new(5, 5, 15, 15), "b");
//! tree.insert(Rect::new(40, 40, 50, 50), "c");
//!
//! let mut hits: Vec<_> = tree.search(Rect::new(8, 8, 9, 9)).map(|d| *d.value()).collect();
//! hits.sort();
//! assert_eq!(hits, ["a", "b"]);
//!
//! assert!(tree.remove(&Rect::new(0, 0, 10, 10), &"a"));
//! assert_eq!(tree.query_point(1, 1).count(), 0);
//! assert_eq!(tree.len(), 2);
//! ```
//!
//! ## Logging
//!
//! Structural events are reported through [`tracing`]: node splits and root growth at
//! `TRACE`, bulk loads and resets at `DEBUG`. Nothing is emitted unless a subscriber is
//! installed.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates. Inverted rectangles are
//! rejected by a debug assertion on insert.

#![no_std]

extern crate alloc;

mod arena;
mod bulk;
mod node;
mod split;

pub mod config;
pub mod datum;
pub mod error;
pub mod search;
pub mod tree;
pub mod types;
pub mod view;

pub use config::Config;
pub use datum::Datum;
pub use error::Error;
pub use search::{Iter, Search};
pub use tree::{RTree, RTreeF32, RTreeF64, RTreeI64};
pub use types::{Measure, Rect, Scalar, ScalarAcc};
pub use view::NodeRef;
