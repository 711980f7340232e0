// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! STR-like bulk loading.
//!
//! Entries are sorted by x-centroid into roughly `sqrt(n / branch_factor)` vertical slices,
//! each slice is sorted by y-centroid and cut into nodes of `branch_factor` entries.
//! Levels are promoted the same way until a single root remains, so every leaf ends up at
//! height 0 and every level is complete except for its last node.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::arena::Arena;
use crate::config::Config;
use crate::datum::Datum;
use crate::error::Error;
use crate::node::{Node, NodeId};
use crate::types::{Rect, Scalar};

/// Build a packed tree into `arena` and return its root.
pub(crate) fn build<T: Scalar, E>(
    arena: &mut Arena<T, E>,
    items: Vec<Datum<T, E>>,
    config: &Config,
) -> Result<NodeId, Error> {
    let branch_factor = config.branch_factor();
    if items.is_empty() {
        return Ok(arena.alloc(Node::empty_leaf()));
    }

    let mut level: Vec<NodeId> = Vec::new();
    for chunk in str_groups(items, branch_factor, |d| *d.rect()) {
        level.push(arena.alloc(Node::leaf(chunk, branch_factor)?));
    }

    // Promote until a single root remains
    while level.len() > 1 {
        let groups = str_groups(level, branch_factor, |id| arena[*id].rect);
        level = Vec::with_capacity(groups.len());
        for chunk in groups {
            level.push(arena.branch(chunk, branch_factor)?);
        }
    }
    Ok(level[0])
}

/// Sort-tile-recursive grouping into chunks of at most `branch_factor` entries.
fn str_groups<T, X, F>(mut entries: Vec<X>, branch_factor: usize, rect_of: F) -> Vec<Vec<X>>
where
    T: Scalar,
    F: Fn(&X) -> Rect<T>,
{
    let n = entries.len();
    let num_groups = n.div_ceil(branch_factor);
    let mut gx = 1_usize;
    while gx * gx < num_groups {
        gx += 1;
    }
    entries.sort_by(|a, b| by_centroid(rect_of(a).center_x(), rect_of(b).center_x()));
    // Whole groups per slice keep every node but the last full.
    let slice_size = num_groups.div_ceil(gx) * branch_factor;

    let mut out = Vec::with_capacity(num_groups);
    let mut rest = entries.into_iter();
    loop {
        let mut slice: Vec<X> = rest.by_ref().take(slice_size).collect();
        if slice.is_empty() {
            break;
        }
        slice.sort_by(|a, b| by_centroid(rect_of(a).center_y(), rect_of(b).center_y()));
        let mut chunks = slice.into_iter();
        loop {
            let chunk: Vec<X> = chunks.by_ref().take(branch_factor).collect();
            if chunk.is_empty() {
                break;
            }
            out.push(chunk);
        }
    }
    out
}

fn by_centroid<T: PartialOrd>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
