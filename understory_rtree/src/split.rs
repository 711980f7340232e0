// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic seed-and-distribute split.
//!
//! 1. Seeds: the pair of entries wasting the most space when covered together,
//!    `measure(a ∪ b) - measure(a) - measure(b)`.
//! 2. Distribute: repeatedly take the remaining entry with the strongest preference
//!    `|cost(group 1) - cost(group 2)|` and give it to the group it enlarges least.
//!    Ties go to the group with fewer entries, then to the first group.
//!    Once a group needs every remaining entry to reach the minimum fill, it gets them all.
//!
//! Both the entries and their rectangles are abstract so leaves (data) and branches
//! (child node ids) share the same policy.

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::types::{Measure, Rect, Scalar, cmp_acc};

/// Partition `entries` into two groups of at least `min_fill` entries each.
///
/// `entries` must hold at least two entries and `2 * min_fill <= entries.len()`.
pub(crate) fn quadratic<T, X, F>(
    mut entries: Vec<X>,
    min_fill: usize,
    measure: Measure,
    rect_of: F,
) -> (Vec<X>, Vec<X>)
where
    T: Scalar,
    F: Fn(&X) -> Rect<T>,
{
    debug_assert!(entries.len() >= 2, "split requires overflow");
    debug_assert!(2 * min_fill <= entries.len(), "minimum fill is unreachable");
    let total = entries.len();

    let (s1, s2) = pick_seeds(&entries, measure, &rect_of);
    // `s1 < s2`: remove the higher index first so the lower one stays valid.
    let seed2 = entries.swap_remove(s2);
    let seed1 = entries.swap_remove(s1);

    let mut rect1 = rect_of(&seed1);
    let mut rect2 = rect_of(&seed2);
    let mut group1 = Vec::with_capacity(total - min_fill);
    let mut group2 = Vec::with_capacity(total - min_fill);
    group1.push(seed1);
    group2.push(seed2);

    while !entries.is_empty() {
        if group1.len() + entries.len() <= min_fill {
            group1.append(&mut entries);
            break;
        }
        if group2.len() + entries.len() <= min_fill {
            group2.append(&mut entries);
            break;
        }

        let (next, to_first) = pick_next(
            &entries,
            (&rect1, group1.len()),
            (&rect2, group2.len()),
            measure,
            &rect_of,
        );
        let entry = entries.swap_remove(next);
        let r = rect_of(&entry);
        if to_first {
            rect1.expand(&r);
            group1.push(entry);
        } else {
            rect2.expand(&r);
            group2.push(entry);
        }
    }
    (group1, group2)
}

fn pick_seeds<T, X, F>(entries: &[X], measure: Measure, rect_of: &F) -> (usize, usize)
where
    T: Scalar,
    F: Fn(&X) -> Rect<T>,
{
    let rects: Vec<Rect<T>> = entries.iter().map(rect_of).collect();
    let mut best = (0, 1);
    let mut best_waste: Option<T::Acc> = None;
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let a = &rects[i];
            let b = &rects[j];
            let waste = a.union(b).measure(measure) - a.measure(measure) - b.measure(measure);
            if best_waste.map(|w| waste > w).unwrap_or(true) {
                best_waste = Some(waste);
                best = (i, j);
            }
        }
    }
    best
}

/// Returns the index of the next entry to place and whether it goes to the first group.
fn pick_next<T, X, F>(
    entries: &[X],
    (rect1, len1): (&Rect<T>, usize),
    (rect2, len2): (&Rect<T>, usize),
    measure: Measure,
    rect_of: &F,
) -> (usize, bool)
where
    T: Scalar,
    F: Fn(&X) -> Rect<T>,
{
    let mut best = (0, true);
    let mut best_pref: Option<T::Acc> = None;
    for (i, entry) in entries.iter().enumerate() {
        let r = rect_of(entry);
        let cost1 = rect1.enlargement(&r, measure);
        let cost2 = rect2.enlargement(&r, measure);
        let (pref, order) = match cmp_acc(&cost1, &cost2) {
            Ordering::Less => (cost2 - cost1, Ordering::Less),
            Ordering::Greater => (cost1 - cost2, Ordering::Greater),
            Ordering::Equal => (cost1 - cost2, len1.cmp(&len2)),
        };
        if best_pref.map(|p| pref > p).unwrap_or(true) {
            best_pref = Some(pref);
            best = (i, order != Ordering::Greater);
        }
    }
    best
}
