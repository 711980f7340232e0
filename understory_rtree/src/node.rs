// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree nodes: a closed sum over leaves (data) and branches (child nodes).

use alloc::vec::Vec;

use crate::datum::Datum;
use crate::error::Error;
use crate::types::{Rect, Scalar};

/// Index of a node in the arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

/// Direct contents of a node.
#[derive(Clone, Debug)]
pub(crate) enum Entries<T, E> {
    /// Stored data; height 0.
    Leaf(Vec<Datum<T, E>>),
    /// Owned child nodes, all one level below.
    Branch(Vec<NodeId>),
}

#[derive(Clone, Debug)]
pub(crate) struct Node<T, E> {
    /// Union of the contents' rectangles, or empty.
    pub(crate) rect: Rect<T>,
    /// 0 for leaves, `1 + max(child height)` for branches.
    pub(crate) height: usize,
    /// Number of data stored beneath this node.
    pub(crate) size: usize,
    /// Non-owning back-reference; `None` for the root and detached nodes.
    pub(crate) parent: Option<NodeId>,
    pub(crate) entries: Entries<T, E>,
}

impl<T: Scalar, E> Node<T, E> {
    pub(crate) fn empty_leaf() -> Self {
        Self {
            rect: Rect::empty(),
            height: 0,
            size: 0,
            parent: None,
            entries: Entries::Leaf(Vec::new()),
        }
    }

    /// Leaf holding `items`, failing if there are more than `branch_factor` of them.
    pub(crate) fn leaf(items: Vec<Datum<T, E>>, branch_factor: usize) -> Result<Self, Error> {
        if items.len() > branch_factor {
            return Err(Error::Overfull {
                len: items.len(),
                branch_factor,
            });
        }
        Ok(Self::leaf_unchecked(items))
    }

    pub(crate) fn leaf_unchecked(items: Vec<Datum<T, E>>) -> Self {
        Self {
            rect: Rect::of(items.iter().map(|d| *d.rect())),
            height: 0,
            size: items.len(),
            parent: None,
            entries: Entries::Leaf(items),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(self.entries, Entries::Leaf(_))
    }

    /// Number of direct entries (items or children).
    pub(crate) fn len(&self) -> usize {
        match &self.entries {
            Entries::Leaf(items) => items.len(),
            Entries::Branch(children) => children.len(),
        }
    }

    pub(crate) fn items(&self) -> &[Datum<T, E>] {
        match &self.entries {
            Entries::Leaf(items) => items,
            Entries::Branch(_) => &[],
        }
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        match &self.entries {
            Entries::Leaf(_) => &[],
            Entries::Branch(children) => children,
        }
    }

    /// Append a datum to a leaf and grow its bounds. No overflow check.
    pub(crate) fn push_item(&mut self, datum: Datum<T, E>) {
        debug_assert!(self.is_leaf(), "items only live in leaves");
        if let Entries::Leaf(items) = &mut self.entries {
            self.rect.expand(datum.rect());
            self.size += 1;
            items.push(datum);
        }
    }

    /// Remove the first item equal to `(rect, value)` and recompute bounds.
    ///
    /// Returns whether an item was removed.
    pub(crate) fn remove_item(&mut self, rect: &Rect<T>, value: &E) -> bool
    where
        E: PartialEq,
    {
        let Entries::Leaf(items) = &mut self.entries else {
            return false;
        };
        let Some(pos) = items.iter().position(|d| d.rect() == rect && d.value() == value) else {
            return false;
        };
        items.remove(pos);
        self.size = items.len();
        self.rect = Rect::of(items.iter().map(|d| *d.rect()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cell(x: i64) -> Rect<i64> {
        Rect::new(x, x, x + 1, x + 1)
    }

    fn d(x: i64, v: u32) -> Datum<i64, u32> {
        Datum::new(cell(x), v)
    }

    #[test]
    fn leaf_construction_checks_branch_factor() {
        let leaf = Node::leaf(vec![d(0, 0), d(4, 1)], 2).unwrap();
        assert_eq!(leaf.size, 2);
        assert_eq!(leaf.rect, Rect::new(0, 0, 5, 5));
        let err = Node::leaf(vec![d(0, 0), d(1, 1), d(2, 2)], 2).unwrap_err();
        assert_eq!(
            err,
            Error::Overfull {
                len: 3,
                branch_factor: 2
            }
        );
    }

    #[test]
    fn push_and_remove_maintain_bounds() {
        let mut leaf = Node::<i64, u32>::empty_leaf();
        assert!(leaf.rect.is_empty());
        leaf.push_item(d(0, 0));
        leaf.push_item(d(10, 1));
        assert_eq!(leaf.rect, Rect::new(0, 0, 11, 11));
        assert!(leaf.remove_item(&cell(10), &1));
        assert_eq!(leaf.rect, Rect::new(0, 0, 1, 1));
        assert_eq!(leaf.size, 1);
        assert!(!leaf.remove_item(&cell(10), &1), "already removed");
        assert!(leaf.remove_item(&cell(0), &0));
        assert!(leaf.rect.is_empty());
        assert_eq!(leaf.len(), 0);
    }

    #[test]
    fn remove_matches_rect_and_value() {
        let mut leaf = Node::<i64, &str>::empty_leaf();
        let r = Rect::new(0, 0, 1, 1);
        leaf.push_item(Datum::new(r, "x"));
        assert!(!leaf.remove_item(&r, &"y"));
        assert!(!leaf.remove_item(&Rect::new(0, 0, 2, 2), &"x"));
        assert_eq!(leaf.size, 1);
    }

    #[test]
    fn remove_takes_only_the_first_duplicate() {
        let mut leaf = Node::<i64, u32>::empty_leaf();
        leaf.push_item(d(3, 7));
        leaf.push_item(d(3, 7));
        assert!(leaf.remove_item(&cell(3), &7));
        assert_eq!(leaf.size, 1);
        assert_eq!(leaf.items(), &[d(3, 7)]);
    }
}
