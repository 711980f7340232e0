// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to the node structure.

use core::fmt::Debug;

use crate::arena::Arena;
use crate::datum::Datum;
use crate::node::NodeId;
use crate::types::{Rect, Scalar};

/// Borrowed view of one node of an [`RTree`](crate::RTree).
///
/// Useful for debugging, visualization, and checking structural invariants.
pub struct NodeRef<'a, T, E> {
    arena: &'a Arena<T, E>,
    id: NodeId,
}

impl<T, E> Copy for NodeRef<'_, T, E> {}

impl<T, E> Clone for NodeRef<'_, T, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T: Scalar, E> NodeRef<'a, T, E> {
    pub(crate) fn new(arena: &'a Arena<T, E>, id: NodeId) -> Self {
        Self { arena, id }
    }

    /// Bounding rectangle of everything beneath this node; empty if it holds nothing.
    pub fn rect(&self) -> Rect<T> {
        self.arena[self.id].rect
    }

    /// 0 for leaves, one more than the tallest child otherwise.
    pub fn height(&self) -> usize {
        self.arena[self.id].height
    }

    /// Number of data stored beneath this node.
    pub fn size(&self) -> usize {
        self.arena[self.id].size
    }

    /// Number of direct entries: items for a leaf, children for a branch.
    pub fn len(&self) -> usize {
        self.arena[self.id].len()
    }

    /// Whether the node has no direct entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this node stores data directly.
    pub fn is_leaf(&self) -> bool {
        self.arena[self.id].is_leaf()
    }

    /// The node owning this one, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.arena[self.id]
            .parent
            .map(|p| Self::new(self.arena, p))
    }

    /// Direct children; empty for leaves.
    pub fn children(self) -> impl ExactSizeIterator<Item = NodeRef<'a, T, E>> {
        let arena = self.arena;
        arena[self.id]
            .children()
            .iter()
            .map(move |c| NodeRef::new(arena, *c))
    }

    /// Data stored directly in this node; empty for branches.
    pub fn items(&self) -> &'a [Datum<T, E>] {
        let arena = self.arena;
        arena[self.id].items()
    }

    /// Whether both views refer to the same node of the same tree.
    pub fn same_node(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<T: Scalar, E> Debug for NodeRef<'_, T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id.get())
            .field("rect", &self.rect())
            .field("height", &self.height())
            .field("size", &self.size())
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
