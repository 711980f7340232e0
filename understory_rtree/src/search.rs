// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy range queries.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::arena::Arena;
use crate::datum::Datum;
use crate::node::{Entries, NodeId};
use crate::types::{Rect, Scalar};

/// Payload filter that accepts everything.
pub(crate) fn accept_all<E>(_: &E) -> bool {
    true
}

/// Lazy iterator over the data whose rectangle overlaps a query rectangle.
///
/// Returned by [`RTree::search`](crate::RTree::search),
/// [`RTree::search_with`](crate::RTree::search_with), and [`RTree::iter`](crate::RTree::iter).
/// Subtrees whose bounds lie entirely inside the query are yielded without testing each datum.
/// Results come in no particular order.
pub struct Search<'a, T, E, F> {
    arena: &'a Arena<T, E>,
    query: Rect<T>,
    filter: F,
    /// Pending nodes; `true` when the whole subtree is inside the query.
    stack: Vec<(NodeId, bool)>,
    items: core::slice::Iter<'a, Datum<T, E>>,
    items_inside: bool,
}

/// Iterator over every datum in a tree.
pub type Iter<'a, T, E> = Search<'a, T, E, fn(&E) -> bool>;

impl<'a, T: Scalar, E, F: FnMut(&E) -> bool> Search<'a, T, E, F> {
    pub(crate) fn new(arena: &'a Arena<T, E>, root: NodeId, query: Rect<T>, filter: F) -> Self {
        let mut stack = Vec::new();
        let bounds = arena[root].rect;
        if arena[root].size > 0 && !query.is_empty() {
            if query.contains(&bounds) {
                stack.push((root, true));
            } else if query.overlaps(&bounds) {
                stack.push((root, false));
            }
        }
        Self {
            arena,
            query,
            filter,
            stack,
            items: core::slice::Iter::default(),
            items_inside: false,
        }
    }

    /// Every datum beneath `root`, with no rectangle tests.
    pub(crate) fn all(arena: &'a Arena<T, E>, root: NodeId, filter: F) -> Self {
        let stack = if arena[root].size > 0 {
            alloc::vec![(root, true)]
        } else {
            Vec::new()
        };
        Self {
            arena,
            query: arena[root].rect,
            filter,
            stack,
            items: core::slice::Iter::default(),
            items_inside: false,
        }
    }

    /// The query rectangle.
    pub fn query(&self) -> &Rect<T> {
        &self.query
    }
}

impl<'a, T: Scalar, E, F: FnMut(&E) -> bool> Iterator for Search<'a, T, E, F> {
    type Item = &'a Datum<T, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for d in self.items.by_ref() {
                if (self.items_inside || d.rect().overlaps(&self.query)) && (self.filter)(d.value())
                {
                    return Some(d);
                }
            }
            let (id, inside) = self.stack.pop()?;
            let arena = self.arena;
            match &arena[id].entries {
                Entries::Leaf(items) => {
                    self.items = items.iter();
                    self.items_inside = inside;
                }
                Entries::Branch(children) => {
                    for c in children.iter().rev() {
                        if inside {
                            self.stack.push((*c, true));
                            continue;
                        }
                        let bounds = &arena[*c].rect;
                        if self.query.contains(bounds) {
                            self.stack.push((*c, true));
                        } else if self.query.overlaps(bounds) {
                            self.stack.push((*c, false));
                        }
                    }
                }
            }
        }
    }
}

impl<T: Clone, E, F: Clone> Clone for Search<'_, T, E, F> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            query: self.query.clone(),
            filter: self.filter.clone(),
            stack: self.stack.clone(),
            items: self.items.clone(),
            items_inside: self.items_inside,
        }
    }
}

impl<T: Debug, E, F> Debug for Search<'_, T, E, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Search")
            .field("query", &self.query)
            .field("pending_nodes", &self.stack.len())
            .field("pending_items", &self.items.len())
            .finish_non_exhaustive()
    }
}
