// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node storage and the recursive insert/remove/split machinery.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. A parent owns its
//! children through its [`Entries::Branch`] list; the `parent` field on a child is only a
//! back-reference. Splits travel back up the recursion as `Option<NodeId>` return values.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::config::Config;
use crate::datum::Datum;
use crate::error::Error;
use crate::node::{Entries, Node, NodeId};
use crate::split;
use crate::types::{Measure, Rect, Scalar};

#[derive(Clone, Debug)]
pub(crate) struct Arena<T, E> {
    nodes: Vec<Node<T, E>>,
    free_list: Vec<NodeId>,
}

impl<T, E> Index<NodeId> for Arena<T, E> {
    type Output = Node<T, E>;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.get()]
    }
}

impl<T, E> IndexMut<NodeId> for Arena<T, E> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.get()]
    }
}

impl<T: Scalar, E> Arena<T, E> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub(crate) fn live(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
    }

    pub(crate) fn alloc(&mut self, node: Node<T, E>) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self[id] = node;
            id
        } else {
            self.nodes.push(node);
            NodeId::new(self.nodes.len() - 1)
        }
    }

    /// Drop a detached node's contents and recycle its slot.
    fn release(&mut self, id: NodeId) {
        debug_assert!(self[id].parent.is_none(), "released node is still attached");
        self[id] = Node::empty_leaf();
        self.free_list.push(id);
    }

    /// Branch owning `children`, failing if there are more than `branch_factor` of them.
    pub(crate) fn branch(
        &mut self,
        children: Vec<NodeId>,
        branch_factor: usize,
    ) -> Result<NodeId, Error> {
        if children.len() > branch_factor {
            return Err(Error::Overfull {
                len: children.len(),
                branch_factor,
            });
        }
        Ok(self.branch_unchecked(children))
    }

    pub(crate) fn branch_unchecked(&mut self, children: Vec<NodeId>) -> NodeId {
        let id = self.alloc(Node {
            rect: Rect::empty(),
            height: 1,
            size: 0,
            parent: None,
            entries: Entries::Branch(Vec::with_capacity(children.len())),
        });
        for child in children {
            self.add_child(id, child);
        }
        id
    }

    /// Attach `child` at the end of `parent` and fold it into the parent's summary.
    pub(crate) fn add_child(&mut self, parent: NodeId, child: NodeId) {
        let end = self[parent].len();
        self.link(parent, end, child);
        let (rect, size, height) = {
            let c = &self[child];
            (c.rect, c.size, c.height)
        };
        let p = &mut self[parent];
        p.rect.expand(&rect);
        p.size += size;
        p.height = p.height.max(height + 1);
    }

    /// Detach `child` from `parent`, release it, and recompute the parent's summary.
    pub(crate) fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if let Entries::Branch(children) = &mut self[parent].entries {
            children.retain(|c| *c != child);
        }
        self[child].parent = None;
        self.release(child);
        self.refresh(parent);
    }

    /// Insert `child` into `parent`'s child list at `pos` and set its back-reference.
    ///
    /// Does not touch the parent's rect, size, or height.
    fn link(&mut self, parent: NodeId, pos: usize, child: NodeId) {
        debug_assert!(self[child].parent.is_none(), "child already has a parent");
        if let Entries::Branch(children) = &mut self[parent].entries {
            children.insert(pos, child);
        }
        self[child].parent = Some(parent);
    }

    /// Recompute rect, size, and height of `id` from its direct contents.
    pub(crate) fn refresh(&mut self, id: NodeId) {
        let (rect, size, height) = match &self[id].entries {
            Entries::Leaf(items) => (Rect::of(items.iter().map(|d| *d.rect())), items.len(), 0),
            Entries::Branch(children) => {
                let mut rect = Rect::empty();
                let mut size = 0;
                let mut height = 1;
                for c in children {
                    let c = &self[*c];
                    rect.expand(&c.rect);
                    size += c.size;
                    height = height.max(c.height + 1);
                }
                (rect, size, height)
            }
        };
        let node = &mut self[id];
        node.rect = rect;
        node.size = size;
        node.height = height;
    }

    /// Child of a branch with the least enlargement to cover `rect`; the first one wins ties.
    fn best_child(
        &self,
        children: &[NodeId],
        rect: &Rect<T>,
        measure: Measure,
    ) -> (usize, NodeId) {
        let mut best = (0, children[0]);
        let mut best_cost: Option<T::Acc> = None;
        for (i, c) in children.iter().enumerate() {
            let cost = self[*c].rect.enlargement(rect, measure);
            if best_cost.map(|bc| cost < bc).unwrap_or(true) {
                best_cost = Some(cost);
                best = (i, *c);
            }
        }
        best
    }

    /// Insert `datum` beneath `id`.
    ///
    /// Returns the new sibling of `id` if `id` overflowed and split; the caller attaches it.
    pub(crate) fn insert(
        &mut self,
        id: NodeId,
        datum: Datum<T, E>,
        config: &Config,
    ) -> Option<NodeId> {
        let best = match &self[id].entries {
            Entries::Leaf(_) => None,
            Entries::Branch(children) => {
                Some(self.best_child(children, datum.rect(), config.measure()))
            }
        };
        let Some((pos, child)) = best else {
            self[id].push_item(datum);
            return self.split_if_overfull(id, config);
        };

        // Bounds cover the datum before descending.
        let node = &mut self[id];
        node.rect.expand(datum.rect());
        node.size += 1;

        let sibling = self.insert(child, datum, config)?;
        // The sibling's contents came from `child`, which is already covered.
        self.link(id, pos + 1, sibling);
        self.split_if_overfull(id, config)
    }

    fn split_if_overfull(&mut self, id: NodeId, config: &Config) -> Option<NodeId> {
        if self[id].len() <= config.branch_factor() {
            return None;
        }
        Some(self.split(id, config))
    }

    /// Partition the contents of `id` between itself and a new sibling of the same kind.
    ///
    /// Returns the detached sibling.
    pub(crate) fn split(&mut self, id: NodeId, config: &Config) -> NodeId {
        let entries = core::mem::replace(&mut self[id].entries, Entries::Branch(Vec::new()));
        let (kept, moved) = match entries {
            Entries::Leaf(items) => {
                let (a, b) =
                    split::quadratic(items, config.min_fill(), config.measure(), |d| *d.rect());
                (Entries::Leaf(a), Entries::Leaf(b))
            }
            Entries::Branch(children) => {
                let (a, b) =
                    split::quadratic(children, config.min_fill(), config.measure(), |c| {
                        self[*c].rect
                    });
                (Entries::Branch(a), Entries::Branch(b))
            }
        };
        self[id].entries = kept;
        self.refresh(id);

        let sibling = self.alloc(Node {
            rect: Rect::empty(),
            height: 0,
            size: 0,
            parent: None,
            entries: moved,
        });
        let moved_children: Vec<NodeId> = self[sibling].children().to_vec();
        for c in moved_children {
            self[c].parent = Some(sibling);
        }
        self.refresh(sibling);

        tracing::trace!(
            node = id.get(),
            sibling = sibling.get(),
            height = self[id].height,
            kept = self[id].len(),
            moved = self[sibling].len(),
            "split overflowing node"
        );
        sibling
    }

    /// Remove one datum equal to `(rect, value)` from beneath `id`.
    ///
    /// Only children whose rect overlaps `rect` are visited. A child left empty is
    /// pruned before returning; partially filled children are left as they are.
    pub(crate) fn remove(&mut self, id: NodeId, rect: &Rect<T>, value: &E) -> bool
    where
        E: PartialEq,
    {
        let candidates: Vec<NodeId> = match &self[id].entries {
            Entries::Leaf(_) => return self[id].remove_item(rect, value),
            Entries::Branch(children) => children
                .iter()
                .copied()
                .filter(|c| self[*c].rect.overlaps(rect))
                .collect(),
        };

        let mut removed_from = None;
        for child in candidates {
            if self.remove(child, rect, value) {
                removed_from = Some(child);
                break;
            }
        }
        let Some(child) = removed_from else {
            return false;
        };
        if self[child].size == 0 {
            self.remove_child(id, child);
        } else {
            self.refresh(id);
        }
        true
    }

    /// Iterate the ids of `id` and every node beneath it, parents before children.
    #[cfg(test)]
    pub(crate) fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![id];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self[n].children().iter().copied());
        }
        out
    }
}
