// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public [`RTree`] container.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::arena::Arena;
use crate::bulk;
use crate::config::Config;
use crate::datum::Datum;
use crate::error::Error;
use crate::node::{Node, NodeId};
use crate::search::{Iter, Search, accept_all};
use crate::types::{Rect, Scalar};
use crate::view::NodeRef;

/// Dynamic R-tree mapping rectangles to payloads.
///
/// All mutation takes `&mut self`; wrap the tree in a lock if several threads need it.
pub struct RTree<T: Scalar, E> {
    config: Config,
    arena: Arena<T, E>,
    root: NodeId,
}

impl<T: Scalar, E> Default for RTree<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar, E> RTree<T, E> {
    /// Create an empty tree with the default [`Config`] (8 entries per node).
    pub fn new() -> Self {
        Self::empty_with(Config::default())
    }

    /// Create an empty tree with the given parameters.
    pub fn with_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::empty_with(config))
    }

    /// Create an empty tree holding at most `branch_factor` entries per node.
    pub fn with_branch_factor(branch_factor: usize) -> Result<Self, Error> {
        Self::with_config(Config::new(branch_factor))
    }

    fn empty_with(config: Config) -> Self {
        let mut arena = Arena::new();
        let root = arena.alloc(Node::empty_leaf());
        Self {
            config,
            arena,
            root,
        }
    }

    /// Build a packed tree from `items` in one pass.
    ///
    /// Faster than repeated [`insert`](Self::insert) and gives tighter nodes. The result is an
    /// ordinary tree: later inserts and removes behave as usual.
    pub fn bulk_load<I>(config: Config, items: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (Rect<T>, E)>,
    {
        config.validate()?;
        let items: Vec<Datum<T, E>> = items.into_iter().map(Datum::from).collect();
        let len = items.len();
        let mut arena = Arena::new();
        let root = bulk::build(&mut arena, items, &config)?;
        tracing::debug!(
            items = len,
            height = arena[root].height,
            nodes = arena.live(),
            "bulk loaded tree"
        );
        Ok(Self {
            config,
            arena,
            root,
        })
    }

    /// Parameters this tree was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of stored data.
    pub fn len(&self) -> usize {
        self.arena[self.root].size
    }

    /// Whether the tree stores nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height of the root: 0 while everything fits in a single leaf.
    pub fn height(&self) -> usize {
        self.arena[self.root].height
    }

    /// Bounds of every stored rectangle, or [`Rect::empty`] for an empty tree.
    pub fn rect(&self) -> Rect<T> {
        self.arena[self.root].rect
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_, T, E> {
        NodeRef::new(&self.arena, self.root)
    }

    /// Number of nodes currently in use.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Remove everything, keeping the configuration.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.alloc(Node::empty_leaf());
        tracing::debug!("cleared tree");
    }

    /// Insert `value` covering `rect`.
    ///
    /// Duplicates are allowed. `rect` must not be inverted; debug builds assert this.
    pub fn insert(&mut self, rect: Rect<T>, value: E) {
        debug_assert!(!rect.is_empty(), "inserted rectangle is inverted: {rect:?}");
        self.insert_datum(Datum::new(rect, value));
    }

    /// Insert an existing [`Datum`].
    pub fn insert_datum(&mut self, datum: Datum<T, E>) {
        let Some(sibling) = self.arena.insert(self.root, datum, &self.config) else {
            return;
        };
        let old_root = self.root;
        self.root = self.arena.branch_unchecked(alloc::vec![old_root, sibling]);
        tracing::trace!(
            height = self.arena[self.root].height,
            len = self.arena[self.root].size,
            "root split; grew a new root"
        );
    }

    /// Remove one stored datum equal to `(rect, value)`.
    ///
    /// Returns `false` and leaves the tree untouched if there is none. Nodes emptied by the
    /// removal are pruned; nodes that merely become sparse are kept.
    pub fn remove(&mut self, rect: &Rect<T>, value: &E) -> bool
    where
        E: PartialEq,
    {
        if !self.arena.remove(self.root, rect, value) {
            return false;
        }
        if self.is_empty() && !self.arena[self.root].is_leaf() {
            // Nothing left to route to; start over from a single leaf.
            self.clear();
        }
        true
    }

    /// Remove one stored datum equal to `datum`. See [`remove`](Self::remove).
    pub fn remove_datum(&mut self, datum: &Datum<T, E>) -> bool
    where
        E: PartialEq,
    {
        self.remove(datum.rect(), datum.value())
    }

    /// Whether a datum equal to `(rect, value)` is stored.
    pub fn contains(&self, rect: &Rect<T>, value: &E) -> bool
    where
        E: PartialEq,
    {
        self.search(*rect)
            .any(|d| d.rect() == rect && d.value() == value)
    }

    /// Lazily yield every datum whose rectangle overlaps `query`.
    ///
    /// An empty query rectangle yields nothing.
    pub fn search(&self, query: Rect<T>) -> Iter<'_, T, E> {
        Search::new(&self.arena, self.root, query, accept_all::<E> as fn(&E) -> bool)
    }

    /// Like [`search`](Self::search), additionally requiring `filter` to accept the payload.
    pub fn search_with<F>(&self, query: Rect<T>, filter: F) -> Search<'_, T, E, F>
    where
        F: FnMut(&E) -> bool,
    {
        Search::new(&self.arena, self.root, query, filter)
    }

    /// Lazily yield every datum whose rectangle contains the point.
    pub fn query_point(&self, x: T, y: T) -> Iter<'_, T, E> {
        self.search(Rect::point(x, y))
    }

    /// Every stored datum, in no particular order.
    pub fn iter(&self) -> Iter<'_, T, E> {
        Search::all(&self.arena, self.root, accept_all::<E> as fn(&E) -> bool)
    }
}

impl<T: Scalar, E> Extend<(Rect<T>, E)> for RTree<T, E> {
    fn extend<I: IntoIterator<Item = (Rect<T>, E)>>(&mut self, iter: I) {
        for (rect, value) in iter {
            self.insert(rect, value);
        }
    }
}

impl<T: Scalar, E> FromIterator<(Rect<T>, E)> for RTree<T, E> {
    fn from_iter<I: IntoIterator<Item = (Rect<T>, E)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Scalar, E> IntoIterator for &'a RTree<T, E> {
    type Item = &'a Datum<T, E>;
    type IntoIter = Iter<'a, T, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Scalar + Clone, E: Clone> Clone for RTree<T, E> {
    fn clone(&self) -> Self {
        Self {
            config: self.config,
            arena: self.arena.clone(),
            root: self.root,
        }
    }
}

impl<T: Scalar, E> Debug for RTree<T, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RTree")
            .field("branch_factor", &self.config.branch_factor())
            .field("min_fill", &self.config.min_fill())
            .field("len", &self.len())
            .field("height", &self.height())
            .field("nodes", &self.arena.live())
            .field("rect", &self.rect())
            .finish_non_exhaustive()
    }
}

/// R-tree with i64 coordinates and i128 metrics.
pub type RTreeI64<E> = RTree<i64, E>;

/// R-tree with f32 coordinates and f64 metrics.
pub type RTreeF32<E> = RTree<f32, E>;

/// R-tree with f64 coordinates and f64 metrics.
pub type RTreeF64<E> = RTree<f64, E>;
