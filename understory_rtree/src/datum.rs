// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stored (rectangle, payload) pairs.

use crate::types::Rect;

/// A rectangle paired with a payload; the unit stored in the tree.
///
/// Equality is structural over both fields, which is also how removal identifies entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Datum<T, E> {
    rect: Rect<T>,
    value: E,
}

impl<T, E> Datum<T, E> {
    /// Pair a rectangle with a payload.
    pub const fn new(rect: Rect<T>, value: E) -> Self {
        Self { rect, value }
    }

    /// Bounding rectangle of the payload.
    pub const fn rect(&self) -> &Rect<T> {
        &self.rect
    }

    /// The payload.
    pub const fn value(&self) -> &E {
        &self.value
    }

    /// Split into the rectangle and the payload.
    pub fn into_parts(self) -> (Rect<T>, E) {
        (self.rect, self.value)
    }
}

impl<T, E> From<(Rect<T>, E)> for Datum<T, E> {
    fn from((rect, value): (Rect<T>, E)) -> Self {
        Self::new(rect, value)
    }
}
