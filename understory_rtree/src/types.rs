// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Axis-aligned rectangle in 2D.
///
/// A rectangle with `min > max` on either axis is *empty*. [`Rect::empty`] returns the
/// canonical empty rectangle, which is the identity of [`Rect::union`] and overlaps nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Rect<T> {
    /// Create a new rectangle from min/max corners.
    ///
    /// The caller is responsible for `min <= max` on both axes; see [`Rect::from_corners`]
    /// for a normalizing constructor.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Scalar> Rect<T> {
    /// The canonical empty rectangle ("no bounds yet").
    pub fn empty() -> Self {
        Self::new(T::HIGHEST, T::HIGHEST, T::LOWEST, T::LOWEST)
    }

    /// Create a rectangle spanning two arbitrary corners, ordering each axis.
    pub fn from_corners(x0: T, y0: T, x1: T, y1: T) -> Self {
        Self::new(min_t(x0, x1), min_t(y0, y1), max_t(x0, x1), max_t(y0, y1))
    }

    /// A degenerate rectangle covering a single point.
    pub fn point(x: T, y: T) -> Self {
        Self::new(x, y, x, y)
    }

    /// Return true if the rectangle is empty or inverted. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max_x, self.min_x) || lt(self.max_y, self.min_y)
    }

    /// Whether this rectangle contains the point (edges inclusive).
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Whether the two rectangles share at least one point (edges inclusive).
    ///
    /// Empty rectangles overlap nothing.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        le(self.min_x, other.max_x)
            && le(other.min_x, self.max_x)
            && le(self.min_y, other.max_y)
            && le(other.min_y, self.max_y)
    }

    /// Whether `other` lies fully inside this rectangle.
    ///
    /// Every rectangle contains the empty rectangle; the empty rectangle contains nothing else.
    pub fn contains(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.is_empty() {
            return false;
        }
        le(self.min_x, other.min_x)
            && le(self.min_y, other.min_y)
            && le(other.max_x, self.max_x)
            && le(other.max_y, self.max_y)
    }

    /// Smallest rectangle covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        union_rect(*self, *other)
    }

    /// Grow this rectangle in place to also cover `other`.
    pub fn expand(&mut self, other: &Self) {
        *self = union_rect(*self, *other);
    }

    /// Union of every rectangle yielded by `rects`, or [`Rect::empty`] if there are none.
    pub fn of<I: IntoIterator<Item = Self>>(rects: I) -> Self {
        rects
            .into_iter()
            .fold(Self::empty(), |acc, r| union_rect(acc, r))
    }

    /// Area in the widened accumulator type; zero for empty rectangles.
    pub fn area(&self) -> T::Acc {
        let w = T::max_zero(T::sub(self.max_x, self.min_x));
        let h = T::max_zero(T::sub(self.max_y, self.min_y));
        T::widen(w) * T::widen(h)
    }

    /// Half perimeter (width plus height) in the widened accumulator type.
    pub fn margin(&self) -> T::Acc {
        let w = T::max_zero(T::sub(self.max_x, self.min_x));
        let h = T::max_zero(T::sub(self.max_y, self.min_y));
        T::widen(w) + T::widen(h)
    }

    /// Size of this rectangle under `measure`.
    pub fn measure(&self, measure: Measure) -> T::Acc {
        match measure {
            Measure::Area => self.area(),
            Measure::Margin => self.margin(),
        }
    }

    /// Increase in `measure` needed to grow this rectangle to also cover `other`.
    ///
    /// Zero when `other` is already contained.
    pub fn enlargement(&self, other: &Self, measure: Measure) -> T::Acc {
        if self.contains(other) {
            return T::widen(T::zero());
        }
        self.union(other).measure(measure) - self.measure(measure)
    }

    /// Center x coordinate.
    pub fn center_x(&self) -> T {
        T::mid(self.min_x, self.max_x)
    }

    /// Center y coordinate.
    pub fn center_y(&self) -> T {
        T::mid(self.min_y, self.max_y)
    }
}

impl Rect<f32> {
    /// Create a rectangle from origin and size in f32.
    pub const fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Rect<f64> {
    /// Create a rectangle from origin and size in f64.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

impl Rect<i64> {
    /// Create a rectangle from origin and size in i64.
    pub const fn from_xywh(x: i64, y: i64, w: i64, h: i64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect<f64> {
    fn from(r: kurbo::Rect) -> Self {
        Self::from_corners(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect<f64>> for kurbo::Rect {
    fn from(r: Rect<f64>) -> Self {
        Self::new(r.min_x, r.min_y, r.max_x, r.max_y)
    }
}

/// Extent measure used to compare rectangles during descent and splitting.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Measure {
    /// Width times height.
    #[default]
    Area,
    /// Width plus height. Still discriminates between degenerate (zero-area) rectangles.
    Margin,
}

/// Numeric scalar abstraction for 2D rectangles.
///
/// This trait provides the minimal set of operations needed for area/margin metrics and
/// centroid computations, and an associated widened accumulator type
/// (e.g., f32→f64, i64→i128).
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Widened accumulator type suitable for area/cost computations.
    type Acc: Copy
        + PartialOrd
        + core::ops::Add<Output = Self::Acc>
        + core::ops::Sub<Output = Self::Acc>
        + core::ops::Mul<Output = Self::Acc>
        + Debug;

    /// Largest representable value; the min corner of [`Rect::empty`].
    const HIGHEST: Self;

    /// Smallest representable value; the max corner of [`Rect::empty`].
    const LOWEST: Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Max of the scalar value and zero.
    fn max_zero(v: Self) -> Self;

    /// Midpoint between a and b (used for centroid ordering).
    fn mid(a: Self, b: Self) -> Self;

    /// Convert a scalar to the accumulator type.
    fn widen(v: Self) -> Self::Acc;
}

impl Scalar for f32 {
    type Acc = f64;

    const HIGHEST: Self = Self::INFINITY;
    const LOWEST: Self = Self::NEG_INFINITY;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as f64
    }
}

impl Scalar for f64 {
    type Acc = Self;

    const HIGHEST: Self = Self::INFINITY;
    const LOWEST: Self = Self::NEG_INFINITY;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0.0)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        0.5 * (a + b)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v
    }
}

impl Scalar for i64 {
    type Acc = i128;

    const HIGHEST: Self = Self::MAX;
    const LOWEST: Self = Self::MIN;

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a.saturating_sub(b)
    }

    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn max_zero(v: Self) -> Self {
        v.max(0)
    }

    #[inline]
    fn mid(a: Self, b: Self) -> Self {
        // Average without overflow: (a & b) + ((a ^ b) >> 1)
        (a & b) + ((a ^ b) >> 1)
    }

    #[inline]
    fn widen(v: Self) -> Self::Acc {
        v as i128
    }
}

/// Helper alias for the widened accumulator type associated with a scalar `T`.
pub type ScalarAcc<T> = <T as Scalar>::Acc;

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}

pub(crate) fn union_rect<T: PartialOrd + Copy>(a: Rect<T>, b: Rect<T>) -> Rect<T> {
    Rect {
        min_x: min_t(a.min_x, b.min_x),
        min_y: min_t(a.min_y, b.min_y),
        max_x: max_t(a.max_x, b.max_x),
        max_y: max_t(a.max_y, b.max_y),
    }
}

/// Total order over accumulator values; incomparable values (NaN) compare equal.
pub(crate) fn cmp_acc<A: PartialOrd>(a: &A, b: &A) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_union_identity() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Rect::empty().union(&r), r);
        assert_eq!(r.union(&Rect::empty()), r);
        let ri = Rect::new(-5_i64, -5, 5, 5);
        assert_eq!(Rect::<i64>::empty().union(&ri), ri);
    }

    #[test]
    fn empty_has_zero_measure_and_overlaps_nothing() {
        let e = Rect::<f64>::empty();
        assert!(e.is_empty());
        assert_eq!(e.area(), 0.0);
        assert_eq!(e.margin(), 0.0);
        assert!(!e.overlaps(&Rect::new(-1.0e300, -1.0e300, 1.0e300, 1.0e300)));
        assert_eq!(Rect::<i64>::empty().area(), 0);
        let everything = Rect::new(i64::MIN, i64::MIN, i64::MAX, i64::MAX);
        assert!(!Rect::<i64>::empty().overlaps(&everything));
    }

    #[test]
    fn overlap_is_edge_inclusive() {
        let a = Rect::new(0_i64, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(10, 10, 20, 20)));
        assert!(!a.overlaps(&Rect::new(11, 0, 20, 10)));
        assert!(a.overlaps(&Rect::point(5, 5)));
    }

    #[test]
    fn containment() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains(&Rect::new(1.0, 1.0, 9.0, 10.0)));
        assert!(!a.contains(&Rect::new(1.0, 1.0, 11.0, 9.0)));
        assert!(a.contains(&Rect::empty()));
        assert!(!Rect::empty().contains(&a));
    }

    #[test]
    fn enlargement_is_zero_when_contained() {
        let a = Rect::new(0_i64, 0, 10, 10);
        assert_eq!(a.enlargement(&Rect::new(2, 2, 3, 3), Measure::Area), 0);
        assert_eq!(a.enlargement(&Rect::new(0, 0, 20, 10), Measure::Area), 100);
        assert_eq!(a.enlargement(&Rect::new(0, 0, 20, 10), Measure::Margin), 10);
    }

    #[test]
    fn from_corners_orders_axes() {
        let r = Rect::from_corners(5.0, -1.0, -3.0, 4.0);
        assert_eq!(r, Rect::new(-3.0, -1.0, 5.0, 4.0));
        assert!(!r.is_empty());
    }

    #[test]
    fn of_folds_to_bounds() {
        let r = Rect::of([Rect::new(0_i64, 0, 1, 1), Rect::new(5, -2, 6, 0)]);
        assert_eq!(r, Rect::new(0, -2, 6, 1));
        assert!(Rect::<f32>::of([]).is_empty());
    }
}
