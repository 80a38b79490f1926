// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Interval
//!
//! This module provides [`Interval`], a convex set over any totally ordered type, described by a
//! lower and an upper [`BoundaryLimit`]. Either end can be open, closed, or unbounded.
//!
//! The rules follow the usual mathematical definition: `[1, 3]` holds 1 and 3, `(1, 3)` holds
//! neither, `[1, +∞)` holds everything from 1 upwards. Two degenerate shapes get special
//! treatment:
//!
//! - an **empty** interval has two open ends on the same value, e.g. `(4, 4)`;
//! - a **single-element** interval has both ends on the same value and at least one of them
//!   closed, e.g. `[4, 4]`.
//!
//! Equality is set equality: all empty intervals are equal to each other no matter where they
//! sit, and single-element intervals compare by their one element.
//!
//! ## Same-kind reconstruction
//!
//! Operations that produce new intervals ([`Interval::intersect`], [`Interval::gap`],
//! [`Interval::complement_relative_to`]) come in two flavours. The plain one returns an
//! `Interval<T>`. The `*_with` one hands the computed limits to an [`IntervalKind`], which
//! decides what the result looks like. Domain types that wrap an `Interval<T>` (for example a
//! day range that only ever has closed ends) use this to keep their own shape through the
//! algebra.

use smallvec::SmallVec;
use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{Bound, RangeBounds},
};

mod limit;
pub use limit::{BoundaryLimit, Side};

/// Error returned when limits do not describe a valid interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalError(&'static str);

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for IntervalError {}

impl IntervalError {
    pub(crate) const fn new(msg: &'static str) -> Self {
        Self(msg)
    }
}

/// Builds "an interval of the same kind" from a pair of limits.
///
/// The limits handed to [`IntervalKind::reconstruct`] are always tagged lower/upper and ordered
/// (lower does not exceed upper), though they may describe an empty set.
///
/// Implementations build their own types; a bare [`Interval`] only comes out of the checked
/// constructors and the interval operations themselves:
///
/// ```compile_fail
/// use spans::{BoundaryLimit, IntervalKind, interval::Plain};
/// let inverted = Plain.reconstruct(BoundaryLimit::lower(true, 5), BoundaryLimit::upper(true, 1));
/// ```
pub trait IntervalKind<T> {
    type Output;

    fn reconstruct(&self, lower: BoundaryLimit<T>, upper: BoundaryLimit<T>) -> Self::Output;
}

/// The reconstruction used by the plain operations: just an [`Interval`].
///
/// Crate-private, since it builds an interval without checking the limits.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Plain;

impl<T> IntervalKind<T> for Plain {
    type Output = Interval<T>;

    fn reconstruct(&self, lower: BoundaryLimit<T>, upper: BoundaryLimit<T>) -> Interval<T> {
        Interval { lower, upper }
    }
}

/// A convex set of values of `T`, bounded (or not) on each side.
///
/// See the [module documentation](self) for the semantics of open, closed, empty and
/// single-element intervals.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInterval<T>",
        bound(deserialize = "T: Ord + ::serde::Deserialize<'de>")
    )
)]
pub struct Interval<T> {
    lower: BoundaryLimit<T>,
    upper: BoundaryLimit<T>,
}

/// Wire shape of an [`Interval`]; deserialization goes through [`Interval::try_new`].
#[cfg(feature = "serde")]
#[derive(::serde::Deserialize)]
struct RawInterval<T> {
    lower: BoundaryLimit<T>,
    upper: BoundaryLimit<T>,
}

#[cfg(feature = "serde")]
impl<T: Ord> TryFrom<RawInterval<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(raw: RawInterval<T>) -> Result<Self, Self::Error> {
        Self::try_new(raw.lower, raw.upper)
    }
}

impl<T: Ord> Interval<T> {
    /// Creates an interval from two limits.
    ///
    /// Fails if `lower` is not a lower limit, `upper` is not an upper limit, or the lower value
    /// exceeds the upper one.
    pub fn try_new(lower: BoundaryLimit<T>, upper: BoundaryLimit<T>) -> Result<Self, IntervalError> {
        if !lower.is_lower() || !upper.is_upper() {
            return Err(IntervalError::new("limits must be given as (lower, upper)"));
        }
        if lower.compare(&upper) == Ordering::Greater {
            return Err(IntervalError::new("lower limit must not exceed upper limit"));
        }
        Ok(Self { lower, upper })
    }

    /// Creates a bounded interval with explicit inclusion of each end.
    pub fn try_over(
        lower: T,
        lower_included: bool,
        upper: T,
        upper_included: bool,
    ) -> Result<Self, IntervalError> {
        Self::try_new(
            BoundaryLimit::lower(lower_included, lower),
            BoundaryLimit::upper(upper_included, upper),
        )
    }

    /// Creates a bounded interval with explicit inclusion of each end.
    ///
    /// # Panics
    /// If `lower > upper`. Use [`Self::try_over`] to get an error instead.
    #[must_use]
    #[track_caller]
    pub fn over(lower: T, lower_included: bool, upper: T, upper_included: bool) -> Self {
        match Self::try_over(lower, lower_included, upper, upper_included) {
            Ok(interval) => interval,
            Err(e) => panic!("{e}"),
        }
    }

    /// `[lower, upper]`
    ///
    /// # Panics
    /// If `lower > upper`.
    #[must_use]
    #[track_caller]
    pub fn closed(lower: T, upper: T) -> Self {
        Self::over(lower, true, upper, true)
    }

    /// `(lower, upper)`
    ///
    /// # Panics
    /// If `lower > upper`.
    #[must_use]
    #[track_caller]
    pub fn open(lower: T, upper: T) -> Self {
        Self::over(lower, false, upper, false)
    }
}

impl<T> Interval<T> {
    /// `{value}`
    #[must_use]
    pub fn single(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            lower: BoundaryLimit::lower(true, value.clone()),
            upper: BoundaryLimit::upper(true, value),
        }
    }

    /// `[lower, +∞)`
    #[must_use]
    pub fn at_least(lower: T) -> Self {
        Self::unbounded_above(BoundaryLimit::lower(true, lower))
    }

    /// `(lower, +∞)`
    #[must_use]
    pub fn greater_than(lower: T) -> Self {
        Self::unbounded_above(BoundaryLimit::lower(false, lower))
    }

    /// `(-∞, upper]`
    #[must_use]
    pub fn at_most(upper: T) -> Self {
        Self::unbounded_below(BoundaryLimit::upper(true, upper))
    }

    /// `(-∞, upper)`
    #[must_use]
    pub fn less_than(upper: T) -> Self {
        Self::unbounded_below(BoundaryLimit::upper(false, upper))
    }

    /// `(-∞, +∞)`
    #[must_use]
    pub fn all() -> Self {
        Self {
            lower: BoundaryLimit::unbounded(Side::Lower),
            upper: BoundaryLimit::unbounded(Side::Upper),
        }
    }

    fn unbounded_above(lower: BoundaryLimit<T>) -> Self {
        Self {
            lower,
            upper: BoundaryLimit::unbounded(Side::Upper),
        }
    }

    fn unbounded_below(upper: BoundaryLimit<T>) -> Self {
        Self {
            lower: BoundaryLimit::unbounded(Side::Lower),
            upper,
        }
    }

    #[must_use]
    pub fn lower_limit(&self) -> &BoundaryLimit<T> {
        &self.lower
    }

    #[must_use]
    pub fn upper_limit(&self) -> &BoundaryLimit<T> {
        &self.upper
    }

    #[must_use]
    pub fn into_limits(self) -> (BoundaryLimit<T>, BoundaryLimit<T>) {
        (self.lower, self.upper)
    }

    /// The lower end point, or `None` if unbounded below.
    #[must_use]
    pub fn lower(&self) -> Option<&T> {
        self.lower.value()
    }

    /// The upper end point, or `None` if unbounded above.
    #[must_use]
    pub fn upper(&self) -> Option<&T> {
        self.upper.value()
    }

    #[must_use]
    pub fn has_lower_limit(&self) -> bool {
        self.lower.is_bounded()
    }

    #[must_use]
    pub fn has_upper_limit(&self) -> bool {
        self.upper.is_bounded()
    }

    #[must_use]
    pub fn includes_lower_limit(&self) -> bool {
        self.lower.is_closed()
    }

    #[must_use]
    pub fn includes_upper_limit(&self) -> bool {
        self.upper.is_closed()
    }

    /// Both ends open. Unbounded ends count as open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lower.is_open() && self.upper.is_open()
    }

    /// Both ends closed. An interval with an unbounded end is never closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lower.is_closed() && self.upper.is_closed()
    }
}

impl<T: Ord> Interval<T> {
    /// Whether the interval is the degenerate empty set, `(a, a)`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_open() && self.lower.same_value(&self.upper)
    }

    /// Whether both ends sit on the same value and the interval is not empty.
    #[must_use]
    pub fn is_single_element(&self) -> bool {
        self.lower.same_value(&self.upper) && !self.is_empty()
    }

    /// True for `(a, a)` and also for `(a, a]` and `[a, a)`, which count as single-element but
    /// include no value.
    pub(crate) fn includes_nothing(&self) -> bool {
        self.lower.same_value(&self.upper) && !self.is_closed()
    }

    /// Whether every member of the interval is strictly less than `value`.
    #[must_use]
    pub fn is_below(&self, value: &T) -> bool {
        match self.upper.value() {
            None => false,
            Some(upper) => match upper.cmp(value) {
                Ordering::Less => true,
                Ordering::Equal => self.upper.is_open(),
                Ordering::Greater => false,
            },
        }
    }

    /// Whether every member of the interval is strictly greater than `value`.
    #[must_use]
    pub fn is_above(&self, value: &T) -> bool {
        match self.lower.value() {
            None => false,
            Some(lower) => match lower.cmp(value) {
                Ordering::Greater => true,
                Ordering::Equal => self.lower.is_open(),
                Ordering::Less => false,
            },
        }
    }

    #[must_use]
    pub fn includes(&self, value: &T) -> bool {
        !self.is_below(value) && !self.is_above(value)
    }

    /// Whether every member of `other` is a member of `self`.
    ///
    /// Each end is checked on its own: `self` must include `other`'s end point, unless that end
    /// of `other` is open and sits exactly on `self`'s end.
    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.covers_end(&self.lower, &other.lower) && self.covers_end(&self.upper, &other.upper)
    }

    fn covers_end(&self, ours: &BoundaryLimit<T>, theirs: &BoundaryLimit<T>) -> bool {
        match theirs.value() {
            None => !ours.is_bounded(),
            Some(value) => self.includes(value) || (theirs.is_open() && ours.same_value(theirs)),
        }
    }

    /// The ordering used to keep intervals sorted.
    ///
    /// Upper limit first, ascending. On equal upper limits a closed lower end sorts before an
    /// open one, then lower limits ascending, then an open upper end before a closed one.
    ///
    /// This is *not* consistent with `==` for degenerate intervals: two empty intervals at
    /// different places are equal but not `Ordering::Equal` here.
    #[must_use]
    pub fn position_cmp(&self, other: &Self) -> Ordering {
        self.upper
            .compare(&other.upper)
            .then_with(|| other.lower.is_closed().cmp(&self.lower.is_closed()))
            .then_with(|| self.lower.compare(&other.lower))
            .then_with(|| self.upper.is_closed().cmp(&other.upper.is_closed()))
    }

    fn greater_of_lower_limits<'a>(&'a self, other: &'a Self) -> &'a BoundaryLimit<T> {
        if self.lower.compare(&other.lower) == Ordering::Less {
            &other.lower
        } else {
            &self.lower
        }
    }

    fn lesser_of_upper_limits<'a>(&'a self, other: &'a Self) -> &'a BoundaryLimit<T> {
        if self.upper.compare(&other.upper) == Ordering::Greater {
            &other.upper
        } else {
            &self.upper
        }
    }

    fn included_in_both(&self, other: &Self, limit: &BoundaryLimit<T>) -> bool {
        limit
            .value()
            .is_some_and(|v| self.includes(v) && other.includes(v))
    }

    fn included_in_either(&self, other: &Self, limit: &BoundaryLimit<T>) -> bool {
        limit
            .value()
            .is_some_and(|v| self.includes(v) || other.includes(v))
    }

    /// Whether the two intervals share at least one member.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let greatest_lower = self.greater_of_lower_limits(other);
        let least_upper = self.lesser_of_upper_limits(other);
        match greatest_lower.compare(least_upper) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.included_in_both(other, greatest_lower),
        }
    }
}

impl<T: Ord + Clone> Interval<T> {
    /// An empty interval anchored at this interval's lower end.
    ///
    /// Returns `None` only for `(-∞, +∞)`, which has no end point to anchor to.
    #[must_use]
    pub fn empty_of_same_kind(&self) -> Option<Self> {
        self.empty_of_same_kind_with(&Plain)
    }

    pub fn empty_of_same_kind_with<K: IntervalKind<T>>(&self, kind: &K) -> Option<K::Output> {
        self.lower
            .value()
            .or(self.upper.value())
            .map(|anchor| Self::empty_at(anchor, kind))
    }

    fn empty_at<K: IntervalKind<T>>(anchor: &T, kind: &K) -> K::Output {
        kind.reconstruct(
            BoundaryLimit::lower(false, anchor.clone()),
            BoundaryLimit::upper(false, anchor.clone()),
        )
    }

    /// The members shared by both intervals.
    ///
    /// Disjoint operands give an empty interval anchored at `self`'s lower end (or, if `self` is
    /// unbounded below, at `other`'s).
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        self.intersect_with(other, &Plain)
    }

    pub fn intersect_with<K: IntervalKind<T>>(&self, other: &Self, kind: &K) -> K::Output {
        let greatest_lower = self.greater_of_lower_limits(other);
        let least_upper = self.lesser_of_upper_limits(other);
        if greatest_lower.compare(least_upper) == Ordering::Greater {
            // both are bounded here: an unbounded lower is never greater than any upper
            if let Some(anchor) = self.lower.value().or(greatest_lower.value()) {
                return Self::empty_at(anchor, kind);
            }
        }
        kind.reconstruct(
            BoundaryLimit::lower(
                self.included_in_both(other, greatest_lower),
                greatest_lower.value().cloned(),
            ),
            BoundaryLimit::upper(
                self.included_in_both(other, least_upper),
                least_upper.value().cloned(),
            ),
        )
    }

    /// The interval strictly between two non-intersecting intervals.
    ///
    /// Returns `None` if the intervals intersect, or if nothing lies between them (e.g. `[1, 3]`
    /// and `(3, 5]`). Each end of the gap is open exactly when one of the operands holds that
    /// point.
    #[must_use]
    pub fn gap(&self, other: &Self) -> Option<Self> {
        if self.intersects(other) {
            return None;
        }
        let gap = self.gap_limits(other);
        (!gap.is_empty()).then_some(gap)
    }

    /// Like [`Self::gap`], but reconstructs the result through `kind`.
    ///
    /// Returns `None` only if the intervals intersect; an empty gap is passed to `kind` as-is.
    pub fn gap_with<K: IntervalKind<T>>(&self, other: &Self, kind: &K) -> Option<K::Output> {
        if self.intersects(other) {
            return None;
        }
        let (lower, upper) = self.gap_limits(other).into_limits();
        Some(kind.reconstruct(lower, upper))
    }

    fn gap_limits(&self, other: &Self) -> Self {
        let least_upper = self.lesser_of_upper_limits(other);
        let greatest_lower = self.greater_of_lower_limits(other);
        Self {
            lower: BoundaryLimit::lower(
                !self.included_in_either(other, least_upper),
                least_upper.value().cloned(),
            ),
            upper: BoundaryLimit::upper(
                !self.included_in_either(other, greatest_lower),
                greatest_lower.value().cloned(),
            ),
        }
    }

    /// The parts of `other` that are not in `self`, in ascending order.
    ///
    /// - disjoint: `other` itself;
    /// - `self` covers `other`: nothing;
    /// - otherwise the part of `other` left of `self`, the part right of `self`, or both.
    #[must_use]
    pub fn complement_relative_to(&self, other: &Self) -> SmallVec<[Self; 2]> {
        self.complement_relative_to_with(other, &Plain)
    }

    pub fn complement_relative_to_with<K: IntervalKind<T>>(
        &self,
        other: &Self,
        kind: &K,
    ) -> SmallVec<[K::Output; 2]> {
        let mut fragments = SmallVec::new();
        if !self.intersects(other) {
            fragments.push(kind.reconstruct(other.lower.clone(), other.upper.clone()));
            return fragments;
        }
        if self.reaches_past(&other.lower) {
            fragments.push(kind.reconstruct(other.lower.clone(), self.lower.flipped()));
        }
        if self.reaches_past(&other.upper) {
            fragments.push(kind.reconstruct(self.upper.flipped(), other.upper.clone()));
        }
        fragments
    }

    /// Whether `theirs` (an end of another interval) lies outside our end on the same side,
    /// leaving a part of the other interval uncovered there.
    fn reaches_past(&self, theirs: &BoundaryLimit<T>) -> bool {
        let ours = match theirs.side() {
            Side::Lower => &self.lower,
            Side::Upper => &self.upper,
        };
        if !ours.is_bounded() {
            return false;
        }
        let outward = match theirs.side() {
            Side::Lower => Ordering::Less,
            Side::Upper => Ordering::Greater,
        };
        match theirs.compare(ours) {
            Ordering::Equal => theirs.is_closed() && ours.is_open(),
            ordering => ordering == outward,
        }
    }
}

impl<T: Ord> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }
        match (self.is_single_element(), other.is_single_element()) {
            (true, true) => self.lower() == other.lower(),
            (true, false) | (false, true) => false,
            (false, false) => self.position_cmp(other) == Ordering::Equal,
        }
    }
}

impl<T: Ord> Eq for Interval<T> {}

impl<T: Ord + Hash> Hash for Interval<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            0u8.hash(state);
        } else if self.is_single_element() {
            1u8.hash(state);
            self.lower().hash(state);
        } else {
            2u8.hash(state);
            self.lower.hash(state);
            self.upper.hash(state);
        }
    }
}

impl<T: Ord + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        if self.is_single_element() {
            if let Some(value) = self.lower() {
                return write!(f, "{{{value}}}");
            }
        }
        f.write_str(if self.includes_lower_limit() { "[" } else { "(" })?;
        match self.lower() {
            Some(lower) => write!(f, "{lower}")?,
            None => f.write_str("-∞")?,
        }
        f.write_str(", ")?;
        match self.upper() {
            Some(upper) => write!(f, "{upper}")?,
            None => f.write_str("+∞")?,
        }
        f.write_str(if self.includes_upper_limit() { "]" } else { ")" })
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.includes_lower_limit() { "[" } else { "(" })?;
        match self.lower() {
            Some(lower) => write!(f, "{lower:?}")?,
            None => f.write_str("-∞")?,
        }
        f.write_str(", ")?;
        match self.upper() {
            Some(upper) => write!(f, "{upper:?}")?,
            None => f.write_str("+∞")?,
        }
        f.write_str(if self.includes_upper_limit() { "]" } else { ")" })
    }
}

impl<T> RangeBounds<T> for Interval<T> {
    fn start_bound(&self) -> Bound<&T> {
        to_bound(&self.lower)
    }

    fn end_bound(&self) -> Bound<&T> {
        to_bound(&self.upper)
    }
}

fn to_bound<T>(limit: &BoundaryLimit<T>) -> Bound<&T> {
    match limit.value() {
        None => Bound::Unbounded,
        Some(v) if limit.is_closed() => Bound::Included(v),
        Some(v) => Bound::Excluded(v),
    }
}

impl<T: Ord> TryFrom<std::ops::Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: std::ops::Range<T>) -> Result<Self, Self::Error> {
        Self::try_over(range.start, true, range.end, false)
    }
}

impl<T: Ord> TryFrom<std::ops::RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: std::ops::RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::try_over(start, true, end, true)
    }
}

impl<T> From<std::ops::RangeFrom<T>> for Interval<T> {
    fn from(range: std::ops::RangeFrom<T>) -> Self {
        Self::at_least(range.start)
    }
}

impl<T> From<std::ops::RangeTo<T>> for Interval<T> {
    fn from(range: std::ops::RangeTo<T>) -> Self {
        Self::less_than(range.end)
    }
}

impl<T> From<std::ops::RangeToInclusive<T>> for Interval<T> {
    fn from(range: std::ops::RangeToInclusive<T>) -> Self {
        Self::at_most(range.end)
    }
}

impl<T> From<std::ops::RangeFull> for Interval<T> {
    fn from(_: std::ops::RangeFull) -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn c(lower: i32, upper: i32) -> Interval<i32> {
        Interval::closed(lower, upper)
    }

    fn o(lower: i32, upper: i32) -> Interval<i32> {
        Interval::open(lower, upper)
    }

    fn oc(lower: i32, upper: i32) -> Interval<i32> {
        Interval::over(lower, false, upper, true)
    }

    fn co(lower: i32, upper: i32) -> Interval<i32> {
        Interval::over(lower, true, upper, false)
    }

    #[test]
    fn construction_rejects_inverted_limits() {
        assert!(Interval::try_over(2, true, 1, true).is_err());
        assert!(Interval::try_over(1, false, 1, false).is_ok());
        assert!(Interval::<i32>::try_from(3..1).is_err());
        assert!(
            Interval::try_new(BoundaryLimit::upper(true, 1), BoundaryLimit::upper(true, 2))
                .is_err()
        );
        assert!(
            Interval::try_new(
                BoundaryLimit::<i32>::unbounded(Side::Lower),
                BoundaryLimit::unbounded(Side::Upper)
            )
            .is_ok()
        );
    }

    #[test]
    #[should_panic(expected = "lower limit must not exceed upper limit")]
    fn closed_panics_when_inverted() {
        let _ = Interval::closed(2, 1);
    }

    #[test]
    fn display() {
        assert_snapshot!(c(1, 10), @"[1, 10]");
        assert_snapshot!(oc(10, 12), @"(10, 12]");
        assert_snapshot!(o(1, 1), @"{}");
        assert_snapshot!(c(10, 10), @"{10}");
        assert_snapshot!(Interval::at_least(3), @"[3, +∞)");
        assert_snapshot!(Interval::<i32>::all(), @"(-∞, +∞)");
    }

    #[test]
    fn is_below_and_above() {
        let range = c(-5, 6);
        assert!(!range.is_below(&5));
        assert!(!range.is_below(&-5));
        assert!(!range.is_below(&6));
        assert!(range.is_below(&7));
        assert!(!range.is_below(&-6));
        assert!(range.is_above(&-6));
        assert!(!range.is_above(&-5));

        assert!(co(1, 4).is_below(&4));
        assert!(oc(1, 4).is_above(&1));
        assert!(!Interval::at_least(1).is_below(&i32::MAX));
        assert!(!Interval::at_most(1).is_above(&i32::MIN));
    }

    #[test]
    fn includes() {
        let range = c(-5, 6);
        assert!(range.includes(&5));
        assert!(range.includes(&-5));
        assert!(range.includes(&6));
        assert!(!range.includes(&7));
        assert!(!range.includes(&-6));

        let half_open = oc(-5, 6);
        assert!(!half_open.includes(&-5));
        assert!(half_open.includes(&-4));
        assert!(half_open.includes(&6));

        assert!(Interval::less_than(0).includes(&i32::MIN));
        assert!(!Interval::less_than(0).includes(&0));
        assert!(Interval::<i32>::all().includes(&0));
    }

    #[test]
    fn degenerate_shapes() {
        assert!(!c(5, 6).is_empty());
        assert!(!c(6, 6).is_empty());
        assert!(o(6, 6).is_empty());
        assert!(c(1, 10).empty_of_same_kind().unwrap().is_empty());
        assert!(!Interval::<i32>::all().is_empty());
        assert_eq!(Interval::<i32>::all().empty_of_same_kind(), None);

        assert!(oc(1, 1).is_single_element());
        assert!(c(1, 1).is_single_element());
        assert!(co(1, 1).is_single_element());
        assert!(!c(1, 10).is_single_element());
        assert!(!o(1, 1).is_single_element());
    }

    #[test]
    fn equality_is_set_equality() {
        assert_eq!(oc(1, 1), co(1, 1));
        assert_eq!(oc(1, 1), c(1, 1));
        assert_ne!(oc(1, 1), o(1, 1));
        assert_eq!(o(1, 1), o(7, 7));
        assert_eq!(
            c(1, 10).empty_of_same_kind(),
            c(4, 6).empty_of_same_kind()
        );
        assert_ne!(c(1, 5), co(1, 5));
        assert_ne!(c(1, 5), oc(1, 5));
        assert_eq!(Interval::at_least(1), Interval::from(1..));
    }

    #[test]
    fn hash_agrees_with_eq() {
        let set: ahash::HashSet<_> = [o(1, 1), o(7, 7), c(2, 2), oc(2, 2), c(1, 3)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn position_ordering() {
        assert_eq!(c(5, 10).position_cmp(&oc(10, 12)), Ordering::Less);
        assert_eq!(c(1, 12).position_cmp(&oc(10, 12)), Ordering::Less);
        assert_eq!(oc(1, 12).position_cmp(&c(10, 12)), Ordering::Greater);
        assert_eq!(c(1, 12).position_cmp(&c(2, 12)), Ordering::Less);
        assert_eq!(co(1, 12).position_cmp(&c(1, 12)), Ordering::Less);
        assert_eq!(c(1, 12).position_cmp(&c(1, 12)), Ordering::Equal);
        assert_eq!(
            Interval::at_least(100).position_cmp(&c(1, 2)),
            Ordering::Greater
        );
        assert_eq!(
            Interval::at_most(1).position_cmp(&c(1, 1)),
            Ordering::Greater
        );
    }

    #[test]
    fn intersects() {
        assert!(c(5, 10).intersects(&c(1, 10)));
        assert!(c(1, 10).intersects(&c(5, 10)));
        assert!(c(4, 6).intersects(&c(1, 10)));
        assert!(c(1, 10).intersects(&c(4, 6)));
        assert!(c(5, 10).intersects(&c(5, 15)));
        assert!(c(5, 15).intersects(&c(1, 10)));
        assert!(!c(1, 10).intersects(&c(12, 16)));
        assert!(!c(12, 16).intersects(&c(1, 10)));
        assert!(c(5, 10).intersects(&c(5, 10)));
        assert!(!c(1, 10).intersects(&oc(10, 12)));
        assert!(!oc(10, 12).intersects(&c(1, 10)));
        assert!(c(1, 10).intersects(&c(10, 12)));

        assert!(Interval::at_most(0).intersects(&Interval::at_least(0)));
        assert!(!Interval::less_than(0).intersects(&Interval::at_least(0)));
        assert!(Interval::<i32>::all().intersects(&Interval::all()));
        assert!(!Interval::all().intersects(&o(3, 3)));
    }

    #[test]
    fn intersection() {
        let empty = o(1, 1);
        assert_eq!(c(5, 10), c(5, 10).intersect(&c(1, 10)));
        assert_eq!(c(5, 10), c(1, 10).intersect(&c(5, 10)));
        assert_eq!(c(4, 6), c(4, 6).intersect(&c(1, 10)));
        assert_eq!(c(4, 6), c(1, 10).intersect(&c(4, 6)));
        assert_eq!(c(5, 10), c(5, 10).intersect(&c(5, 15)));
        assert_eq!(c(5, 10), c(5, 15).intersect(&c(1, 10)));
        assert!(c(1, 10).intersect(&c(12, 16)).is_empty());
        assert_eq!(empty, c(1, 10).intersect(&c(12, 16)));
        assert_eq!(empty, c(12, 16).intersect(&c(1, 10)));
        assert_eq!(empty, c(1, 10).intersect(&oc(10, 12)));
        assert!(c(5, 10).intersect(&oc(10, 12)).is_empty());
        assert_eq!(empty, oc(10, 12).intersect(&c(1, 10)));
        assert_eq!(c(10, 10), c(1, 10).intersect(&c(10, 12)));

        // the empty result of a disjoint intersection sits at the lower end of `self`
        assert_eq!(c(12, 16).intersect(&c(1, 10)).lower(), Some(&12));

        assert_eq!(
            Interval::at_least(3).intersect(&Interval::less_than(8)),
            co(3, 8)
        );
        assert_eq!(
            Interval::<i32>::all().intersect(&Interval::greater_than(2)),
            Interval::greater_than(2)
        );
        assert_eq!(
            Interval::less_than(2).intersect(&Interval::greater_than(4)),
            empty
        );
    }

    #[test]
    fn covers() {
        assert!(!c(5, 10).covers(&c(1, 10)));
        assert!(c(1, 10).covers(&c(5, 10)));
        assert!(!c(4, 6).covers(&c(1, 10)));
        assert!(c(1, 10).covers(&c(4, 6)));
        assert!(c(5, 10).covers(&c(5, 10)));

        let half_open = oc(5, 10);
        assert!(c(5, 10).covers(&half_open));
        assert!(half_open.covers(&half_open));
        assert!(!half_open.covers(&c(5, 10)));

        let other_half_open = co(5, 10);
        assert!(c(5, 10).covers(&other_half_open));
        assert!(other_half_open.covers(&other_half_open));
        assert!(!other_half_open.covers(&c(5, 10)));
        assert!(o(5, 10).covers(&o(5, 10)));
        assert!(!o(5, 10).covers(&co(5, 10)));

        assert!(Interval::at_least(1).covers(&c(3, 100)));
        assert!(!c(3, 100).covers(&Interval::at_least(3)));
        assert!(Interval::at_least(3).covers(&Interval::greater_than(3)));
        assert!(!Interval::greater_than(3).covers(&Interval::at_least(3)));
        assert!(Interval::all().covers(&Interval::less_than(0)));
    }

    #[test]
    fn gap() {
        assert_eq!(c(1, 3).gap(&c(5, 7)), Some(o(3, 5)));
        assert_eq!(c(5, 7).gap(&c(1, 3)), Some(o(3, 5)));
        assert_eq!(c(1, 3).gap(&o(3, 5)), None);
        assert_eq!(c(1, 3).gap(&c(2, 4)), None);
        let single = co(2, 3).gap(&o(3, 5)).unwrap();
        assert!(single.is_single_element());
        assert_eq!(single, c(3, 3));
        assert_eq!(
            Interval::less_than(0).gap(&Interval::greater_than(10)),
            Some(c(0, 10))
        );

        // an empty gap is still handed to the reconstruction strategy
        let (lower, upper) = c(1, 3).gap_with(&o(3, 5), &Plain).unwrap().into_limits();
        assert_eq!((lower.value(), upper.value()), (Some(&3), Some(&3)));
        assert!(c(1, 3).gap_with(&c(3, 5), &Plain).is_none());
    }

    #[test]
    fn complement_disjoint() {
        let complement = c(1, 3).complement_relative_to(&c(5, 7));
        assert_eq!(complement.as_slice(), [c(5, 7)]);

        let complement = co(1, 3).complement_relative_to(&c(3, 7));
        assert_eq!(complement.as_slice(), [c(3, 7)]);
    }

    #[test]
    fn complement_overlapping() {
        assert_eq!(
            c(3, 7).complement_relative_to(&c(1, 5)).as_slice(),
            [co(1, 3)]
        );
        assert_eq!(
            c(1, 5).complement_relative_to(&c(3, 7)).as_slice(),
            [oc(5, 7)]
        );
    }

    #[test]
    fn complement_enclosing_and_equal() {
        assert!(c(1, 7).complement_relative_to(&c(3, 5)).is_empty());
        assert!(c(1, 7).complement_relative_to(&c(1, 7)).is_empty());
        assert!(
            Interval::all()
                .complement_relative_to(&Interval::at_most(4))
                .is_empty()
        );
    }

    #[test]
    fn complement_enclosed() {
        assert_eq!(
            c(3, 5).complement_relative_to(&c(1, 7)).as_slice(),
            [co(1, 3), oc(5, 7)]
        );
        assert_eq!(
            o(3, 5).complement_relative_to(&c(1, 7)).as_slice(),
            [c(1, 3), c(5, 7)]
        );

        let complement = o(3, 5).complement_relative_to(&c(3, 5));
        assert_eq!(complement.len(), 2);
        assert!(complement[0].includes(&3));
        assert_eq!(complement.as_slice(), [c(3, 3), c(5, 5)]);
    }

    #[test]
    fn complement_never_builds_inverted_fragments() {
        // `self` starts left of `other` but is open there: no left fragment
        assert_eq!(
            o(3, 5).complement_relative_to(&o(4, 7)).as_slice(),
            [Interval::over(5, true, 7, false)]
        );
        // shared open lower end: nothing of `other` is left of `self`
        assert!(o(3, 5).complement_relative_to(&oc(3, 4)).is_empty());
    }

    #[test]
    fn complement_unbounded() {
        assert_eq!(
            c(0, 10).complement_relative_to(&Interval::all()).as_slice(),
            [Interval::less_than(0), Interval::greater_than(10)]
        );
        assert_eq!(
            Interval::at_least(5)
                .complement_relative_to(&c(0, 10))
                .as_slice(),
            [co(0, 5)]
        );
    }

    #[test]
    fn range_bounds() {
        let interval = co(2, 9);
        assert_eq!(interval.start_bound(), Bound::Included(&2));
        assert_eq!(interval.end_bound(), Bound::Excluded(&9));
        assert!(RangeBounds::contains(&interval, &2));
        assert!(!RangeBounds::contains(&interval, &9));
        assert_eq!(Interval::<i32>::all().start_bound(), Bound::Unbounded);
        assert_eq!(Interval::try_from(2..9), Ok(interval));
        assert_eq!(Interval::try_from(2..=9), Ok(c(2, 9)));
        assert_eq!(Interval::from(..=3), Interval::at_most(3));
    }

    #[quickcheck]
    fn intersects_is_symmetric(a: Interval<i8>, b: Interval<i8>) -> bool {
        a.intersects(&b) == b.intersects(&a)
    }

    #[quickcheck]
    fn intersects_agrees_with_members(a: Interval<i8>, b: Interval<i8>) -> bool {
        let shared = (i8::MIN..=i8::MAX).any(|p| a.includes(&p) && b.includes(&p));
        // over integers an open span like (3, 4) intersects without a shared integer member
        !shared || a.intersects(&b)
    }

    #[test]
    fn self_intersection() {
        for interval in [c(1, 5), o(1, 5), oc(1, 5), c(2, 2), o(2, 2), Interval::at_most(3)] {
            assert_eq!(interval.intersect(&interval), interval);
        }
    }

    #[quickcheck]
    fn self_intersection_keeps_members(a: Interval<i8>) -> bool {
        // `(1, 1]` counts as single-element but holds nothing, so compare member by member
        let same = a.intersect(&a);
        (i8::MIN..=i8::MAX).all(|p| same.includes(&p) == a.includes(&p))
    }

    #[quickcheck]
    fn intersection_holds_shared_members(a: Interval<i8>, b: Interval<i8>) -> bool {
        let both = a.intersect(&b);
        (i8::MIN..=i8::MAX).all(|p| both.includes(&p) == (a.includes(&p) && b.includes(&p)))
    }

    #[quickcheck]
    fn intersection_and_complement_partition_the_domain(a: Interval<i8>, d: Interval<i8>) -> bool {
        let mut pieces = vec![a.intersect(&d)];
        pieces.extend(a.complement_relative_to(&d));
        (i8::MIN..=i8::MAX).all(|p| {
            let holders = pieces.iter().filter(|piece| piece.includes(&p)).count();
            holders == usize::from(d.includes(&p))
        })
    }

    #[quickcheck]
    fn gap_holds_no_member_of_either(a: Interval<i8>, b: Interval<i8>) -> bool {
        match a.gap(&b) {
            None => true,
            Some(gap) => {
                !a.intersects(&b)
                    && (i8::MIN..=i8::MAX)
                        .all(|p| !gap.includes(&p) || (!a.includes(&p) && !b.includes(&p)))
            }
        }
    }

    #[quickcheck]
    fn covers_means_subset(a: Interval<i8>, b: Interval<i8>) -> bool {
        !a.covers(&b) || (i8::MIN..=i8::MAX).all(|p| !b.includes(&p) || a.includes(&p))
    }

    // rebuilds through the checked constructor, so any limit pair the algebra hands out that
    // `try_new` would refuse shows up as an `Err`
    struct Checked;

    impl IntervalKind<i8> for Checked {
        type Output = Result<Interval<i8>, IntervalError>;

        fn reconstruct(&self, lower: BoundaryLimit<i8>, upper: BoundaryLimit<i8>) -> Self::Output {
            Interval::try_new(lower, upper)
        }
    }

    #[quickcheck]
    fn reconstructed_limits_are_valid(a: Interval<i8>, b: Interval<i8>) -> bool {
        a.intersect_with(&b, &Checked).is_ok()
            && a.gap_with(&b, &Checked).is_none_or(|gap| gap.is_ok())
            && a.complement_relative_to_with(&b, &Checked).iter().all(Result::is_ok)
            && a.empty_of_same_kind_with(&Checked).is_none_or(|empty| empty.is_ok())
    }
}
