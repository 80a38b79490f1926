// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Boundary limits
//!
//! A [`BoundaryLimit`] is one end of an [`Interval`](super::Interval): which side it sits on,
//! whether the end point itself belongs to the interval, and the end point (or nothing, if the
//! interval is unbounded in that direction).
//!
//! Limits are ordered by [`BoundaryLimit::compare`], which places a missing lower value below
//! every value and a missing upper value above every value. Openness plays no part in that
//! ordering; it only matters for membership.

use std::cmp::Ordering;

/// Which end of an interval a [`BoundaryLimit`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub enum Side {
    Lower,
    Upper,
}

/// One endpoint of an interval.
///
/// An unbounded limit (no value) is always open. The constructors enforce this, so two unbounded
/// limits on the same side are always structurally equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLimit<T>"))]
pub struct BoundaryLimit<T> {
    side: Side,
    closed: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    value: Option<T>,
}

/// Wire shape of a [`BoundaryLimit`], checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(::serde::Deserialize)]
struct RawLimit<T> {
    side: Side,
    closed: bool,
    value: Option<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawLimit<T>> for BoundaryLimit<T> {
    type Error = super::IntervalError;

    fn try_from(raw: RawLimit<T>) -> Result<Self, Self::Error> {
        if raw.closed && raw.value.is_none() {
            return Err(super::IntervalError::new("an unbounded limit cannot be closed"));
        }
        Ok(Self::new(raw.side, raw.closed, raw.value))
    }
}

impl<T> BoundaryLimit<T> {
    /// Creates a lower limit. `value: None` means unbounded below.
    #[must_use]
    pub fn lower(closed: bool, value: impl Into<Option<T>>) -> Self {
        Self::new(Side::Lower, closed, value.into())
    }

    /// Creates an upper limit. `value: None` means unbounded above.
    #[must_use]
    pub fn upper(closed: bool, value: impl Into<Option<T>>) -> Self {
        Self::new(Side::Upper, closed, value.into())
    }

    /// Creates a limit that leaves its side of the interval unbounded.
    #[must_use]
    pub fn unbounded(side: Side) -> Self {
        Self::new(side, false, None)
    }

    fn new(side: Side, closed: bool, value: Option<T>) -> Self {
        Self {
            side,
            closed: closed && value.is_some(),
            value,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    #[must_use]
    pub fn is_lower(&self) -> bool {
        self.side == Side::Lower
    }

    #[must_use]
    pub fn is_upper(&self) -> bool {
        self.side == Side::Upper
    }

    /// Whether the end point belongs to the interval.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.value.is_some()
    }

    /// The end point, or `None` if unbounded.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    #[must_use]
    pub fn into_value(self) -> Option<T> {
        self.value
    }

    /// The same end point with the inclusion flipped and the side swapped.
    ///
    /// Used when a limit of one interval becomes the touching limit of a neighbouring one (the
    /// upper end of a gap is built from the lower end of the interval after it, and so on).
    pub(crate) fn flipped(&self) -> Self
    where
        T: Clone,
    {
        let side = match self.side {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        };
        Self::new(side, !self.closed, self.value.clone())
    }
}

impl<T: Ord> BoundaryLimit<T> {
    /// Total ordering of limits.
    ///
    /// Bounded values compare by `T`'s order. A missing value is `-∞` on a lower limit and `+∞` on
    /// an upper limit, so an unbounded lower limit is below everything except another unbounded
    /// lower limit, which it equals.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (&self.value, &other.value) {
            (Some(a), Some(b)) => a.cmp(b),
            (None, None) => rank(self.side).cmp(&rank(other.side)),
            (None, Some(_)) => match self.side {
                Side::Lower => Ordering::Less,
                Side::Upper => Ordering::Greater,
            },
            (Some(_), None) => match other.side {
                Side::Lower => Ordering::Greater,
                Side::Upper => Ordering::Less,
            },
        }
    }

    /// Whether both limits carry the same (bounded) value.
    pub(crate) fn same_value(&self, other: &Self) -> bool {
        matches!((&self.value, &other.value), (Some(a), Some(b)) if a == b)
    }
}

// position of an unbounded limit on the extended line
fn rank(side: Side) -> i8 {
    match side {
        Side::Lower => -1,
        Side::Upper => 1,
    }
}
