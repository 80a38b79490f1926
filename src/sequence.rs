// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # IntervalSequence
//!
//! An [`IntervalSequence`] is a collection of [`Interval`]s that is kept sorted by
//! [`Interval::position_cmp`] at all times. Members may overlap or repeat; the sequence does
//! not merge them. On top of iteration it can report the [gaps](IntervalSequence::gaps) between
//! consecutive members and the overall [extent](IntervalSequence::extent).

use crate::interval::Interval;
use std::{cmp::Ordering, fmt};

// A sorted vector is plenty for the handful of intervals a schedule or calendar holds.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<Interval<T>>",
        bound(deserialize = "T: Ord + Clone + ::serde::Deserialize<'de>")
    )
)]
pub struct IntervalSequence<T>(Vec<Interval<T>>);

impl<T: Ord + fmt::Debug> fmt::Debug for IntervalSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T> Default for IntervalSequence<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> IntervalSequence<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Interval<T>> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Interval<T>> {
        self.0.last()
    }

    /// Iterator over the members in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
        self.0.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Interval<T>] {
        &self.0
    }
}

impl<T: Ord + Clone> IntervalSequence<T> {
    /// Inserts `interval`, keeping the sequence sorted.
    ///
    /// Members that compare equal keep their insertion order.
    pub fn add(&mut self, interval: Interval<T>) {
        let i = self
            .0
            .partition_point(|member| member.position_cmp(&interval) != Ordering::Greater);
        self.0.insert(i, interval);
    }

    /// The non-empty gaps between each pair of neighbouring members.
    ///
    /// Overlapping or touching neighbours contribute nothing; the members are not merged first,
    /// so a member that is swallowed by an earlier one can still produce a gap.
    #[must_use]
    pub fn gaps(&self) -> Self {
        self.0
            .windows(2)
            .filter_map(|pair| pair[0].gap(&pair[1]))
            .collect()
    }

    /// The interval from the first member's lower limit to the last member's upper limit.
    ///
    /// `None` for an empty sequence. Each end keeps the openness of the member it came from.
    #[must_use]
    pub fn extent(&self) -> Option<Interval<T>> {
        match self.0.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            [first, .., last] => Interval::try_new(
                first.lower_limit().clone(),
                last.upper_limit().clone(),
            )
            .ok(),
        }
    }
}

impl<T: Ord + Clone> FromIterator<Interval<T>> for IntervalSequence<T> {
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::with_capacity(iter.size_hint().0);
        sequence.extend(iter);
        sequence
    }
}

/// Sorts the intervals; they may come in any order.
impl<T: Ord + Clone> From<Vec<Interval<T>>> for IntervalSequence<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        intervals.into_iter().collect()
    }
}

impl<T: Ord + Clone> Extend<Interval<T>> for IntervalSequence<T> {
    fn extend<I: IntoIterator<Item = Interval<T>>>(&mut self, iter: I) {
        for interval in iter {
            self.add(interval);
        }
    }
}

impl<T> IntoIterator for IntervalSequence<T> {
    type Item = Interval<T>;
    type IntoIter = std::vec::IntoIter<Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a IntervalSequence<T> {
    type Item = &'a Interval<T>;
    type IntoIter = std::slice::Iter<'a, Interval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Ord> PartialEq for IntervalSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: Ord> Eq for IntervalSequence<T> {}
