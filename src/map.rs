// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # IntervalMap
//!
//! An [`IntervalMap`] associates values with ranges of keys rather than with single keys. Every
//! point of `T` resolves to at most one value: inserting a range overwrites whatever the map held
//! for that range before, trimming or splitting older entries so that their remaining parts keep
//! their old values.
//!
//! ```
//! # use spans::{Interval, IntervalMap};
//! let mut map = IntervalMap::new();
//! map.put(Interval::closed(1, 10), "x");
//! map.remove(&Interval::closed(3, 5));
//! assert_eq!(map.get(&2), Some(&"x"));
//! assert_eq!(map.get(&4), None);
//! assert_eq!(map.get(&6), Some(&"x"));
//! ```
//!
//! Lookups scan the stored entries in order, so the map suits the short tables of bands and
//! periods it is meant for (rate tables, schedules) rather than large indices.

use crate::{interval::Interval, sequence::IntervalSequence};
use std::{cmp::Ordering, fmt};
use tracing::{debug, trace};

/// A map from non-overlapping intervals of `T` to values of `V`.
///
/// Entries are kept sorted by [`Interval::position_cmp`]; since no two keys share a point, that is
/// also ascending order along `T`.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawMap<T, V>",
        bound(deserialize = "T: Ord + ::serde::Deserialize<'de>, V: ::serde::Deserialize<'de>")
    )
)]
pub struct IntervalMap<T, V> {
    entries: Vec<(Interval<T>, V)>,
}

/// Wire shape of an [`IntervalMap`]: entries in any order, checked for overlap on the way in.
#[cfg(feature = "serde")]
#[derive(::serde::Deserialize)]
#[serde(bound(deserialize = "T: Ord + ::serde::Deserialize<'de>, V: ::serde::Deserialize<'de>"))]
struct RawMap<T, V> {
    entries: Vec<(Interval<T>, V)>,
}

#[cfg(feature = "serde")]
impl<T: Ord, V> TryFrom<RawMap<T, V>> for IntervalMap<T, V> {
    type Error = crate::IntervalError;

    fn try_from(raw: RawMap<T, V>) -> Result<Self, Self::Error> {
        let mut map = Self {
            entries: Vec::with_capacity(raw.entries.len()),
        };
        for (key, value) in raw.entries {
            if key.includes_nothing() {
                continue;
            }
            if map.contains_intersecting_key(&key) {
                return Err(crate::IntervalError::new("map keys must not overlap"));
            }
            map.insert_sorted(key, value);
        }
        Ok(map)
    }
}

impl<T, V> Default for IntervalMap<T, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for IntervalMap<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

impl<T, V> IntervalMap<T, V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored entries (not the number of points covered).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterator over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Interval<T>, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }
}

impl<T: Ord, V> IntervalMap<T, V> {
    /// The stored key that includes `point`, with its value.
    #[must_use]
    pub fn get_key_value(&self, point: &T) -> Option<(&Interval<T>, &V)> {
        self.entries
            .iter()
            .find(|(key, _)| key.includes(point))
            .map(|(k, v)| (k, v))
    }

    /// The value of the entry whose key includes `point`.
    #[must_use]
    pub fn get(&self, point: &T) -> Option<&V> {
        self.get_key_value(point).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, point: &T) -> bool {
        self.get_key_value(point).is_some()
    }

    /// Whether any stored key shares at least one point with `interval`.
    #[must_use]
    pub fn contains_intersecting_key(&self, interval: &Interval<T>) -> bool {
        self.entries.iter().any(|(key, _)| key.intersects(interval))
    }

    fn insert_sorted(&mut self, key: Interval<T>, value: V) {
        let i = self
            .entries
            .partition_point(|(stored, _)| stored.position_cmp(&key) == Ordering::Less);
        self.entries.insert(i, (key, value));
    }
}

impl<T: Ord + Clone, V: Clone> IntervalMap<T, V> {
    /// Maps every point of `key` to `value`.
    ///
    /// Older entries that overlap `key` are cut back to the parts outside of it, keeping their
    /// values; an older entry that encloses `key` is split in two. A `key` that includes no value,
    /// such as `(4, 4)`, is not stored.
    pub fn put(&mut self, key: Interval<T>, value: V) {
        self.remove(&key);
        if key.includes_nothing() {
            trace!("ignoring empty key");
            return;
        }
        self.insert_sorted(key, value);
        debug!(entries = self.entries.len(), "put interval");
    }

    /// Unmaps every point of `key`.
    ///
    /// Entries partly covered by `key` keep their remaining parts.
    pub fn remove(&mut self, key: &Interval<T>) {
        let (hit, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|(stored, _)| stored.intersects(key));
        self.entries = kept;
        if hit.is_empty() {
            return;
        }

        let removed = hit.len();
        for (stored, value) in hit {
            let fragments = key.complement_relative_to(&stored);
            trace!(fragments = fragments.len(), "splitting stored interval");
            for fragment in fragments {
                if !fragment.includes_nothing() {
                    self.insert_sorted(fragment, value.clone());
                }
            }
        }
        debug!(removed, entries = self.entries.len(), "removed overlapping intervals");
    }

    /// The stored keys, as a sequence.
    #[must_use]
    pub fn keys(&self) -> IntervalSequence<T> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }
}

impl<T: Ord + Clone, V: Clone> FromIterator<(Interval<T>, V)> for IntervalMap<T, V> {
    /// Builds the map by [putting](IntervalMap::put) each pair in turn, so later pairs win.
    fn from_iter<I: IntoIterator<Item = (Interval<T>, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T: Ord + Clone, V: Clone> Extend<(Interval<T>, V)> for IntervalMap<T, V> {
    fn extend<I: IntoIterator<Item = (Interval<T>, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<T, V> IntoIterator for IntervalMap<T, V> {
    type Item = (Interval<T>, V);
    type IntoIter = std::vec::IntoIter<(Interval<T>, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
