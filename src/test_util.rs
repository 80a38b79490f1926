// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! Implementation of the quickcheck::Arbitrary trait for the interval types.

use crate::interval::{BoundaryLimit, Interval, Side};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for Side {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Side::Lower, Side::Upper]).unwrap()
    }
}

impl<T: Arbitrary> Arbitrary for BoundaryLimit<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Skew towards bounded limits; unbounded ones all look alike.
        let bounded = *g.choose(&[true, true, true, false]).unwrap();
        let value = bounded.then(|| T::arbitrary(g));
        match Side::arbitrary(g) {
            Side::Lower => Self::lower(bool::arbitrary(g), value),
            Side::Upper => Self::upper(bool::arbitrary(g), value),
        }
    }
}

impl<T: Arbitrary + Ord> Arbitrary for Interval<T> {
    fn arbitrary(g: &mut Gen) -> Self {
        // Skew the distribution towards end points that coincide, since that is where the
        // interesting open/closed interactions happen.
        let a = T::arbitrary(g);
        let b = if *g.choose(&[false, false, false, true]).unwrap() {
            a.clone()
        } else {
            T::arbitrary(g)
        };
        let (lower, upper) = if a <= b { (a, b) } else { (b, a) };
        let lower = (*g.choose(&[true, true, true, true, false]).unwrap()).then_some(lower);
        let upper = (*g.choose(&[true, true, true, true, false]).unwrap()).then_some(upper);
        Self::try_new(
            BoundaryLimit::lower(bool::arbitrary(g), lower),
            BoundaryLimit::upper(bool::arbitrary(g), upper),
        )
        .expect("limits are sorted")
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink towards the unbounded interval by dropping one end at a time.
        let mut smaller = Vec::new();
        let (lower, upper) = self.clone().into_limits();
        if lower.is_bounded() {
            smaller.push(Self::try_new(BoundaryLimit::unbounded(Side::Lower), upper.clone()));
        }
        if upper.is_bounded() {
            smaller.push(Self::try_new(lower, BoundaryLimit::unbounded(Side::Upper)));
        }
        Box::new(smaller.into_iter().filter_map(Result::ok))
    }
}
