// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Spans: interval algebra and interval-keyed maps
//!
//! This crate provides intervals over any totally ordered type, with exact open, closed and
//! unbounded ends, and two containers built on them.
//!
//! - [`Interval`]: a convex set such as `[1, 5]`, `(0, 10)` or `[3, +∞)`. It answers membership
//!   and containment questions, and computes intersections, gaps and relative complements that
//!   agree with each other in every combination of open, closed, empty, single-element and
//!   unbounded operands.
//! - [`IntervalSequence`]: intervals kept in sorted order, with the gaps between neighbours and
//!   the overall extent.
//! - [`IntervalMap`]: values keyed by ranges. Each point resolves to at most one value; putting a
//!   new range trims or splits whatever overlapped it before.
//!
//! ```
//! use spans::{Interval, IntervalMap};
//!
//! // monthly premium in cents, by age in months
//! let mut premiums = IntervalMap::new();
//! premiums.put(Interval::over(0, true, 25 * 12, false), 12_000_u64);
//! premiums.put(Interval::over(25 * 12, true, 65 * 12, false), 9_500);
//! premiums.put(Interval::at_least(65 * 12), 14_000);
//!
//! assert_eq!(premiums.get(&(30 * 12)), Some(&9_500));
//! assert_eq!(premiums.get(&(25 * 12 - 1)), Some(&12_000));
//! ```
//!
//! ## Boundaries
//!
//! Each end of an interval is a [`BoundaryLimit`]: a side, an inclusion flag and an optional
//! value. A missing value means the interval is unbounded on that side, and it compares below
//! (lower side) or above (upper side) every value of `T`. There is no sentinel value standing in
//! for infinity.
//!
//! ## Domain intervals
//!
//! Types that wrap an `Interval<T>` and want the algebra to hand back their own shape implement
//! [`IntervalKind`] and call the `*_with` operations ([`Interval::intersect_with`] and friends).
//! The [`calendar`] module does this for inclusive day ranges.
//!
//! ## License
//!
//! This project is licensed under either of
//!
//! - Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or http://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or http://opensource.org/licenses/MIT)
//!
//! at your option.
//!
//! ## Features
//!
//! - `chrono`: Enables the [`calendar`] module and the [`date!`] literal. This feature is enabled
//!   by default.
//! - `serde`: Provides `serde` support for all interval types.
//! - `arbitrary`: Implements `quickcheck::Arbitrary` for interval types, useful for property-based
//!   testing.
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod interval;
pub use interval::{BoundaryLimit, Interval, IntervalError, IntervalKind, Side};
pub mod map;
pub use map::IntervalMap;
pub mod sequence;
pub use sequence::IntervalSequence;
#[cfg(feature = "chrono")]
pub mod calendar;
#[cfg(feature = "chrono")]
pub use calendar::CalendarInterval;
#[cfg(feature = "chrono")]
pub mod date_literal;

// re-export for the date-literal macro
#[cfg(feature = "chrono")]
pub use chrono;

#[cfg(any(test, feature = "arbitrary"))]
mod test_util;
