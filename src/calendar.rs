// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! # Calendar intervals
//!
//! A [`CalendarInterval`] is a range of whole days: May 2004, the year 2003, "from 1 March
//! onwards". Both of its bounded ends are always *included*, so a day range never reads as
//! `(Apr 30, Jun 1)` but always as `[May 1, May 31]`.
//!
//! The type is a thin layer over [`Interval<NaiveDate>`]. Set operations are delegated to the
//! generic interval algebra with the [`Days`] reconstruction strategy, which turns any open end
//! the algebra produces back into an inclusive day. Results that would hold no day at all come
//! back as `None`.
//!
//! To talk about instants rather than days, [`CalendarInterval::as_time_interval`] maps a day
//! range onto the half-open interval of time it spans in a given time zone.

use crate::interval::{BoundaryLimit, Interval, IntervalError, IntervalKind, Side};
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeZone};
use smallvec::SmallVec;
use std::fmt;

/// An inclusive range of days, possibly unbounded on either side.
///
/// Always holds at least one day.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Interval<NaiveDate>", into = "Interval<NaiveDate>")
)]
pub struct CalendarInterval(Interval<NaiveDate>);

/// Rebuilds computed limits as a [`CalendarInterval`].
///
/// An open lower day becomes the following day, an open upper day the preceding one. If that
/// leaves no day, the output is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Days;

impl IntervalKind<NaiveDate> for Days {
    type Output = Option<CalendarInterval>;

    fn reconstruct(
        &self,
        lower: BoundaryLimit<NaiveDate>,
        upper: BoundaryLimit<NaiveDate>,
    ) -> Option<CalendarInterval> {
        let start = match lower.value() {
            Some(day) if lower.is_open() => Some(day.succ_opt()?),
            day => day.copied(),
        };
        let end = match upper.value() {
            Some(day) if upper.is_open() => Some(day.pred_opt()?),
            day => day.copied(),
        };
        CalendarInterval::inclusive(start, end).ok()
    }
}

impl CalendarInterval {
    /// The days from `start` through `end`. `None` leaves that side unbounded.
    pub fn inclusive(
        start: impl Into<Option<NaiveDate>>,
        end: impl Into<Option<NaiveDate>>,
    ) -> Result<Self, IntervalError> {
        Interval::try_new(
            BoundaryLimit::lower(true, start),
            BoundaryLimit::upper(true, end),
        )
        .map(Self)
    }

    /// `start` and every day after it.
    #[must_use]
    pub fn ever_from(start: NaiveDate) -> Self {
        Self(Interval::at_least(start))
    }

    /// Every day up to and including `end`.
    #[must_use]
    pub fn ever_preceding(end: NaiveDate) -> Self {
        Self(Interval::at_most(end))
    }

    /// One calendar month, `month` counted from 1.
    pub fn month(year: i32, month: u32) -> Result<Self, IntervalError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(IntervalError::new("no such month"))?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(IntervalError::new("month end is out of range"))?;
        Self::inclusive(start, end)
    }

    pub fn year(year: i32) -> Result<Self, IntervalError> {
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return Err(IntervalError::new("year is out of range"));
        };
        Self::inclusive(start, end)
    }

    /// First day, or `None` if unbounded in the past.
    #[must_use]
    pub fn start(&self) -> Option<NaiveDate> {
        self.0.lower().copied()
    }

    /// Last day, or `None` if unbounded in the future.
    #[must_use]
    pub fn end(&self) -> Option<NaiveDate> {
        self.0.upper().copied()
    }

    #[must_use]
    pub fn as_interval(&self) -> &Interval<NaiveDate> {
        &self.0
    }

    #[must_use]
    pub fn includes(&self, day: &NaiveDate) -> bool {
        self.0.includes(day)
    }

    #[must_use]
    pub fn covers(&self, other: &Self) -> bool {
        self.0.covers(&other.0)
    }

    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.0.intersects(&other.0)
    }

    /// The days in both ranges, or `None` if they share none.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        self.0.intersect_with(&other.0, &Days)
    }

    /// The days strictly between two ranges that share none. `None` if the ranges overlap or
    /// are back to back.
    #[must_use]
    pub fn gap(&self, other: &Self) -> Option<Self> {
        self.0.gap_with(&other.0, &Days).flatten()
    }

    /// The days of `other` that are not in `self`.
    #[must_use]
    pub fn complement_relative_to(&self, other: &Self) -> SmallVec<[Self; 2]> {
        self.0
            .complement_relative_to_with(&other.0, &Days)
            .into_iter()
            .flatten()
            .collect()
    }

    /// Number of days in the range, `None` if it is unbounded.
    #[must_use]
    pub fn length_in_days(&self) -> Option<i64> {
        Some((self.end()? - self.start()?).num_days() + 1)
    }

    /// Difference between the month of the day after the end and the month of the start.
    ///
    /// This counts month boundaries crossed, not elapsed whole months: `[2004-04-15, 2004-05-14]`
    /// is 1, but so is `[2004-04-30, 2004-05-01]`; `[2002-05-01, 2004-07-01]` is 26. `None` if
    /// the range is unbounded.
    #[must_use]
    pub fn length_in_months(&self) -> Option<i32> {
        let start = self.start()?;
        let after = self.end()?.succ_opt()?;
        let months = |d: NaiveDate| d.year() * 12 + d.month0() as i32;
        Some(months(after) - months(start))
    }

    /// The days in ascending order, or `None` if there is no first day.
    ///
    /// Without an end the iterator runs until the last representable date.
    #[must_use]
    pub fn days(&self) -> Option<impl Iterator<Item = NaiveDate> + use<>> {
        let end = self.end();
        let days = self.start()?.iter_days();
        Some(days.take_while(move |day| end.is_none_or(|end| *day <= end)))
    }

    /// The days in descending order, or `None` if there is no last day.
    #[must_use]
    pub fn days_in_reverse(&self) -> Option<impl Iterator<Item = NaiveDate> + use<>> {
        let start = self.start();
        let days = std::iter::successors(Some(self.end()?), NaiveDate::pred_opt);
        Some(days.take_while(move |day| start.is_none_or(|start| *day >= start)))
    }

    /// The span of time covered by these days in `tz`: from midnight at the start of the first
    /// day, up to but excluding midnight at the start of the day after the last.
    ///
    /// Fails if one of those midnights does not exist or is ambiguous in `tz` (a DST transition
    /// at midnight), or lies beyond the representable dates.
    pub fn as_time_interval<Tz: TimeZone>(
        &self,
        tz: &Tz,
    ) -> Result<Interval<DateTime<Tz>>, IntervalError> {
        let lower = match self.start() {
            Some(start) => BoundaryLimit::lower(true, midnight(start, tz)?),
            None => BoundaryLimit::unbounded(Side::Lower),
        };
        let upper = match self.end() {
            Some(end) => {
                let after = end
                    .succ_opt()
                    .ok_or(IntervalError::new("day after the end is out of range"))?;
                BoundaryLimit::upper(false, midnight(after, tz)?)
            }
            None => BoundaryLimit::unbounded(Side::Upper),
        };
        Interval::try_new(lower, upper)
    }
}

fn midnight<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>, IntervalError> {
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .single()
        .ok_or(IntervalError::new("midnight is not a unique instant in this time zone"))
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Accepts intervals whose bounded ends are all closed.
impl TryFrom<Interval<NaiveDate>> for CalendarInterval {
    type Error = IntervalError;

    fn try_from(interval: Interval<NaiveDate>) -> Result<Self, Self::Error> {
        let open_end = |limit: &BoundaryLimit<NaiveDate>| limit.is_bounded() && limit.is_open();
        if open_end(interval.lower_limit()) || open_end(interval.upper_limit()) {
            return Err(IntervalError::new("day ranges include both of their ends"));
        }
        Ok(Self(interval))
    }
}

impl From<CalendarInterval> for Interval<NaiveDate> {
    fn from(days: CalendarInterval) -> Self {
        days.0
    }
}

impl AsRef<Interval<NaiveDate>> for CalendarInterval {
    fn as_ref(&self) -> &Interval<NaiveDate> {
        &self.0
    }
}
