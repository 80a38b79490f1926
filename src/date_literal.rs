// (c) Copyright 2025 Helsing GmbH. All rights reserved.
/// Declarative macro to create a [`chrono::NaiveDate`] in const context, as
/// `NaiveDate::from_ymd_opt(..).unwrap()` cannot be used there.
///
/// Usage:
/// ```rust
///    # use chrono::NaiveDate;
///    # use spans::date;
///    const NOV_7: NaiveDate = date!(2004-11-07);
///    # let _ = NOV_7;
/// ```
///
/// An impossible date fails at compile time:
/// ```compile_fail
///    # use spans::date;
///    let _ = date!(2004-02-30);
/// ```
#[macro_export]
macro_rules! date {
    ( $year:literal-$month:literal-$day:literal ) => {
        const {
            #[allow(clippy::zero_prefixed_literal)]
            match $crate::chrono::NaiveDate::from_ymd_opt($year, $month, $day) {
                Some(date) => date,
                None => ::std::panic!("year-month-day outside expected range."),
            }
        }
    };
}
