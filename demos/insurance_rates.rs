// (c) Copyright 2025 Helsing GmbH. All rights reserved.
//! This example looks up a monthly insurance premium from a table of age bands, then prorates
//! the first payment by the days left in the month the policy starts.
//!
//! Run with `RUST_LOG=spans=trace` to see how the schedule is assembled.
use spans::{CalendarInterval, Interval, IntervalMap, chrono::NaiveDate, date};
use std::error::Error;
use tracing_subscriber::EnvFilter;

const POLICY_EFFECTIVE: NaiveDate = date!(2004-11-07);
const BIRTH: NaiveDate = date!(1963-04-06);

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // THE SCHEDULE
    // Ages are counted in whole months; each band includes its lower age and excludes the upper.
    // Premiums are in cents.
    println!("1. Building the premium schedule.");
    let mut schedule = IntervalMap::new();
    for (from, to, premium) in [
        (25, 35, 10_000_u64),
        (35, 45, 15_000),
        (45, 55, 20_000),
        (55, 65, 25_000),
    ] {
        let band = Interval::over(from * 12_u32, true, to * 12, false);
        println!("   ages {band} months: {}", cents(premium));
        schedule.put(band, premium);
    }

    // AGE ON THE EFFECTIVE DATE
    let lifetime = CalendarInterval::inclusive(BIRTH, POLICY_EFFECTIVE)?;
    let age = lifetime
        .length_in_months()
        .and_then(|months| u32::try_from(months).ok())
        .ok_or("age is not a positive number of months")?;
    println!(
        "2. Born {BIRTH}, the holder is {} years {} months old on {POLICY_EFFECTIVE}.",
        age / 12,
        age % 12
    );

    // LOOKUP
    let Some(&monthly) = schedule.get(&age) else {
        println!("3. No premium is defined for that age.");
        return Ok(());
    };
    println!("3. The monthly premium is {}.", cents(monthly));

    // PRORATION
    // The first payment only covers the days from the effective date to the end of its month.
    let month = CalendarInterval::month(2004, 11)?;
    let remainder = CalendarInterval::inclusive(POLICY_EFFECTIVE, month.end())?;
    let (Some(part), Some(whole)) = (remainder.length_in_days(), month.length_in_days()) else {
        return Err("month is unbounded".into());
    };
    let first_payment = monthly * u64::try_from(part)? / u64::try_from(whole)?;
    println!(
        "4. {remainder} is {part} of {whole} days, so the first payment is {}.",
        cents(first_payment)
    );

    Ok(())
}

fn cents(amount: u64) -> String {
    format!("${}.{:02}", amount / 100, amount % 100)
}
