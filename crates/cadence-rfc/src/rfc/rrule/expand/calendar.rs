//! Proleptic Gregorian calendar helpers over `chrono::NaiveDate`.

use chrono::{Datelike, Days, NaiveDate};

use crate::rfc::rrule::core::Weekday;

#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns `(year, month)` moved by `months`, or `None` past chrono's range.
#[must_use]
pub fn add_months(year: i32, month: u32, months: u64) -> Option<(i32, u32)> {
    let total = i64::from(year) * 12 + i64::from(month) - 1;
    let total = total.checked_add(i64::try_from(months).ok()?)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12)).ok()? + 1;
    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Days from the start of the week to `date` (0..=6).
#[must_use]
pub fn days_into_week(date: NaiveDate, week_start: Weekday) -> u32 {
    let index = date.weekday().num_days_from_monday();
    (index + 7 - u32::from(week_start.index())) % 7
}

/// Start of the `week_start`-aligned week containing `date`.
#[must_use]
pub fn start_of_week(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days_into_week(date, week_start))))
}

/// First day of week 1 of `year`: the first week with at least four days in
/// the year.
fn first_week_start(year: i32, week_start: Weekday) -> Option<NaiveDate> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = days_into_week(jan1, week_start);
    if offset <= 3 {
        jan1.checked_sub_days(Days::new(u64::from(offset)))
    } else {
        jan1.checked_add_days(Days::new(u64::from(7 - offset)))
    }
}

/// RFC 5545 week number of `date` with the number of weeks in its week-year.
///
/// Days early in January can belong to the last week of the previous year and
/// days late in December to week 1 of the next.
#[must_use]
pub fn week_number(date: NaiveDate, week_start: Weekday) -> Option<(u32, u32)> {
    let year = date.year();
    let this_year = first_week_start(year, week_start)?;
    let (start, next) = if date < this_year {
        (first_week_start(year - 1, week_start)?, this_year)
    } else {
        let next_year = first_week_start(year + 1, week_start)?;
        if date >= next_year {
            (next_year, first_week_start(year + 2, week_start)?)
        } else {
            (this_year, next_year)
        }
    };
    let week = u32::try_from((date - start).num_days() / 7).ok()? + 1;
    let weeks = u32::try_from((next - start).num_days() / 7).ok()?;
    Some((week, weeks))
}

/// Resolves a signed position (1-based, negative from the end) against `len`.
#[must_use]
pub fn resolve_position(position: i32, len: u32) -> Option<u32> {
    let len = i64::from(len);
    let index = match i64::from(position) {
        p if p > 0 => p,
        p if p < 0 => len + p + 1,
        _ => return None,
    };
    if (1..=len).contains(&index) {
        u32::try_from(index).ok()
    } else {
        None
    }
}
