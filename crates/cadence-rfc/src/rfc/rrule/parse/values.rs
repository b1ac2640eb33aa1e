//! Value parsers for the DTSTART and RRULE subset (RFC 5545 §3.3).
#![expect(
    clippy::map_err_ignore,
    reason = "Value parsers report position and kind; the std error adds nothing"
)]

use std::str::FromStr;

use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::rrule::core::Weekday;

/// Parses a DATE value, or a DATE-TIME truncated to its date.
///
/// Formats: `YYYYMMDD`, `YYYYMMDDTHHMMSS`, `YYYYMMDDTHHMMSSZ`.
///
/// ## Errors
/// Returns `InvalidDate` if the text is not one of these forms or names a
/// date that does not exist.
pub fn parse_date(s: &str, line: usize, col: usize) -> ParseResult<NaiveDate> {
    let invalid = || ParseError::new(ParseErrorKind::InvalidDate, line, col).with_context(s);

    let date_str = match s.split_once(['T', 't']) {
        Some((date, time)) => {
            let time = time.strip_suffix(['Z', 'z']).unwrap_or(time);
            if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            date
        }
        None => s,
    };

    if date_str.len() != 8 || !date_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let year = date_str[0..4].parse::<i32>().map_err(|_| invalid())?;
    let month = date_str[4..6].parse::<u32>().map_err(|_| invalid())?;
    let day = date_str[6..8].parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses a single integer value.
///
/// ## Errors
/// Returns `InvalidInteger` if the text is not an integer that fits `T`.
pub fn parse_integer<T: FromStr>(s: &str, line: usize, col: usize) -> ParseResult<T> {
    s.trim().parse().map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidInteger, line, col).with_context(s.to_string())
    })
}

/// Parses a comma-separated list of integers.
///
/// ## Errors
/// Returns `InvalidInteger` on the first entry that does not parse.
pub fn parse_integer_list<T: FromStr>(s: &str, line: usize, col: usize) -> ParseResult<Vec<T>> {
    split_list(s, col)
        .map(|(item, item_col)| parse_integer(item, line, item_col))
        .collect()
}

/// Parses a BYDAY value (weekdays with optional ordinals).
///
/// ## Errors
/// Returns `InvalidWeekday` on the first malformed entry.
pub fn parse_byday(s: &str, line: usize, col: usize) -> ParseResult<Vec<Weekday>> {
    split_list(s, col)
        .map(|(item, item_col)| parse_weekday_num(item, line, item_col))
        .collect()
}

/// Parses a single weekday with optional ordinal (e.g., "MO", "+2TU", "-1FR").
///
/// ## Errors
/// Returns `InvalidWeekday` if the code is unknown or the ordinal is not in
/// -53..=53.
pub fn parse_weekday_num(s: &str, line: usize, col: usize) -> ParseResult<Weekday> {
    let s = s.trim();
    let invalid =
        || ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s.to_string());

    if s.len() < 2 || !s.is_char_boundary(s.len() - 2) {
        return Err(invalid());
    }

    let (ordinal_str, weekday_str) = s.split_at(s.len() - 2);
    let weekday = Weekday::parse_code(weekday_str).ok_or_else(invalid)?;

    if ordinal_str.is_empty() {
        return Ok(weekday);
    }

    let ordinal = ordinal_str
        .parse::<i8>()
        .ok()
        .filter(|n| (-53..=53).contains(n))
        .ok_or_else(invalid)?;
    Ok(weekday.nth(ordinal))
}

/// Parses a WKST value.
///
/// ## Errors
/// Returns `InvalidWeekday` if the value is not a bare two-letter code.
pub fn parse_week_start(s: &str, line: usize, col: usize) -> ParseResult<Weekday> {
    Weekday::parse_code(s.trim()).ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidWeekday, line, col).with_context(s.to_string())
    })
}

/// Splits a comma-separated list, pairing each item with its column.
fn split_list(s: &str, col: usize) -> impl Iterator<Item = (&str, usize)> {
    let mut offset = 0;
    s.split(',').map(move |item| {
        let item_col = col + offset;
        offset += item.len() + 1;
        (item, item_col)
    })
}
