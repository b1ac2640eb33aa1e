//! Canonical `DTSTART`/`RRULE` text parser.
//!
//! Accepts the subset written by the serializer plus a few lenient forms:
//! `\r\n` line endings, lower-case keys, `+` on BYDAY ordinals, date-time
//! values (truncated to the date) and a bare rule without the `RRULE:` prefix.

use std::str::FromStr;

use cadence_core::config::CalendarConfig;
use chrono::NaiveDate;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::values::{
    parse_byday, parse_date, parse_integer, parse_integer_list, parse_week_start,
};
use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{Frequency, Recurrence, Weekday};

/// Defaults applied when the text leaves a field out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Anchor used when there is no `DTSTART` line.
    pub default_anchor: Option<NaiveDate>,
    /// Week start used when there is no `WKST` part.
    pub default_week_start: Weekday,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_anchor: None,
            default_week_start: Weekday::MONDAY,
        }
    }
}

impl ParseOptions {
    /// ## Summary
    /// Options carrying the configured week start, with no default anchor.
    ///
    /// ## Errors
    /// Returns `RfcError::CoreError` if the configured week start does not
    /// name a weekday.
    pub fn from_calendar(calendar: &CalendarConfig) -> RfcResult<Self> {
        let index = calendar.week_start_index()?;
        Ok(Self {
            default_anchor: None,
            default_week_start: Weekday::try_new(i32::from(index), None)?,
        })
    }
}

/// Rule parts as read, before validation.
#[derive(Debug, Default)]
struct RuleParts {
    line: usize,
    column: usize,
    freq: Option<Frequency>,
    interval: Option<u32>,
    count: Option<u32>,
    until: Option<NaiveDate>,
    wkst: Option<Weekday>,
    by_day: Vec<Weekday>,
    by_month_day: Vec<i8>,
    by_month: Vec<u8>,
    by_set_pos: Vec<i16>,
    by_year_day: Vec<i16>,
    by_week_no: Vec<i8>,
}

/// Parses canonical recurrence text.
///
/// ## Errors
///
/// Returns `RfcError::ParseError` for malformed or unsupported text and
/// `RfcError::ValidationError` when the parts are well-formed but break a
/// rule invariant (for example `BYMONTHDAY=32`).
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str, options: &ParseOptions) -> RfcResult<Recurrence> {
    let mut anchor: Option<NaiveDate> = None;
    let mut parts: Option<RuleParts> = None;

    for (index, raw) in input.lines().enumerate() {
        let line_num = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((head, value)) = line.split_once(':') else {
            tracing::trace!(line = line_num, "Bare rule line");
            set_rule(&mut parts, line, line_num, 1)?;
            continue;
        };
        let value_col = head.len() + 2;
        let mut head_parts = head.split(';');
        let name = head_parts.next().unwrap_or_default().to_ascii_uppercase();

        match name.as_str() {
            "DTSTART" => {
                for param in head_parts {
                    check_dtstart_param(param, line_num)?;
                }
                if anchor.is_some() {
                    return Err(ParseError::new(ParseErrorKind::InvalidContentLine, line_num, 1)
                        .with_context("duplicate DTSTART")
                        .into());
                }
                anchor = Some(parse_date(value.trim(), line_num, value_col)?);
                tracing::trace!(line = line_num, ?anchor, "Parsed DTSTART");
            }
            "RRULE" => {
                if head_parts.next().is_some() {
                    return Err(ParseError::new(ParseErrorKind::InvalidContentLine, line_num, 7)
                        .with_context("RRULE takes no parameters")
                        .into());
                }
                set_rule(&mut parts, value, line_num, value_col)?;
            }
            "EXRULE" | "RDATE" | "EXDATE" => {
                return Err(ParseError::new(ParseErrorKind::UnsupportedProperty, line_num, 1)
                    .with_context(name.clone())
                    .into());
            }
            _ => {
                return Err(ParseError::new(ParseErrorKind::InvalidContentLine, line_num, 1)
                    .with_context(format!("unexpected property {name}"))
                    .into());
            }
        }
    }

    let parts = parts.ok_or_else(|| {
        ParseError::new(ParseErrorKind::InvalidRRule, 1, 1).with_context("no RRULE")
    })?;
    let frequency = parts.freq.ok_or_else(|| {
        ParseError::new(ParseErrorKind::MissingFrequency, parts.line, parts.column)
    })?;
    let anchor = anchor
        .or(options.default_anchor)
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingStart, 1, 1))?;

    let rule = Recurrence::builder(anchor, frequency)
        .with_interval(parts.interval.unwrap_or(1))
        .with_terminators(parts.count, parts.until)
        .with_week_start(parts.wkst.unwrap_or(options.default_week_start))
        .with_by_weekday(parts.by_day)
        .with_by_month_day(parts.by_month_day)
        .with_by_month(parts.by_month)
        .with_by_set_pos(parts.by_set_pos)
        .with_by_year_day(parts.by_year_day)
        .with_by_week_no(parts.by_week_no)
        .build()?;

    tracing::debug!(%rule, "Recurrence parsed");
    Ok(rule)
}

/// Parses recurrence text, using `anchor` if it has no `DTSTART` line.
///
/// ## Errors
///
/// As [`parse`].
pub fn parse_with_default_anchor(input: &str, anchor: NaiveDate) -> RfcResult<Recurrence> {
    parse(
        input,
        &ParseOptions {
            default_anchor: Some(anchor),
            ..ParseOptions::default()
        },
    )
}

impl FromStr for Recurrence {
    type Err = RfcError;

    /// Parses canonical text; a `DTSTART` line is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s, &ParseOptions::default())
    }
}

fn check_dtstart_param(param: &str, line: usize) -> ParseResult<()> {
    let (key, value) = param.split_once('=').unwrap_or((param, ""));
    match key.to_ascii_uppercase().as_str() {
        "VALUE" if matches!(value.to_ascii_uppercase().as_str(), "DATE" | "DATE-TIME") => Ok(()),
        "TZID" => Err(ParseError::new(ParseErrorKind::InvalidContentLine, line, 9)
            .with_context("time zones are not supported")),
        _ => Err(ParseError::new(ParseErrorKind::InvalidContentLine, line, 9)
            .with_context(format!("unexpected parameter {param}"))),
    }
}

fn set_rule(
    parts: &mut Option<RuleParts>,
    value: &str,
    line: usize,
    col: usize,
) -> ParseResult<()> {
    if parts.is_some() {
        return Err(ParseError::new(ParseErrorKind::MultipleRules, line, 1));
    }
    *parts = Some(parse_rule_parts(value, line, col)?);
    Ok(())
}

/// Parses the `;`-separated parts of an RRULE value.
fn parse_rule_parts(s: &str, line: usize, col: usize) -> ParseResult<RuleParts> {
    let mut rule = RuleParts {
        line,
        column: col,
        ..RuleParts::default()
    };
    let mut seen: Vec<String> = Vec::new();
    let mut offset = 0;

    for part in s.split(';') {
        let part_col = col + offset;
        offset += part.len() + 1;
        if part.trim().is_empty() {
            continue;
        }

        let (key, value) = part.split_once('=').ok_or_else(|| {
            ParseError::new(ParseErrorKind::InvalidRRule, line, part_col)
                .with_context(part.to_string())
        })?;
        let key = key.trim().to_ascii_uppercase();
        if seen.contains(&key) {
            return Err(
                ParseError::new(ParseErrorKind::DuplicatePart, line, part_col).with_context(key)
            );
        }

        let value_col = part_col + part.find('=').map_or(0, |pos| pos + 1);
        parse_rule_part(&mut rule, &key, value.trim(), line, value_col)?;
        tracing::trace!(key = %key, "Parsed rule part");
        seen.push(key);
    }

    Ok(rule)
}

/// Parses a single RRULE key-value pair.
fn parse_rule_part(
    rule: &mut RuleParts,
    key: &str,
    value: &str,
    line: usize,
    col: usize,
) -> ParseResult<()> {
    match key {
        "FREQ" => {
            if Frequency::is_sub_daily(value) {
                return Err(
                    ParseError::new(ParseErrorKind::UnsupportedFrequency, line, col)
                        .with_context(value.to_string()),
                );
            }
            rule.freq = Some(Frequency::parse(value).ok_or_else(|| {
                ParseError::new(ParseErrorKind::InvalidFrequency, line, col)
                    .with_context(value.to_string())
            })?);
        }
        "INTERVAL" => rule.interval = Some(parse_integer(value, line, col)?),
        "COUNT" => {
            if rule.until.is_some() {
                return Err(ParseError::new(
                    ParseErrorKind::UntilCountConflict,
                    line,
                    col,
                ));
            }
            rule.count = Some(parse_integer(value, line, col)?);
        }
        "UNTIL" => {
            if rule.count.is_some() {
                return Err(ParseError::new(
                    ParseErrorKind::UntilCountConflict,
                    line,
                    col,
                ));
            }
            rule.until = Some(parse_date(value, line, col)?);
        }
        "WKST" => rule.wkst = Some(parse_week_start(value, line, col)?),
        "BYDAY" => rule.by_day = parse_byday(value, line, col)?,
        "BYMONTHDAY" => rule.by_month_day = parse_integer_list(value, line, col)?,
        "BYMONTH" => rule.by_month = parse_integer_list(value, line, col)?,
        "BYSETPOS" => rule.by_set_pos = parse_integer_list(value, line, col)?,
        "BYYEARDAY" => rule.by_year_day = parse_integer_list(value, line, col)?,
        "BYWEEKNO" => rule.by_week_no = parse_integer_list(value, line, col)?,
        "BYHOUR" | "BYMINUTE" | "BYSECOND" | "BYEASTER" => {
            return Err(ParseError::new(ParseErrorKind::UnsupportedPart, line, col)
                .with_context(key.to_string()));
        }
        _ => {
            return Err(
                ParseError::new(ParseErrorKind::UnknownPart, line, col).with_context(key.to_string())
            );
        }
    }
    Ok(())
}
