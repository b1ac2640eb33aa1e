//! Canonical `DTSTART`/`RRULE` writer.
//!
//! Parts are written in a fixed order so equal rules always produce the same
//! text: FREQ, INTERVAL, WKST, COUNT, UNTIL, BYSETPOS, BYDAY, BYMONTH,
//! BYMONTHDAY, BYYEARDAY, BYWEEKNO. Defaults (interval 1, Monday week start)
//! and empty lists are left out. A reader whose missing-`WKST` default is not
//! Monday needs [`Recurrence::canonical_text`] so the week start survives.

use std::fmt;

use chrono::NaiveDate;

use crate::rfc::rrule::core::{Recurrence, Terminator, Weekday};

/// Formats a date as an RFC 5545 DATE value (`YYYYMMDD`).
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl Recurrence {
    /// Returns the rule part only, without `DTSTART` or the `RRULE:` prefix.
    ///
    /// This is what iCalendar exporters embed in their own `RRULE` property.
    #[must_use]
    pub fn rrule_value(&self) -> String {
        self.rrule_value_for(Weekday::MONDAY)
    }

    /// ## Summary
    /// Canonical text for a reader that assumes `default_week_start` when
    /// `WKST` is missing.
    ///
    /// `WKST` is left out only when the week start is Monday and matches
    /// that default, so the text parses back to this rule under either.
    #[must_use]
    pub fn canonical_text(&self, default_week_start: Weekday) -> String {
        format!(
            "DTSTART:{}\nRRULE:{}",
            format_date(self.anchor),
            self.rrule_value_for(default_week_start)
        )
    }

    fn rrule_value_for(&self, default_week_start: Weekday) -> String {
        let mut parts = vec![format!("FREQ={}", self.frequency)];

        if self.interval != 1 {
            parts.push(format!("INTERVAL={}", self.interval));
        }

        if self.week_start != Weekday::MONDAY || self.week_start != default_week_start {
            parts.push(format!("WKST={}", self.week_start.code()));
        }

        match self.terminator {
            Terminator::Count(count) => parts.push(format!("COUNT={count}")),
            Terminator::Until(until) => parts.push(format!("UNTIL={}", format_date(until))),
            Terminator::Never => {}
        }

        if !self.by_set_pos.is_empty() {
            parts.push(format!("BYSETPOS={}", join(&self.by_set_pos)));
        }

        if !self.by_weekday.is_empty() {
            parts.push(format!("BYDAY={}", join(&self.by_weekday)));
        }

        if !self.by_month.is_empty() {
            parts.push(format!("BYMONTH={}", join(&self.by_month)));
        }

        if !self.by_month_day.is_empty() {
            parts.push(format!("BYMONTHDAY={}", join(&self.by_month_day)));
        }

        if !self.by_year_day.is_empty() {
            parts.push(format!("BYYEARDAY={}", join(&self.by_year_day)));
        }

        if !self.by_week_no.is_empty() {
            parts.push(format!("BYWEEKNO={}", join(&self.by_week_no)));
        }

        parts.join(";")
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text(Weekday::MONDAY))
    }
}
