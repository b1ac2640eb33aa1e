//! The recurrence rule value type.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};

use super::{Frequency, Weekday};
use crate::error::{RfcResult, ValidationError};

/// Years a `YYYYMMDD` date can spell.
const YEARS: RangeInclusive<i32> = 0..=9999;

/// When a recurrence stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Terminator {
    /// Repeats forever.
    #[default]
    Never,
    /// Stops after this many occurrences.
    Count(u32),
    /// Stops after this date (inclusive).
    Until(NaiveDate),
}

/// A recurrence rule anchored on a start date.
///
/// Always valid: the only ways to obtain one are [`RecurrenceBuilder::build`],
/// parsing canonical text, and decoding a wizard form, which all enforce the
/// invariants. Editing means building a new rule, see [`Recurrence::to_builder`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Recurrence {
    pub(crate) anchor: NaiveDate,
    pub(crate) frequency: Frequency,
    pub(crate) interval: u32,
    pub(crate) terminator: Terminator,
    pub(crate) week_start: Weekday,
    pub(crate) by_weekday: Vec<Weekday>,
    pub(crate) by_month_day: Vec<i8>,
    pub(crate) by_month: Vec<u8>,
    pub(crate) by_set_pos: Vec<i16>,
    pub(crate) by_year_day: Vec<i16>,
    pub(crate) by_week_no: Vec<i8>,
}

impl Recurrence {
    /// Starts building a rule.
    #[must_use]
    pub fn builder(anchor: NaiveDate, frequency: Frequency) -> RecurrenceBuilder {
        RecurrenceBuilder::new(anchor, frequency)
    }

    /// Returns a builder pre-filled with this rule's fields.
    #[must_use]
    pub fn to_builder(&self) -> RecurrenceBuilder {
        let (count, until) = match self.terminator {
            Terminator::Never => (None, None),
            Terminator::Count(count) => (Some(count), None),
            Terminator::Until(until) => (None, Some(until)),
        };
        RecurrenceBuilder {
            anchor: self.anchor,
            frequency: self.frequency,
            interval: self.interval,
            count,
            until,
            week_start: self.week_start,
            by_weekday: self.by_weekday.clone(),
            by_month_day: self.by_month_day.clone(),
            by_month: self.by_month.clone(),
            by_set_pos: self.by_set_pos.clone(),
            by_year_day: self.by_year_day.clone(),
            by_week_no: self.by_week_no.clone(),
        }
    }

    /// The first date of the pattern (DTSTART).
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    #[must_use]
    pub const fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub const fn interval(&self) -> u32 {
        self.interval
    }

    #[must_use]
    pub const fn terminator(&self) -> Terminator {
        self.terminator
    }

    #[must_use]
    pub const fn count(&self) -> Option<u32> {
        match self.terminator {
            Terminator::Count(count) => Some(count),
            _ => None,
        }
    }

    #[must_use]
    pub const fn until(&self) -> Option<NaiveDate> {
        match self.terminator {
            Terminator::Until(until) => Some(until),
            _ => None,
        }
    }

    /// Start of the week for week numbering and weekly periods.
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// BYDAY entries, ordered by `(index, ordinal)`.
    #[must_use]
    pub fn by_weekday(&self) -> &[Weekday] {
        &self.by_weekday
    }

    /// BYMONTHDAY entries, positive days first, each group ascending.
    #[must_use]
    pub fn by_month_day(&self) -> &[i8] {
        &self.by_month_day
    }

    #[must_use]
    pub fn by_month(&self) -> &[u8] {
        &self.by_month
    }

    #[must_use]
    pub fn by_set_pos(&self) -> &[i16] {
        &self.by_set_pos
    }

    #[must_use]
    pub fn by_year_day(&self) -> &[i16] {
        &self.by_year_day
    }

    #[must_use]
    pub fn by_week_no(&self) -> &[i8] {
        &self.by_week_no
    }

    /// Returns whether every weekday is selected without an ordinal.
    #[must_use]
    pub fn is_every_weekday(&self) -> bool {
        self.by_weekday.len() == 7 && self.by_weekday.iter().all(|day| day.is_plain())
    }
}

/// Field-by-field constructor for [`Recurrence`].
#[derive(Debug, Clone)]
pub struct RecurrenceBuilder {
    anchor: NaiveDate,
    frequency: Frequency,
    interval: u32,
    count: Option<u32>,
    until: Option<NaiveDate>,
    week_start: Weekday,
    by_weekday: Vec<Weekday>,
    by_month_day: Vec<i8>,
    by_month: Vec<u8>,
    by_set_pos: Vec<i16>,
    by_year_day: Vec<i16>,
    by_week_no: Vec<i8>,
}

impl RecurrenceBuilder {
    /// Creates a builder with interval 1, no terminator and Monday week start.
    #[must_use]
    pub fn new(anchor: NaiveDate, frequency: Frequency) -> Self {
        Self {
            anchor,
            frequency,
            interval: 1,
            count: None,
            until: None,
            week_start: Weekday::MONDAY,
            by_weekday: Vec::new(),
            by_month_day: Vec::new(),
            by_month: Vec::new(),
            by_set_pos: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    /// Sets both terminators at once, as decoded from a form.
    #[must_use]
    pub fn with_terminators(mut self, count: Option<u32>, until: Option<NaiveDate>) -> Self {
        self.count = count;
        self.until = until;
        self
    }

    /// Sets the week start day; any ordinal is dropped.
    #[must_use]
    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start.plain();
        self
    }

    #[must_use]
    pub fn with_by_weekday(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        self.by_weekday = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_month_day(mut self, days: impl IntoIterator<Item = i8>) -> Self {
        self.by_month_day = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_month(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.by_month = months.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_set_pos(mut self, positions: impl IntoIterator<Item = i16>) -> Self {
        self.by_set_pos = positions.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_year_day(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.by_year_day = days.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_by_week_no(mut self, weeks: impl IntoIterator<Item = i8>) -> Self {
        self.by_week_no = weeks.into_iter().collect();
        self
    }

    /// ## Summary
    /// Validates the fields and produces the immutable rule.
    ///
    /// Constraint lists are sorted and deduplicated into canonical order.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` naming the first offending field:
    /// - `anchor` or `until` outside the years 0000..=9999
    /// - `interval` below 1, or a `count` of 0
    /// - both `count` and `until` set
    /// - both `by_weekday` and `by_month_day` set
    /// - a month day, month, set position, year day or week number out of range
    /// - `by_year_day`/`by_week_no` on a non-yearly rule, `by_set_pos` on a daily one
    pub fn build(self) -> RfcResult<Recurrence> {
        check_year("anchor", self.anchor)?;
        if let Some(until) = self.until {
            check_year("until", until)?;
        }
        if self.interval < 1 {
            return Err(ValidationError::new("interval", "must be at least 1").into());
        }
        let terminator = match (self.count, self.until) {
            (Some(_), Some(_)) => {
                return Err(ValidationError::new(
                    "terminator",
                    "count and until are mutually exclusive",
                )
                .into());
            }
            (Some(0), None) => {
                return Err(ValidationError::new("count", "must be at least 1").into());
            }
            (Some(count), None) => Terminator::Count(count),
            (None, Some(until)) => Terminator::Until(until),
            (None, None) => Terminator::Never,
        };
        if !self.by_weekday.is_empty() && !self.by_month_day.is_empty() {
            return Err(ValidationError::new(
                "by_month_day",
                "cannot be combined with by_weekday",
            )
            .into());
        }

        check_range("by_month_day", &self.by_month_day, 31)?;
        check_range("by_set_pos", &self.by_set_pos, 366)?;
        check_range("by_year_day", &self.by_year_day, 366)?;
        check_range("by_week_no", &self.by_week_no, 53)?;
        if let Some(month) = self.by_month.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(
                ValidationError::new("by_month", format!("{month} is not in 1..=12")).into(),
            );
        }

        if self.frequency != Frequency::Yearly {
            if !self.by_year_day.is_empty() {
                return Err(ValidationError::new("by_year_day", "only valid for yearly rules").into());
            }
            if !self.by_week_no.is_empty() {
                return Err(ValidationError::new("by_week_no", "only valid for yearly rules").into());
            }
        }
        if self.frequency == Frequency::Daily && !self.by_set_pos.is_empty() {
            return Err(ValidationError::new("by_set_pos", "not valid for daily rules").into());
        }

        Ok(Recurrence {
            anchor: self.anchor,
            frequency: self.frequency,
            interval: self.interval,
            terminator,
            week_start: self.week_start,
            by_weekday: sorted(self.by_weekday),
            by_month_day: signed_order(self.by_month_day),
            by_month: sorted(self.by_month),
            by_set_pos: signed_order(self.by_set_pos),
            by_year_day: signed_order(self.by_year_day),
            by_week_no: signed_order(self.by_week_no),
        })
    }
}

fn check_year(field: &'static str, date: NaiveDate) -> RfcResult<()> {
    if YEARS.contains(&date.year()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, format!("{date} is outside years 0000..=9999")).into())
    }
}

/// Checks every value is non-zero with magnitude at most `max`.
fn check_range<T>(field: &'static str, values: &[T], max: u16) -> RfcResult<()>
where
    T: Copy + Into<i16> + std::fmt::Display,
{
    match values.iter().find(|v| {
        let v: i16 = (**v).into();
        v == 0 || v.unsigned_abs() > max
    }) {
        Some(bad) => Err(ValidationError::new(
            field,
            format!("{bad} is not in 1..={max} or -{max}..=-1"),
        )
        .into()),
        None => Ok(()),
    }
}

fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values.dedup();
    values
}

/// Positive values ascending, then negative values ascending.
fn signed_order<T: Ord + Copy + Default>(mut values: Vec<T>) -> Vec<T> {
    values.sort_by_key(|v| (*v < T::default(), *v));
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RfcError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn field_of(err: RfcError) -> &'static str {
        match err {
            RfcError::ValidationError(e) => e.field,
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn build_defaults() {
        let rule = Recurrence::builder(date(2009, 8, 7), Frequency::Weekly)
            .build()
            .unwrap();
        assert_eq!(rule.interval(), 1);
        assert_eq!(rule.terminator(), Terminator::Never);
        assert_eq!(rule.week_start(), Weekday::MONDAY);
        assert!(rule.by_weekday().is_empty());
    }

    #[test]
    fn build_rejects_zero_interval() {
        let err = Recurrence::builder(date(2009, 8, 7), Frequency::Daily)
            .with_interval(0)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "interval");
    }

    #[test]
    fn build_rejects_years_text_cannot_hold() {
        let err = Recurrence::builder(date(10000, 1, 1), Frequency::Daily)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "anchor");

        let err = Recurrence::builder(date(-1, 12, 31), Frequency::Daily)
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "anchor");

        let err = Recurrence::builder(date(9999, 1, 1), Frequency::Daily)
            .with_until(date(10000, 1, 1))
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "until");

        let rule = Recurrence::builder(date(9999, 12, 31), Frequency::Daily)
            .build()
            .unwrap();
        assert_eq!(rule.to_string(), "DTSTART:99991231\nRRULE:FREQ=DAILY");
        assert_eq!(rule.to_string().parse::<Recurrence>().unwrap(), rule);
    }

    #[test]
    fn build_rejects_count_and_until() {
        let err = Recurrence::builder(date(2009, 8, 7), Frequency::Daily)
            .with_count(3)
            .with_until(date(2010, 1, 1))
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "terminator");
    }

    #[test]
    fn build_rejects_weekday_and_month_day() {
        let err = Recurrence::builder(date(2009, 8, 7), Frequency::Monthly)
            .with_by_weekday([Weekday::MONDAY.nth(1)])
            .with_by_month_day([15])
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "by_month_day");
    }

    #[test]
    fn build_rejects_out_of_range_values() {
        let base = Recurrence::builder(date(2009, 8, 7), Frequency::Yearly);
        assert_eq!(
            field_of(base.clone().with_by_month_day([32]).build().unwrap_err()),
            "by_month_day"
        );
        assert_eq!(
            field_of(base.clone().with_by_month_day([0]).build().unwrap_err()),
            "by_month_day"
        );
        assert_eq!(
            field_of(base.clone().with_by_month([13]).build().unwrap_err()),
            "by_month"
        );
        assert_eq!(
            field_of(base.with_by_week_no([54]).build().unwrap_err()),
            "by_week_no"
        );
    }

    #[test]
    fn build_rejects_yearly_only_parts() {
        let err = Recurrence::builder(date(2009, 8, 7), Frequency::Monthly)
            .with_by_year_day([100])
            .build()
            .unwrap_err();
        assert_eq!(field_of(err), "by_year_day");
    }

    #[test]
    fn build_normalizes_order() {
        let rule = Recurrence::builder(date(2014, 10, 1), Frequency::Monthly)
            .with_by_month_day([-1, 15, 1, -2, 15])
            .with_by_month([11, 2, 2])
            .build()
            .unwrap();
        assert_eq!(rule.by_month_day(), &[1, 15, -2, -1]);
        assert_eq!(rule.by_month(), &[2, 11]);
    }

    #[test]
    fn to_builder_round_trips() {
        let rule = Recurrence::builder(date(2011, 1, 1), Frequency::Daily)
            .with_interval(2)
            .with_until(date(2011, 1, 11))
            .build()
            .unwrap();
        let copy = rule.to_builder().build().unwrap();
        assert_eq!(rule, copy);

        let edited = rule.to_builder().with_interval(3).build().unwrap();
        assert_eq!(edited.interval(), 3);
        assert_eq!(rule.interval(), 2);
    }
}
