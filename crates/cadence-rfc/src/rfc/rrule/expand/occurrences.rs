//! Lazy occurrence enumeration.

use chrono::{Datelike, NaiveDate};

use crate::rfc::rrule::core::{Recurrence, Terminator};

/// Consecutive years without an occurrence after which a rule is treated as
/// exhausted. Every pattern the engine expresses repeats within 400 years
/// per unit of interval (one Gregorian cycle).
const STALL_YEARS_PER_INTERVAL: i64 = 400;

/// Ascending occurrence dates of a [`Recurrence`].
///
/// Created by [`Recurrence::iter`] and [`Recurrence::occurrences_between`].
/// `COUNT` is applied from the anchor, so dates skipped before the window
/// start still count towards it.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    rule: &'a Recurrence,
    period: u64,
    pending: std::vec::IntoIter<NaiveDate>,
    emitted: u32,
    lower: Option<(NaiveDate, bool)>,
    upper: Option<(NaiveDate, bool)>,
    horizon: Option<NaiveDate>,
    last_hit: NaiveDate,
    done: bool,
}

impl<'a> Occurrences<'a> {
    fn new(
        rule: &'a Recurrence,
        lower: Option<(NaiveDate, bool)>,
        upper: Option<(NaiveDate, bool)>,
    ) -> Self {
        let horizon = match (upper.map(|(end, _)| end), rule.until()) {
            (Some(end), Some(until)) => Some(end.min(until)),
            (end, until) => end.or(until),
        };
        tracing::trace!(?horizon, "Enumerating occurrences");
        Self {
            rule,
            period: 0,
            pending: Vec::new().into_iter(),
            emitted: 0,
            lower,
            upper,
            horizon,
            last_hit: rule.anchor(),
            done: false,
        }
    }

    fn finish(&mut self) -> Option<NaiveDate> {
        self.done = true;
        None
    }

    /// Loads the next period's dates; `false` when enumeration is over.
    fn advance_period(&mut self) -> bool {
        let Some(start) = self.rule.period_start(self.period) else {
            tracing::debug!(period = self.period, "Date range exhausted");
            return false;
        };
        if self.horizon.is_some_and(|horizon| start > horizon) {
            return false;
        }
        let stall_limit =
            STALL_YEARS_PER_INTERVAL.saturating_mul(i64::from(self.rule.interval()));
        if i64::from(start.year()) - i64::from(self.last_hit.year()) > stall_limit {
            tracing::debug!(%start, "No occurrences for a full calendar cycle");
            return false;
        }
        self.pending = self.rule.period_dates(start).into_iter();
        self.period += 1;
        true
    }
}

impl Iterator for Occurrences<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while !self.done {
            if let Terminator::Count(count) = self.rule.terminator()
                && self.emitted >= count
            {
                return self.finish();
            }

            let Some(date) = self.pending.next() else {
                if !self.advance_period() {
                    return self.finish();
                }
                continue;
            };

            if self.rule.until().is_some_and(|until| date > until) {
                return self.finish();
            }
            self.emitted += 1;
            self.last_hit = date;

            match self.upper {
                Some((end, inclusive)) if date > end || (!inclusive && date == end) => {
                    return self.finish();
                }
                _ => {}
            }
            match self.lower {
                Some((start, inclusive)) if date < start || (!inclusive && date == start) => {}
                _ => return Some(date),
            }
        }
        None
    }
}

impl std::iter::FusedIterator for Occurrences<'_> {}

impl Recurrence {
    /// Every occurrence from the anchor onwards.
    ///
    /// Unbounded when the rule has no terminator; pair it with `take` or
    /// `take_while`.
    #[must_use]
    pub fn iter(&self) -> Occurrences<'_> {
        Occurrences::new(self, None, None)
    }

    /// Occurrences between two dates, ascending.
    ///
    /// `inclusive` controls whether dates equal to either bound are returned.
    /// The iterator is finite and can be recreated at any time.
    #[must_use]
    pub fn occurrences_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        inclusive: bool,
    ) -> Occurrences<'_> {
        Occurrences::new(self, Some((start, inclusive)), Some((end, inclusive)))
    }

    /// The `n`-th occurrence, counting from 1.
    #[must_use]
    pub fn nth_occurrence(&self, n: usize) -> Option<NaiveDate> {
        n.checked_sub(1).and_then(|index| self.iter().nth(index))
    }

    /// First occurrence after `date` (or on it when `inclusive`).
    #[must_use]
    pub fn after(&self, date: NaiveDate, inclusive: bool) -> Option<NaiveDate> {
        Occurrences::new(self, Some((date, inclusive)), None).next()
    }

    /// Last occurrence before `date` (or on it when `inclusive`).
    #[must_use]
    pub fn before(&self, date: NaiveDate, inclusive: bool) -> Option<NaiveDate> {
        Occurrences::new(self, None, Some((date, inclusive))).last()
    }

    /// Total number of occurrences, or `None` if the rule never ends.
    #[must_use]
    pub fn occurrence_count(&self) -> Option<usize> {
        match self.terminator() {
            Terminator::Never => None,
            Terminator::Count(_) | Terminator::Until(_) => Some(self.iter().count()),
        }
    }
}

impl<'a> IntoIterator for &'a Recurrence {
    type Item = NaiveDate;
    type IntoIter = Occurrences<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
