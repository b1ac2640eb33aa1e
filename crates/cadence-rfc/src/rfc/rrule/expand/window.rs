//! The window of dates offered when overriding single occurrences.

use chrono::{NaiveDate, TimeDelta};

use cadence_core::constants::{DEFAULT_OVERRIDE_FUTURE_DAYS, DEFAULT_OVERRIDE_PAST_DAYS};

use super::calendar::first_of_month;
use crate::rfc::rrule::core::Recurrence;

/// A month-aligned, inclusive date range around "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverrideWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl OverrideWindow {
    /// ## Summary
    /// Spans from the first of the month `past_days` before `today` to the
    /// first of the month `future_days` after it.
    #[must_use]
    pub fn around(today: NaiveDate, past_days: i64, future_days: i64) -> Self {
        Self {
            start: first_of_month(shift(today, -past_days)),
            end: first_of_month(shift(today, future_days)),
        }
    }

    /// [`OverrideWindow::around`] with the default 90 days back, 217 forward.
    #[must_use]
    pub fn default_around(today: NaiveDate) -> Self {
        Self::around(today, DEFAULT_OVERRIDE_PAST_DAYS, DEFAULT_OVERRIDE_FUTURE_DAYS)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

impl Recurrence {
    /// Occurrences inside `window`, for picking a date to override.
    #[must_use]
    pub fn override_dates(&self, window: OverrideWindow) -> Vec<NaiveDate> {
        self.occurrences_between(window.start, window.end, true)
            .collect()
    }
}
