//! Natural-language sentences for recurrence rules.

use chrono::{Datelike, Days, NaiveDate};

use super::words::{
    capitalize, days_offset_phrase, format_date, hr_join, month_name, to_ordinal, to_the_ordinal,
};
use crate::rfc::rrule::core::{Frequency, Recurrence, Terminator, Weekday};

impl Recurrence {
    /// ## Summary
    /// Describes the rule in English.
    ///
    /// "Mondays, Wednesdays and Fridays", "The second Tuesday of the month",
    /// "Every 3 days (until 5 May 2012)".
    #[must_use]
    pub fn describe(&self) -> String {
        self.describe_shifted(0, 1)
    }

    /// ## Summary
    /// Describes the rule for an event whose local date is `offset` days from
    /// the rule's dates, lasting `num_days` days.
    ///
    /// Used when an event's time zone puts it on a different calendar day
    /// from the one the rule was written for.
    #[must_use]
    pub fn describe_shifted(&self, offset: i32, num_days: u32) -> String {
        let mut sentence = match self.frequency {
            Frequency::Daily => self.daily_when(),
            Frequency::Weekly => self.weekly_when(offset),
            Frequency::Monthly | Frequency::Yearly => self.period_when(offset),
        };

        if num_days >= 2 {
            sentence.push_str(&format!(" for {num_days} days"));
        }
        if let Terminator::Until(until) = self.terminator {
            let until = shift_date(until, offset);
            sentence.push_str(&format!(" (until {})", format_date(until)));
        }
        sentence
    }

    fn daily_when(&self) -> String {
        if self.interval > 1 {
            format!("Every {} days", self.interval)
        } else {
            "Daily".to_string()
        }
    }

    fn weekly_when(&self, offset: i32) -> String {
        let anchor_day = Weekday::from_chrono(self.anchor.weekday());
        let mut days: Vec<Weekday> = std::iter::once(anchor_day)
            .chain(self.by_weekday.iter().copied().filter(|day| day.is_plain()))
            .collect();
        days.sort_unstable();
        days.dedup();

        let names: Vec<String> = days.iter().map(|day| day.shifted_plural(offset)).collect();
        let days = hr_join(&names);
        match self.interval {
            1 => days,
            2 => format!("Fortnightly on {days}"),
            n => format!("Every {n} weeks on {days}"),
        }
    }

    /// Sentence for MONTHLY and YEARLY rules.
    fn period_when(&self, offset: i32) -> String {
        let (unit, months) = match self.frequency {
            Frequency::Yearly if self.by_month.is_empty() => ("years", vec![self.anchor.month()]),
            Frequency::Yearly => ("years", self.months()),
            _ => ("months", self.months()),
        };
        let of = if months.is_empty() {
            " of the month".to_string()
        } else {
            format!(" of {}", month_list(&months, 0))
        };

        let mut sentence = if !self.by_year_day.is_empty() {
            self.year_day_when(offset)
        } else if !self.by_week_no.is_empty() {
            self.week_no_when(offset)
        } else if !self.by_weekday.is_empty() {
            self.weekday_when(offset, &of)
        } else if self.by_month_day.len() > 1 {
            self.month_days_when(offset, &of)
        } else {
            let day = self
                .by_month_day
                .first()
                .map_or_else(|| i32::try_from(self.anchor.day()).unwrap_or(1), |d| i32::from(*d));
            month_day_when(day, offset, &months, of)
        };

        if !self.by_set_pos.is_empty() {
            let positions: Vec<String> = self
                .by_set_pos
                .iter()
                .map(|pos| to_ordinal(i32::from(*pos)))
                .collect();
            let period = if self.frequency == Frequency::Yearly { "year" } else { "month" };
            sentence.push_str(&format!(", only the {} each {period}", hr_join(&positions)));
        }
        if self.interval >= 2 {
            sentence.push_str(&format!(", every {} {unit}", self.interval));
        }
        sentence
    }

    fn months(&self) -> Vec<u32> {
        self.by_month.iter().map(|m| u32::from(*m)).collect()
    }

    fn weekday_when(&self, offset: i32, of: &str) -> String {
        if self.is_every_weekday() {
            return "Everyday".to_string();
        }
        let names: Vec<String> = self
            .by_weekday
            .iter()
            .map(|day| day.shifted(offset))
            .collect();
        let days = hr_join(&names);
        if self.by_weekday.first().is_some_and(|day| day.is_plain()) {
            format!("Every {days}")
        } else {
            format!("The {days}{of}")
        }
    }

    fn month_days_when(&self, offset: i32, of: &str) -> String {
        let ordinals: Vec<String> = self
            .by_month_day
            .iter()
            .map(|d| to_the_ordinal(i32::from(*d)))
            .collect();
        let ordinals = hr_join(&ordinals);
        if offset == 0 {
            format!("{} day{of}", capitalize(&ordinals))
        } else {
            format!("{} {ordinals} day{of}", days_offset_phrase(offset))
        }
    }

    fn year_day_when(&self, offset: i32) -> String {
        let ordinals: Vec<String> = self
            .by_year_day
            .iter()
            .map(|d| to_the_ordinal(i32::from(*d)))
            .collect();
        let ordinals = hr_join(&ordinals);
        if offset == 0 {
            format!("{} day of the year", capitalize(&ordinals))
        } else {
            format!("{} {ordinals} day of the year", days_offset_phrase(offset))
        }
    }

    fn week_no_when(&self, offset: i32) -> String {
        let days: Vec<String> = self
            .by_weekday
            .iter()
            .filter(|day| day.is_plain())
            .map(|day| day.shifted(offset))
            .collect();
        let weeks: Vec<String> = self.by_week_no.iter().map(ToString::to_string).collect();
        let noun = if weeks.len() == 1 { "week" } else { "weeks" };
        let days = if days.is_empty() {
            "day".to_string()
        } else {
            hr_join(&days)
        };
        format!("Every {days} in {noun} {}", hr_join(&weeks))
    }
}

/// A single month day, nudged by `offset` where it reads naturally.
///
/// The first day moved backwards becomes a day of the previous month and the
/// last day moved forwards a day of the next, with the month names shifted to
/// match.
fn month_day_when(day: i32, offset: i32, months: &[u32], of: String) -> String {
    let (day, of, days_offset) = if day == 1 && offset < 0 {
        let of = if months.is_empty() { of } else { format!(" of {}", month_list(months, -1)) };
        (offset, of, String::new())
    } else if day == -1 && offset > 0 {
        let of = if months.is_empty() { of } else { format!(" of {}", month_list(months, 1)) };
        (offset, of, String::new())
    } else if (1..=28).contains(&(day + offset)) {
        (day + offset, of, String::new())
    } else {
        (day, of, days_offset_phrase(offset))
    };

    if days_offset.is_empty() {
        format!("{} day{of}", capitalize(&to_the_ordinal(day)))
    } else {
        format!("{days_offset} {} day{of}", to_the_ordinal(day))
    }
}

/// Month names, each moved by `shift` months (used when a day wraps into
/// the previous or next month).
fn month_list(months: &[u32], shift: i32) -> String {
    let names: Vec<&str> = months
        .iter()
        .map(|m| month_name(i32::try_from(*m).unwrap_or(1) + shift))
        .collect();
    hr_join(&names)
}

fn shift_date(date: NaiveDate, offset: i32) -> NaiveDate {
    let days = Days::new(u64::from(offset.unsigned_abs()));
    let shifted = if offset < 0 {
        date.checked_sub_days(days)
    } else {
        date.checked_add_days(days)
    };
    shifted.unwrap_or(date)
}
