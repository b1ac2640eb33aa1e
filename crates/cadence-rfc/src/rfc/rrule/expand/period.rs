//! Candidate dates for one period of a rule.
//!
//! Period `k` is the `k`-th day, week, month or year stepped by the interval
//! from the anchor's own period. Each period yields its dates ascending,
//! already limited by the BY* lists, BYSETPOS and the anchor.

use chrono::{Datelike, Days, NaiveDate};

use super::calendar::{
    add_months, days_in_month, days_in_year, resolve_position, start_of_week, week_number,
};
use crate::rfc::rrule::core::{Frequency, Recurrence, Weekday};

impl Recurrence {
    /// First day of period `k`, or `None` once chrono's range is exceeded.
    pub(crate) fn period_start(&self, k: u64) -> Option<NaiveDate> {
        let step = k.checked_mul(u64::from(self.interval))?;
        match self.frequency {
            Frequency::Daily => self.anchor.checked_add_days(Days::new(step)),
            Frequency::Weekly => start_of_week(self.anchor, self.week_start)?
                .checked_add_days(Days::new(step.checked_mul(7)?)),
            Frequency::Monthly => {
                let (year, month) = add_months(self.anchor.year(), self.anchor.month(), step)?;
                NaiveDate::from_ymd_opt(year, month, 1)
            }
            Frequency::Yearly => {
                let year = i64::from(self.anchor.year()).checked_add(i64::try_from(step).ok()?)?;
                NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)
            }
        }
    }

    /// The occurrence dates of the period starting at `start`, ascending.
    pub(crate) fn period_dates(&self, start: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = match self.frequency {
            Frequency::Daily => {
                if self.matches_filters(start) {
                    vec![start]
                } else {
                    Vec::new()
                }
            }
            Frequency::Weekly => self.week_dates(start),
            Frequency::Monthly => {
                if self.month_selected(start.month()) {
                    self.month_dates(start.year(), start.month())
                } else {
                    Vec::new()
                }
            }
            Frequency::Yearly => self.year_dates(start.year()),
        };

        dates.sort_unstable();
        dates.dedup();
        if !self.by_set_pos.is_empty() {
            dates = self.select_positions(&dates);
        }
        dates.retain(|date| *date >= self.anchor);
        dates
    }

    fn month_selected(&self, month: u32) -> bool {
        self.by_month.is_empty() || self.by_month.iter().any(|m| u32::from(*m) == month)
    }

    fn plain_weekdays(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.by_weekday.iter().copied().filter(|day| day.is_plain())
    }

    /// Limit semantics used by DAILY rules and by year/week-number expansion.
    fn matches_filters(&self, date: NaiveDate) -> bool {
        if !self.month_selected(date.month()) {
            return false;
        }
        if !self.by_month_day.is_empty() {
            let day = date.day();
            let len = days_in_month(date.year(), date.month());
            if !self
                .by_month_day
                .iter()
                .any(|d| resolve_position(i32::from(*d), len) == Some(day))
            {
                return false;
            }
        }
        let mut plain = self.plain_weekdays().peekable();
        if plain.peek().is_some() {
            let weekday = Weekday::from_chrono(date.weekday());
            if !plain.any(|day| day == weekday) {
                return false;
            }
        }
        true
    }

    fn week_dates(&self, week_start: NaiveDate) -> Vec<NaiveDate> {
        let anchor_day = Weekday::from_chrono(self.anchor.weekday());
        std::iter::once(anchor_day)
            .chain(self.plain_weekdays())
            .filter_map(|day| {
                let offset = (u32::from(day.index()) + 7 - u32::from(self.week_start.index())) % 7;
                week_start.checked_add_days(Days::new(u64::from(offset)))
            })
            .filter(|date| self.month_selected(date.month()))
            .collect()
    }

    /// Dates in one month from BYDAY, BYMONTHDAY, or the anchor's day.
    fn month_dates(&self, year: i32, month: u32) -> Vec<NaiveDate> {
        let len = days_in_month(year, month);
        let on = |day: u32| NaiveDate::from_ymd_opt(year, month, day);

        if !self.by_weekday.is_empty() {
            let Some(first) = on(1) else {
                return Vec::new();
            };
            let first_index = first.weekday().num_days_from_monday();
            return self
                .by_weekday
                .iter()
                .flat_map(|weekday| {
                    // first day of the month falling on this weekday
                    let first_day = (u32::from(weekday.index()) + 7 - first_index) % 7 + 1;
                    let matching: Vec<u32> = (first_day..=len).step_by(7).collect();
                    let count = u32::try_from(matching.len()).unwrap_or(0);
                    match weekday.ordinal() {
                        None => matching,
                        Some(n) => resolve_position(i32::from(n), count)
                            .and_then(|pos| matching.get(usize::try_from(pos - 1).ok()?).copied())
                            .into_iter()
                            .collect(),
                    }
                })
                .filter_map(on)
                .collect();
        }

        if !self.by_month_day.is_empty() {
            return self
                .by_month_day
                .iter()
                .filter_map(|d| resolve_position(i32::from(*d), len))
                .filter_map(on)
                .collect();
        }

        on(self.anchor.day()).into_iter().collect()
    }

    fn year_dates(&self, year: i32) -> Vec<NaiveDate> {
        if self.by_year_day.is_empty() && self.by_week_no.is_empty() {
            let months: Vec<u32> = if self.by_month.is_empty() {
                vec![self.anchor.month()]
            } else {
                self.by_month.iter().map(|m| u32::from(*m)).collect()
            };
            return months
                .into_iter()
                .flat_map(|month| self.month_dates(year, month))
                .collect();
        }

        let Some(jan1) = NaiveDate::from_ymd_opt(year, 1, 1) else {
            return Vec::new();
        };
        let year_len = days_in_year(year);
        jan1.iter_days()
            .take_while(|date| date.year() == year)
            .filter(|date| {
                self.by_year_day.is_empty()
                    || self
                        .by_year_day
                        .iter()
                        .any(|d| resolve_position(i32::from(*d), year_len) == Some(date.ordinal()))
            })
            .filter(|date| self.in_selected_week(*date))
            .filter(|date| self.matches_filters(*date))
            .collect()
    }

    fn in_selected_week(&self, date: NaiveDate) -> bool {
        if self.by_week_no.is_empty() {
            return true;
        }
        let Some((week, weeks)) = week_number(date, self.week_start) else {
            return false;
        };
        self.by_week_no
            .iter()
            .any(|n| resolve_position(i32::from(*n), weeks) == Some(week))
    }

    fn select_positions(&self, dates: &[NaiveDate]) -> Vec<NaiveDate> {
        let len = u32::try_from(dates.len()).unwrap_or(u32::MAX);
        let mut selected: Vec<NaiveDate> = self
            .by_set_pos
            .iter()
            .filter_map(|pos| resolve_position(i32::from(*pos), len))
            .filter_map(|pos| dates.get(usize::try_from(pos - 1).ok()?).copied())
            .collect();
        selected.sort_unstable();
        selected.dedup();
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn first_period(rule: &Recurrence) -> Vec<NaiveDate> {
        rule.period_dates(rule.period_start(0).unwrap())
    }

    #[test]
    fn monthly_second_tuesday() {
        let rule = Recurrence::builder(date(2021, 1, 12), Frequency::Monthly)
            .with_by_weekday([Weekday::TUESDAY.nth(2)])
            .build()
            .unwrap();
        assert_eq!(rule.period_start(1), Some(date(2021, 2, 1)));
        assert_eq!(
            rule.period_dates(date(2021, 2, 1)),
            vec![date(2021, 2, 9)]
        );
    }

    #[test]
    fn monthly_last_and_fifth_weekday() {
        let rule = Recurrence::builder(date(2021, 1, 1), Frequency::Monthly)
            .with_by_weekday([Weekday::FRIDAY.nth(-1), Weekday::MONDAY.nth(5)])
            .build()
            .unwrap();
        // January 2021 has no fifth Monday
        assert_eq!(first_period(&rule), vec![date(2021, 1, 29)]);
        // March 2021 has a fifth Monday on the 29th
        assert_eq!(
            rule.period_dates(date(2021, 3, 1)),
            vec![date(2021, 3, 26), date(2021, 3, 29)]
        );
    }

    #[test]
    fn monthly_month_days_skip_missing() {
        let rule = Recurrence::builder(date(2021, 1, 31), Frequency::Monthly)
            .build()
            .unwrap();
        assert_eq!(first_period(&rule), vec![date(2021, 1, 31)]);
        assert!(rule.period_dates(date(2021, 2, 1)).is_empty());

        let rule = Recurrence::builder(date(2021, 1, 1), Frequency::Monthly)
            .with_by_month_day([-1, 30])
            .build()
            .unwrap();
        assert_eq!(
            rule.period_dates(date(2021, 2, 1)),
            vec![date(2021, 2, 28)]
        );
    }

    #[test]
    fn weekly_includes_anchor_weekday() {
        // Friday anchor with Monday and Wednesday
        let rule = Recurrence::builder(date(2009, 8, 7), Frequency::Weekly)
            .with_by_weekday([Weekday::MONDAY, Weekday::WEDNESDAY])
            .build()
            .unwrap();
        assert_eq!(first_period(&rule), vec![date(2009, 8, 7)]);
        assert_eq!(
            rule.period_dates(rule.period_start(1).unwrap()),
            vec![date(2009, 8, 10), date(2009, 8, 12), date(2009, 8, 14)]
        );
    }

    #[test]
    fn yearly_defaults_to_anchor_month() {
        let rule = Recurrence::builder(date(2020, 3, 15), Frequency::Yearly)
            .build()
            .unwrap();
        assert_eq!(rule.period_start(2), Some(date(2022, 1, 1)));
        assert_eq!(
            rule.period_dates(date(2022, 1, 1)),
            vec![date(2022, 3, 15)]
        );
    }

    #[test]
    fn set_pos_picks_last_weekday_of_month() {
        let rule = Recurrence::builder(date(2021, 1, 1), Frequency::Monthly)
            .with_by_weekday(Weekday::ALL.into_iter().take(5))
            .with_by_set_pos([-1])
            .build()
            .unwrap();
        assert_eq!(
            rule.period_dates(date(2021, 7, 1)),
            vec![date(2021, 7, 30)]
        );
    }

    #[test]
    fn yearly_by_year_day() {
        let rule = Recurrence::builder(date(2020, 1, 1), Frequency::Yearly)
            .with_by_year_day([1, -1])
            .build()
            .unwrap();
        assert_eq!(
            first_period(&rule),
            vec![date(2020, 1, 1), date(2020, 12, 31)]
        );
    }

    #[test]
    fn yearly_by_week_no_with_weekday() {
        let rule = Recurrence::builder(date(2020, 1, 1), Frequency::Yearly)
            .with_by_week_no([20])
            .with_by_weekday([Weekday::MONDAY])
            .build()
            .unwrap();
        assert_eq!(first_period(&rule), vec![date(2020, 5, 11)]);
    }

    #[test]
    fn daily_filters() {
        let rule = Recurrence::builder(date(2021, 1, 1), Frequency::Daily)
            .with_by_weekday([Weekday::SATURDAY])
            .build()
            .unwrap();
        assert!(rule.period_dates(date(2021, 1, 1)).is_empty());
        assert_eq!(
            rule.period_dates(date(2021, 1, 2)),
            vec![date(2021, 1, 2)]
        );
    }
}
