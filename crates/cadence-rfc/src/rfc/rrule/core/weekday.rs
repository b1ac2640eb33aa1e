//! Weekday references with an optional ordinal (the BYDAY rule part).

use std::fmt;

use crate::error::{RfcResult, ValidationError};
use crate::rfc::rrule::describe::words::{
    WEEKDAY_NAMES, WEEKDAY_NAMES_PLURAL, capitalize, to_ordinal,
};

const CODES: [&str; 7] = ["MO", "TU", "WE", "TH", "FR", "SA", "SU"];

/// A day of the week, optionally qualified by its position in the period.
///
/// Examples:
/// - `MO` - every Monday
/// - `+2TU` - the second Tuesday of the month
/// - `-1FR` - the last Friday of the month
///
/// The index counts from Monday (0) to Sunday (6). Ordering is by
/// `(index, ordinal)`, which keeps rule sets deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Weekday {
    index: u8,
    ordinal: Option<i8>,
}

impl Weekday {
    pub const MONDAY: Self = Self::plain_unchecked(0);
    pub const TUESDAY: Self = Self::plain_unchecked(1);
    pub const WEDNESDAY: Self = Self::plain_unchecked(2);
    pub const THURSDAY: Self = Self::plain_unchecked(3);
    pub const FRIDAY: Self = Self::plain_unchecked(4);
    pub const SATURDAY: Self = Self::plain_unchecked(5);
    pub const SUNDAY: Self = Self::plain_unchecked(6);

    /// Every day of the week, Monday first.
    pub const ALL: [Self; 7] = [
        Self::MONDAY,
        Self::TUESDAY,
        Self::WEDNESDAY,
        Self::THURSDAY,
        Self::FRIDAY,
        Self::SATURDAY,
        Self::SUNDAY,
    ];

    const fn plain_unchecked(index: u8) -> Self {
        Self {
            index,
            ordinal: None,
        }
    }

    /// Creates a weekday reference.
    ///
    /// An ordinal of `Some(0)` is the same as no ordinal.
    ///
    /// ## Panics
    ///
    /// Panics if `index` is greater than 6 or the ordinal is outside -53..=53.
    #[must_use]
    pub fn new(index: u8, ordinal: Option<i8>) -> Self {
        assert!(index <= 6, "weekday index out of range: {index}");
        assert!(
            ordinal.is_none_or(|n| (-53..=53).contains(&n)),
            "weekday ordinal out of range"
        );
        Self {
            index,
            ordinal: ordinal.filter(|n| *n != 0),
        }
    }

    /// Creates a weekday reference from untrusted input.
    ///
    /// ## Errors
    /// Returns a `ValidationError` if the index or ordinal is out of range.
    pub fn try_new(index: i32, ordinal: Option<i32>) -> RfcResult<Self> {
        let index = u8::try_from(index)
            .ok()
            .filter(|i| *i <= 6)
            .ok_or_else(|| {
                ValidationError::new("weekday", format!("index {index} is not in 0..=6"))
            })?;
        let ordinal = match ordinal {
            None | Some(0) => None,
            Some(n) => Some(
                i8::try_from(n)
                    .ok()
                    .filter(|n| (-53..=53).contains(n))
                    .ok_or_else(|| {
                        ValidationError::new(
                            "weekday",
                            format!("ordinal {n} is not in -53..=53"),
                        )
                    })?,
            ),
        };
        Ok(Self { index, ordinal })
    }

    /// Returns the same weekday qualified by `n` (`0` clears the ordinal).
    ///
    /// ## Panics
    ///
    /// Panics if `n` is outside -53..=53.
    #[must_use]
    pub fn nth(self, n: i8) -> Self {
        Self::new(self.index, Some(n))
    }

    /// Returns the same weekday without an ordinal.
    #[must_use]
    pub const fn plain(self) -> Self {
        Self::plain_unchecked(self.index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    #[must_use]
    pub const fn ordinal(self) -> Option<i8> {
        self.ordinal
    }

    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.ordinal.is_none()
    }

    /// Returns the two-letter code, e.g. `"TU"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        CODES[usize::from(self.index)]
    }

    /// Parses a two-letter code (case-insensitive) into a plain weekday.
    #[must_use]
    pub fn parse_code(s: &str) -> Option<Self> {
        let upper = s.to_ascii_uppercase();
        CODES
            .iter()
            .zip(0u8..)
            .find(|(code, _)| **code == upper)
            .map(|(_, index)| Self::plain_unchecked(index))
    }

    #[must_use]
    pub fn from_chrono(day: chrono::Weekday) -> Self {
        // num_days_from_monday is always < 7
        Self::plain_unchecked(u8::try_from(day.num_days_from_monday()).unwrap_or(0))
    }

    #[must_use]
    pub fn to_chrono(self) -> chrono::Weekday {
        match self.index {
            0 => chrono::Weekday::Mon,
            1 => chrono::Weekday::Tue,
            2 => chrono::Weekday::Wed,
            3 => chrono::Weekday::Thu,
            4 => chrono::Weekday::Fri,
            5 => chrono::Weekday::Sat,
            _ => chrono::Weekday::Sun,
        }
    }

    /// English name of the day, e.g. `"Tuesday"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.index)]
    }

    /// Plural English name of the day, e.g. `"Tuesdays"`.
    #[must_use]
    pub fn plural_name(self) -> &'static str {
        WEEKDAY_NAMES_PLURAL[usize::from(self.index)]
    }

    /// Long human form, e.g. `"Second Tuesday"` or `"Sunday"`.
    #[must_use]
    pub fn long_name(self) -> String {
        capitalize(&self.shifted(0))
    }

    /// Human form for an event that falls `offset` days away from this weekday.
    ///
    /// `"Wednesday after the second Tuesday"`, `"Monday"` (plain, shifted from
    /// Tuesday by -1), or `"second Tuesday"` when `offset` is zero.
    #[must_use]
    pub fn shifted(self, offset: i32) -> String {
        self.when(offset, &WEEKDAY_NAMES)
    }

    /// Plural counterpart of [`Weekday::shifted`], for weekly sentences.
    #[must_use]
    pub fn shifted_plural(self, offset: i32) -> String {
        self.when(offset, &WEEKDAY_NAMES_PLURAL)
    }

    fn when(self, offset: i32, names: &[&'static str; 7]) -> String {
        let weekday = names[usize::from(self.index)];
        if offset == 0 {
            return match self.ordinal {
                None => weekday.to_string(),
                Some(n) => format!("{} {weekday}", to_ordinal(i32::from(n))),
            };
        }

        let local_index = (i32::from(self.index) + offset).rem_euclid(7);
        let local = names[usize::try_from(local_index).unwrap_or(0)];
        match self.ordinal {
            None => local.to_string(),
            Some(n) => {
                let ordinal = to_ordinal(i32::from(n));
                let direction = if offset < 0 { "before" } else { "after" };
                format!("{local} {direction} the {ordinal} {weekday}")
            }
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(n) = self.ordinal {
            write!(f, "{n:+}")?;
        }
        write!(f, "{}", self.code())
    }
}
