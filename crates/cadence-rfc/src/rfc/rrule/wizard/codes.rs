//! Integer codes used by the wizard form controls.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Ordinal slot code meaning "every such weekday" (or every day of the month).
pub const EVERY_DAY: i32 = 100;
/// Ordinal slot code meaning "the anchor's day of the month".
pub const SAME_DAY: i32 = 101;
/// Day slot code selecting day-of-month instead of a weekday.
pub const DAY_OF_MONTH: i32 = 200;

/// The ordinal control of an ordinal/day pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum OrdinalChoice {
    /// Nth weekday or day of the month; negative counts from the end.
    Nth(i32),
    /// Every such weekday, or with [`DayChoice::DayOfMonth`] every day.
    EveryDay,
    /// The anchor's day of the month (first pair only).
    SameDay,
}

impl OrdinalChoice {
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Nth(n) => n,
            Self::EveryDay => EVERY_DAY,
            Self::SameDay => SAME_DAY,
        }
    }
}

impl TryFrom<i32> for OrdinalChoice {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            EVERY_DAY => Ok(Self::EveryDay),
            SAME_DAY => Ok(Self::SameDay),
            n if n != 0 && (-53..=53).contains(&n) => Ok(Self::Nth(n)),
            _ => Err(ValidationError::new(
                "ordinal",
                format!("{code} is not an ordinal code"),
            )),
        }
    }
}

impl From<OrdinalChoice> for i32 {
    fn from(choice: OrdinalChoice) -> Self {
        choice.code()
    }
}

/// The day control of an ordinal/day pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum DayChoice {
    /// Weekday index, Monday = 0.
    Weekday(u8),
    DayOfMonth,
}

impl DayChoice {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Weekday(index) => i32::from(index),
            Self::DayOfMonth => DAY_OF_MONTH,
        }
    }
}

impl TryFrom<i32> for DayChoice {
    type Error = ValidationError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            DAY_OF_MONTH => Ok(Self::DayOfMonth),
            0..=6 => u8::try_from(code)
                .map(Self::Weekday)
                .map_err(|e| ValidationError::new("day", e.to_string())),
            _ => Err(ValidationError::new(
                "day",
                format!("{code} is not a day code"),
            )),
        }
    }
}

impl From<DayChoice> for i32 {
    fn from(choice: DayChoice) -> Self {
        choice.code()
    }
}
