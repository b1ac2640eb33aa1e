//! Recurrence frequency (RFC 5545 §3.3.10), restricted to whole days.

use std::fmt;

/// How often a recurrence repeats.
///
/// Sub-day frequencies (`HOURLY`, `MINUTELY`, `SECONDLY`) are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Frequency {
    Yearly,
    Monthly,
    Weekly,
    Daily,
}

impl Frequency {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yearly => "YEARLY",
            Self::Monthly => "MONTHLY",
            Self::Weekly => "WEEKLY",
            Self::Daily => "DAILY",
        }
    }

    /// Parses a frequency from a string (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "YEARLY" => Self::Yearly,
            "MONTHLY" => Self::Monthly,
            "WEEKLY" => Self::Weekly,
            "DAILY" => Self::Daily,
            _ => return None,
        })
    }

    /// Returns whether `s` names an RFC 5545 frequency finer than a day.
    #[must_use]
    pub fn is_sub_daily(s: &str) -> bool {
        matches!(
            s.to_ascii_uppercase().as_str(),
            "HOURLY" | "MINUTELY" | "SECONDLY"
        )
    }

    /// Integer code used by the wizard form (YEARLY=0 … DAILY=3).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Yearly => 0,
            Self::Monthly => 1,
            Self::Weekly => 2,
            Self::Daily => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Yearly),
            1 => Some(Self::Monthly),
            2 => Some(Self::Weekly),
            3 => Some(Self::Daily),
            _ => None,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
