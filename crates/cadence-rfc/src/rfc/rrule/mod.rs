//! Recurrence rules for repeating calendar events.
//!
//! A constrained subset of RFC 5545 RRULEs over whole dates:
//!
//! - `core`: the `Weekday`, `Frequency` and `Recurrence` value types
//! - `parse`: `DTSTART`/`RRULE` text into a `Recurrence`
//! - `build`: a `Recurrence` back into canonical text
//! - `expand`: lazy occurrence enumeration and the override date window
//! - `describe`: natural-language sentences
//! - `wizard`: the 13-slot form representation
//!
//! Time zones and sub-day frequencies are not supported.
//!
//! ## Example
//!
//! ```rust
//! use cadence_rfc::rfc::rrule::core::Recurrence;
//!
//! let rule: Recurrence = "DTSTART:20090807\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR"
//!     .parse()
//!     .unwrap();
//! assert_eq!(rule.describe(), "Mondays, Wednesdays and Fridays");
//! assert_eq!(rule.to_string(), "DTSTART:20090807\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR");
//! ```

pub mod build;
pub mod core;
pub mod describe;
pub mod expand;
pub mod parse;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use self::core::{Frequency, Recurrence, RecurrenceBuilder, Terminator, Weekday};
pub use expand::{Occurrences, OverrideWindow};
pub use parse::{ParseError, ParseErrorKind, ParseResult};
pub use wizard::{DayChoice, DaySlot, OrdinalChoice, WizardFields};
