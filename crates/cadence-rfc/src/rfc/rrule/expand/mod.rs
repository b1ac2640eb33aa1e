//! Occurrence enumeration.
//!
//! Enumeration walks the rule period by period (day, week, month or year)
//! and never looks at a period that starts after the effective horizon: the
//! window end or `UNTIL`, whichever comes first.

mod calendar;
mod occurrences;
mod period;
mod window;

pub use occurrences::Occurrences;
pub use window::OverrideWindow;
