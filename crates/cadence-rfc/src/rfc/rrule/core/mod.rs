//! Recurrence rule value types.
//!
//! These types are designed for:
//! - Immutability: a `Recurrence` never changes after construction
//! - Canonical form: constraint sets are sorted and deduplicated, so equal
//!   rules compare equal and serialize identically
//! - Validation at the boundary: every constructor checks the invariants once

mod frequency;
mod rule;
mod weekday;

pub use frequency::Frequency;
pub use rule::{Recurrence, RecurrenceBuilder, Terminator};
pub use weekday::Weekday;
