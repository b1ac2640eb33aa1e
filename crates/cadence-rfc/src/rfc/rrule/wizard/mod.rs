//! The wizard form representation of a rule.
//!
//! A rule editor with separate controls stores its state as 13 values
//! (see [`WizardFields`]). [`Recurrence::to_wizard`] and
//! [`Recurrence::from_wizard`] convert in both directions; decoding an
//! encoded rule gives back an equal rule for everything the form can show.
//!
//! [`Recurrence::to_wizard`]: crate::rfc::rrule::core::Recurrence::to_wizard
//! [`Recurrence::from_wizard`]: crate::rfc::rrule::core::Recurrence::from_wizard

mod codec;
mod codes;
mod fields;

pub use codes::{DAY_OF_MONTH, DayChoice, EVERY_DAY, OrdinalChoice, SAME_DAY};
pub use fields::{DaySlot, WizardFields};
