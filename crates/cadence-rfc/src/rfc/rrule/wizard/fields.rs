//! The 13-slot form representation of a rule.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::{DayChoice, OrdinalChoice};
use crate::error::ValidationError;
use crate::rfc::rrule::core::Frequency;

/// One ordinal/day pair of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySlot {
    pub ordinal: Option<OrdinalChoice>,
    pub day: Option<DayChoice>,
}

impl DaySlot {
    #[must_use]
    pub const fn new(ordinal: OrdinalChoice, day: DayChoice) -> Self {
        Self {
            ordinal: Some(ordinal),
            day: Some(day),
        }
    }

    /// Both controls set.
    #[must_use]
    pub const fn choices(self) -> Option<(OrdinalChoice, DayChoice)> {
        match (self.ordinal, self.day) {
            (Some(ordinal), Some(day)) => Some((ordinal, day)),
            _ => None,
        }
    }
}

/// Form values for building a rule with separate controls.
///
/// Serializes as a flat JSON array:
/// `[anchor, frequency, interval, weekdays, count, until, ord_1, day_1,
/// ord_2, day_2, ord_3, day_3, months]`, with frequency codes
/// YEARLY=0, MONTHLY=1, WEEKLY=2, DAILY=3.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "WizardArray", into = "WizardArray")]
pub struct WizardFields {
    pub anchor: Option<NaiveDate>,
    pub frequency: Option<Frequency>,
    pub interval: u32,
    /// Weekly checkboxes, weekday indices with Monday = 0.
    pub weekdays: Vec<u8>,
    pub count: Option<u32>,
    pub until: Option<NaiveDate>,
    pub slots: [DaySlot; 3],
    /// Yearly month selector, 1..=12.
    pub months: Vec<u8>,
}

impl Default for WizardFields {
    /// The blank form: interval 1 and "same day of the month" in the first pair.
    fn default() -> Self {
        Self {
            anchor: None,
            frequency: None,
            interval: 1,
            weekdays: Vec::new(),
            count: None,
            until: None,
            slots: [
                DaySlot::new(OrdinalChoice::SameDay, DayChoice::DayOfMonth),
                DaySlot::default(),
                DaySlot::default(),
            ],
            months: Vec::new(),
        }
    }
}

/// Wire shape of [`WizardFields`].
#[derive(Serialize, Deserialize)]
struct WizardArray(
    Option<NaiveDate>,
    Option<u8>,
    u32,
    Vec<u8>,
    Option<u32>,
    Option<NaiveDate>,
    Option<OrdinalChoice>,
    Option<DayChoice>,
    Option<OrdinalChoice>,
    Option<DayChoice>,
    Option<OrdinalChoice>,
    Option<DayChoice>,
    Vec<u8>,
);

impl TryFrom<WizardArray> for WizardFields {
    type Error = ValidationError;

    fn try_from(array: WizardArray) -> Result<Self, Self::Error> {
        let frequency = array
            .1
            .map(|code| {
                Frequency::from_code(code).ok_or_else(|| {
                    ValidationError::new("frequency", format!("{code} is not a frequency code"))
                })
            })
            .transpose()?;
        Ok(Self {
            anchor: array.0,
            frequency,
            interval: array.2,
            weekdays: array.3,
            count: array.4,
            until: array.5,
            slots: [
                DaySlot {
                    ordinal: array.6,
                    day: array.7,
                },
                DaySlot {
                    ordinal: array.8,
                    day: array.9,
                },
                DaySlot {
                    ordinal: array.10,
                    day: array.11,
                },
            ],
            months: array.12,
        })
    }
}

impl From<WizardFields> for WizardArray {
    fn from(fields: WizardFields) -> Self {
        let [first, second, third] = fields.slots;
        Self(
            fields.anchor,
            fields.frequency.map(Frequency::code),
            fields.interval,
            fields.weekdays,
            fields.count,
            fields.until,
            first.ordinal,
            first.day,
            second.ordinal,
            second.day,
            third.ordinal,
            third.day,
            fields.months,
        )
    }
}
