//! Conversion between [`Recurrence`] and [`WizardFields`].

use chrono::Datelike;

use super::codes::{DayChoice, OrdinalChoice};
use super::fields::{DaySlot, WizardFields};
use crate::error::{RfcError, RfcResult, ValidationError};
use crate::rfc::rrule::core::{Frequency, Recurrence, Weekday};

const ORDINAL_FIELDS: [&str; 3] = ["ord_1", "ord_2", "ord_3"];

impl Recurrence {
    /// ## Summary
    /// Fills the form controls from this rule.
    ///
    /// Weekly rules set the weekday checkboxes; monthly and yearly rules use
    /// the ordinal/day pairs, and yearly rules also the month selector. Only
    /// three pairs fit, so longer weekday or month-day lists are truncated.
    /// A monthly or yearly rule with no day constraint leaves every pair
    /// blank. The week start has no control and is not written.
    #[must_use]
    pub fn to_wizard(&self) -> WizardFields {
        let mut fields = WizardFields {
            anchor: Some(self.anchor),
            frequency: Some(self.frequency),
            interval: self.interval,
            count: self.count(),
            until: self.until(),
            ..WizardFields::default()
        };

        match self.frequency {
            Frequency::Weekly => {
                fields.weekdays = self
                    .by_weekday
                    .iter()
                    .filter(|day| day.is_plain())
                    .map(|day| day.index())
                    .collect();
            }
            Frequency::Monthly | Frequency::Yearly => {
                fields.slots = self.wizard_slots().unwrap_or_default();
                if self.frequency == Frequency::Yearly {
                    fields.months.clone_from(&self.by_month);
                }
            }
            Frequency::Daily => {}
        }
        fields
    }

    fn wizard_slots(&self) -> Option<[DaySlot; 3]> {
        let pairs: Vec<DaySlot> = if self.is_every_weekday() {
            vec![DaySlot::new(OrdinalChoice::EveryDay, DayChoice::DayOfMonth)]
        } else if !self.by_weekday.is_empty() {
            self.by_weekday
                .iter()
                .map(|day| {
                    let ordinal = day
                        .ordinal()
                        .map_or(OrdinalChoice::EveryDay, |n| OrdinalChoice::Nth(i32::from(n)));
                    DaySlot::new(ordinal, DayChoice::Weekday(day.index()))
                })
                .collect()
        } else if !self.by_month_day.is_empty() {
            let anchor_day = self.anchor.day();
            self.by_month_day
                .iter()
                .enumerate()
                .map(|(slot, day)| {
                    let ordinal = if slot == 0 && u32::try_from(*day).ok() == Some(anchor_day) {
                        OrdinalChoice::SameDay
                    } else {
                        OrdinalChoice::Nth(i32::from(*day))
                    };
                    DaySlot::new(ordinal, DayChoice::DayOfMonth)
                })
                .collect()
        } else {
            return None;
        };

        if pairs.len() > 3 {
            tracing::debug!(pairs = pairs.len(), "Only three day pairs fit the form");
        }
        let mut slots = [DaySlot::default(); 3];
        for (slot, pair) in slots.iter_mut().zip(pairs) {
            *slot = pair;
        }
        Some(slots)
    }

    /// ## Summary
    /// Builds a rule from form controls.
    ///
    /// The first pair decides whether the rule selects weekdays or days of the
    /// month; later pairs of the other kind are ignored. A count of zero means
    /// no count. The month selector only applies to yearly rules, and an empty
    /// one leaves the months unrestricted.
    ///
    /// ## Errors
    /// Returns `RfcError::ValidationError` when the anchor or frequency is
    /// missing, `SAME_DAY` is used outside the first pair or with a weekday,
    /// a weekday or month is out of range, or the assembled rule breaks an
    /// invariant (for example both a count and an end date).
    pub fn from_wizard(fields: &WizardFields) -> RfcResult<Self> {
        Self::from_wizard_with_week_start(fields, Weekday::MONDAY)
    }

    /// ## Summary
    /// As [`Recurrence::from_wizard`], with the week start the form has no
    /// control for.
    ///
    /// ## Errors
    /// As [`Recurrence::from_wizard`].
    pub fn from_wizard_with_week_start(
        fields: &WizardFields,
        week_start: Weekday,
    ) -> RfcResult<Self> {
        let anchor = fields
            .anchor
            .ok_or_else(|| ValidationError::new("anchor", "a start date is required"))?;
        let frequency = fields
            .frequency
            .ok_or_else(|| ValidationError::new("frequency", "a frequency is required"))?;

        let count = fields.count.filter(|count| *count > 0);
        let mut builder = Self::builder(anchor, frequency)
            .with_interval(fields.interval)
            .with_week_start(week_start)
            .with_terminators(count, fields.until);

        match frequency {
            Frequency::Weekly => {
                let days = fields
                    .weekdays
                    .iter()
                    .map(|index| Weekday::try_new(i32::from(*index), None))
                    .collect::<RfcResult<Vec<_>>>()?;
                builder = builder.with_by_weekday(days);
            }
            Frequency::Monthly | Frequency::Yearly => {
                let (weekdays, month_days) = decode_slots(&fields.slots, anchor.day())?;
                builder = builder
                    .with_by_weekday(weekdays)
                    .with_by_month_day(month_days);
                if frequency == Frequency::Yearly {
                    builder = builder.with_by_month(fields.months.iter().copied());
                }
            }
            Frequency::Daily => {}
        }

        let rule = builder.build()?;
        tracing::debug!(%rule, "Recurrence built from form");
        Ok(rule)
    }
}

impl From<&Recurrence> for WizardFields {
    fn from(rule: &Recurrence) -> Self {
        rule.to_wizard()
    }
}

impl TryFrom<&WizardFields> for Recurrence {
    type Error = RfcError;

    fn try_from(fields: &WizardFields) -> Result<Self, Self::Error> {
        Self::from_wizard(fields)
    }
}

/// Turns the ordinal/day pairs into weekday and month-day lists.
fn decode_slots(slots: &[DaySlot; 3], anchor_day: u32) -> RfcResult<(Vec<Weekday>, Vec<i8>)> {
    let mut weekdays = Vec::new();
    let mut month_days = Vec::new();
    let Some((_, first_day)) = slots[0].choices() else {
        if slots[1..].iter().any(|slot| slot.choices().is_some()) {
            tracing::debug!("Ignoring later pairs after a blank first pair");
        }
        return Ok((weekdays, month_days));
    };
    let by_month_day = first_day == DayChoice::DayOfMonth;

    for (slot, field) in slots.iter().zip(ORDINAL_FIELDS) {
        let Some((ordinal, day)) = slot.choices() else {
            continue;
        };
        let first = field == ORDINAL_FIELDS[0];
        match (ordinal, day) {
            (OrdinalChoice::SameDay, _) if !first => {
                return Err(
                    ValidationError::new(field, "SAME_DAY is only allowed in the first pair")
                        .into(),
                );
            }
            (OrdinalChoice::SameDay, DayChoice::Weekday(_)) => {
                return Err(
                    ValidationError::new(field, "SAME_DAY needs DAY_OF_MONTH").into()
                );
            }
            (OrdinalChoice::EveryDay, DayChoice::DayOfMonth) if by_month_day => {
                if first {
                    weekdays.extend(Weekday::ALL);
                    break;
                }
                tracing::debug!(field, "Ignoring every-day pair after the first");
            }
            (OrdinalChoice::SameDay, DayChoice::DayOfMonth) => {
                let day = i8::try_from(anchor_day)
                    .map_err(|e| ValidationError::new(field, e.to_string()))?;
                month_days.push(day);
            }
            (OrdinalChoice::Nth(n), DayChoice::DayOfMonth) if by_month_day => {
                let day = i8::try_from(n).map_err(|e| ValidationError::new(field, e.to_string()))?;
                month_days.push(day);
            }
            (OrdinalChoice::EveryDay, DayChoice::Weekday(index)) if !by_month_day => {
                weekdays.push(Weekday::try_new(i32::from(index), None)?);
            }
            (OrdinalChoice::Nth(n), DayChoice::Weekday(index)) if !by_month_day => {
                weekdays.push(Weekday::try_new(i32::from(index), Some(n))?);
            }
            _ => {
                tracing::debug!(field, ?ordinal, ?day, "Ignoring pair of the other kind");
            }
        }
    }
    Ok((weekdays, month_days))
}
