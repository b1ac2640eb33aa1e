//! Settings and rule input shared by the commands.

use anyhow::{Context as _, Result};
use cadence_core::config::Settings;
use cadence_core::constants::{
    DEFAULT_OVERRIDE_FUTURE_DAYS, DEFAULT_OVERRIDE_PAST_DAYS, DEFAULT_WEEK_START,
};
use cadence_rfc::rfc::rrule::parse::{ParseOptions, parse};
use cadence_rfc::rfc::rrule::{OverrideWindow, Recurrence, Weekday};
use chrono::NaiveDate;

/// Defaults taken from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    pub week_start: Weekday,
    pub override_past_days: i64,
    pub override_future_days: i64,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            week_start: Weekday::new(DEFAULT_WEEK_START, None),
            override_past_days: DEFAULT_OVERRIDE_PAST_DAYS,
            override_future_days: DEFAULT_OVERRIDE_FUTURE_DAYS,
        }
    }
}

impl Context {
    /// ## Summary
    /// Builds the context from loaded settings.
    ///
    /// ## Errors
    /// Returns an error if the configured week start is not a weekday.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let options = ParseOptions::from_calendar(&settings.calendar)?;
        Ok(Self {
            week_start: options.default_week_start,
            override_past_days: settings.calendar.override_past_days,
            override_future_days: settings.calendar.override_future_days,
        })
    }

    /// ## Summary
    /// Parses a rule given on the command line.
    ///
    /// Literal `\n` sequences become line breaks, so a two-line rule fits in
    /// one shell argument. `start` is used when the text has no `DTSTART`.
    ///
    /// ## Errors
    /// Returns an error if the text is not a valid rule.
    pub fn parse_rule(&self, text: &str, start: Option<NaiveDate>) -> Result<Recurrence> {
        let text = text.replace("\\n", "\n");
        let options = ParseOptions {
            default_anchor: start,
            default_week_start: self.week_start,
        };
        parse(&text, &options).with_context(|| format!("Invalid rule {text:?}"))
    }

    /// Canonical text that [`Context::parse_rule`] reads back as `rule`.
    #[must_use]
    pub fn rule_text(&self, rule: &Recurrence) -> String {
        rule.canonical_text(self.week_start)
    }

    #[must_use]
    pub fn override_window(&self, today: NaiveDate) -> OverrideWindow {
        OverrideWindow::around(today, self.override_past_days, self.override_future_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_newlines_are_accepted() {
        let rule = Context::default()
            .parse_rule("DTSTART:20090807\\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR", None)
            .unwrap();
        assert_eq!(rule.by_weekday().len(), 3);
    }

    #[test]
    fn configured_week_start_applies_without_wkst() {
        let context = Context {
            week_start: Weekday::SUNDAY,
            ..Context::default()
        };
        let start = NaiveDate::from_ymd_opt(1997, 8, 5);
        let rule = context
            .parse_rule("FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,SU", start)
            .unwrap();
        assert_eq!(rule.week_start(), Weekday::SUNDAY);
        assert!(rule.to_string().contains("WKST=SU"));
    }

    #[test]
    fn rule_text_keeps_monday_under_sunday_config() {
        let context = Context {
            week_start: Weekday::SUNDAY,
            ..Context::default()
        };
        let rule = context
            .parse_rule(
                "DTSTART:19970805\\nRRULE:FREQ=WEEKLY;INTERVAL=2;WKST=MO;BYDAY=TU,SU",
                None,
            )
            .unwrap();
        let text = context.rule_text(&rule);
        assert!(text.contains("WKST=MO"));
        assert_eq!(context.parse_rule(&text, None).unwrap(), rule);
    }

    #[test]
    fn missing_start_is_reported() {
        let err = Context::default()
            .parse_rule("RRULE:FREQ=DAILY", None)
            .unwrap_err();
        assert!(format!("{err:#}").contains("DTSTART"));
    }
}
