//! Round-trip tests for rule text and the wizard form.
//!
//! Canonical text must survive parse then serialize unchanged, and every
//! rule the form can show must survive encode then decode.

use super::fixtures::{
    ALL, EVERY_DAY_IN_JANUARY, FIRST_AND_FIFTEENTH, FORTNIGHTLY_SUNDAY_WKST, SECOND_TUESDAY,
    WEEKLY_MWF,
};
use crate::rfc::rrule::core::{Recurrence, Weekday};
use crate::rfc::rrule::parse::{ParseOptions, parse};
use crate::rfc::rrule::wizard::WizardFields;

/// Parse, serialize, parse again and compare both text and rule.
fn round_trip(input: &str) -> Result<(), String> {
    let first = parse(input, &ParseOptions::default())
        .map_err(|e| format!("First parse failed: {e}"))?;
    let serialized = first.to_string();
    if serialized != input {
        return Err(format!("Not canonical:\n{input}\nvs\n{serialized}"));
    }
    let second = parse(&serialized, &ParseOptions::default())
        .map_err(|e| format!("Second parse failed: {e}\n{serialized}"))?;
    if first != second {
        return Err(format!("Rule mismatch: {first:?} vs {second:?}"));
    }
    Ok(())
}

fn wizard_round_trip(input: &str) -> Result<(), String> {
    let rule: Recurrence = input.parse().map_err(|e| format!("Parse failed: {e}"))?;
    let json = serde_json::to_string(&rule.to_wizard())
        .map_err(|e| format!("Encode failed: {e}"))?;
    let fields: WizardFields =
        serde_json::from_str(&json).map_err(|e| format!("Decode failed: {e}\n{json}"))?;
    let again = Recurrence::from_wizard(&fields).map_err(|e| format!("Build failed: {e}"))?;
    if again != rule {
        return Err(format!("Rule mismatch via {json}: {rule} vs {again}"));
    }
    Ok(())
}

#[test_log::test]
fn round_trip_canonical_fixtures() {
    for input in ALL {
        round_trip(input).unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test_log::test]
fn round_trip_with_sunday_default_week_start() {
    let options = ParseOptions {
        default_anchor: None,
        default_week_start: Weekday::SUNDAY,
    };
    let monday_fortnights = "DTSTART:19970805\nRRULE:FREQ=WEEKLY;INTERVAL=2;WKST=MO;BYDAY=TU,SU";
    for input in [monday_fortnights, FORTNIGHTLY_SUNDAY_WKST, WEEKLY_MWF] {
        let first = parse(input, &options).unwrap();
        let text = first.canonical_text(options.default_week_start);
        let second = parse(&text, &options).unwrap();
        assert_eq!(second, first, "{text}");
    }

    let rule = parse(monday_fortnights, &options).unwrap();
    assert_eq!(rule.week_start(), Weekday::MONDAY);
    let again = parse(&rule.canonical_text(Weekday::SUNDAY), &options).unwrap();
    assert_eq!(
        again.iter().take(4).map(|d| d.to_string()).collect::<Vec<_>>(),
        ["1997-08-05", "1997-08-10", "1997-08-19", "1997-08-24"]
    );

    let implied_sunday = parse(
        "DTSTART:19970805\nRRULE:FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,SU",
        &options,
    )
    .unwrap();
    let portable = implied_sunday.canonical_text(Weekday::SUNDAY);
    assert_eq!(
        parse(&portable, &ParseOptions::default()).unwrap(),
        implied_sunday
    );
}

#[test]
fn round_trip_lowercase_input_becomes_canonical() {
    let rule: Recurrence = "dtstart:20090807\nrrule:freq=weekly;byday=fr,mo,we"
        .parse()
        .unwrap();
    assert_eq!(rule.to_string(), WEEKLY_MWF);
}

#[test]
fn round_trip_crlf_and_reordered_parts() {
    let rule: Recurrence = "DTSTART:20210101\r\nRRULE:BYMONTHDAY=15,1;FREQ=MONTHLY\r\n"
        .parse()
        .unwrap();
    assert_eq!(rule.to_string(), FIRST_AND_FIFTEENTH);
}

#[test_log::test]
fn round_trip_through_wizard() {
    for input in [
        WEEKLY_MWF,
        SECOND_TUESDAY,
        FIRST_AND_FIFTEENTH,
        EVERY_DAY_IN_JANUARY,
        "DTSTART:20120501\nRRULE:FREQ=DAILY;INTERVAL=3;UNTIL=20120505",
        "DTSTART:20200229\nRRULE:FREQ=YEARLY;INTERVAL=4;COUNT=3;BYMONTH=2;BYMONTHDAY=29",
    ] {
        wizard_round_trip(input).unwrap_or_else(|e| panic!("{e}"));
    }
}

#[test]
fn wizard_drops_what_the_form_cannot_show() {
    let rule: Recurrence = FORTNIGHTLY_SUNDAY_WKST.parse().unwrap();
    let again = Recurrence::from_wizard(&rule.to_wizard()).unwrap();
    assert_eq!(again.week_start(), crate::rfc::rrule::core::Weekday::MONDAY);
    assert_eq!(again.by_weekday(), rule.by_weekday());
    assert_eq!(again.count(), Some(4));

    let kept = Recurrence::from_wizard_with_week_start(&rule.to_wizard(), rule.week_start())
        .unwrap();
    assert_eq!(kept, rule);
}
