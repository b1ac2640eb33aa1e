use cadence_rfc::rfc::rrule::Recurrence;
use chrono::NaiveDate;

pub struct OccurrenceCase {
    pub name: &'static str,
    pub rule: &'static str,
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub limit: usize,
    pub after: Option<&'static str>,
    pub before: Option<&'static str>,
}

#[expect(clippy::too_many_lines)]
pub fn occurrence_cases() -> Vec<OccurrenceCase> {
    vec![
        OccurrenceCase {
            name: "daily_basic",
            rule: "DTSTART:20120201\nRRULE:FREQ=DAILY;COUNT=3",
            expected: Some(&["2012-02-01", "2012-02-02", "2012-02-03"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "daily_interval",
            rule: "DTSTART:20210101\nRRULE:FREQ=DAILY;INTERVAL=10;COUNT=5",
            expected: Some(&[
                "2021-01-01",
                "2021-01-11",
                "2021-01-21",
                "2021-01-31",
                "2021-02-10",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "weekly_basic",
            rule: "DTSTART:19970902\nRRULE:FREQ=WEEKLY;COUNT=3;BYDAY=TU,TH",
            expected: Some(&["1997-09-02", "1997-09-04", "1997-09-09"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "weekly_includes_anchor_weekday",
            rule: "DTSTART:20090807\nRRULE:FREQ=WEEKLY;COUNT=3;BYDAY=MO",
            expected: Some(&["2009-08-07", "2009-08-10", "2009-08-14"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "weekly_every_other_until",
            rule: "DTSTART:19970902\nRRULE:FREQ=WEEKLY;INTERVAL=2;UNTIL=19971224;BYDAY=TU",
            expected: None,
            expected_len: Some(9),
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "weekly_window",
            rule: "DTSTART:20090807\nRRULE:FREQ=WEEKLY;BYDAY=MO,WE,FR",
            expected: Some(&["2009-09-02", "2009-09-04", "2009-09-07"]),
            expected_len: None,
            limit: 100,
            after: Some("2009-09-01"),
            before: Some("2009-09-07"),
        },
        OccurrenceCase {
            name: "monthly_basic",
            rule: "DTSTART:20120101\nRRULE:FREQ=MONTHLY;COUNT=3;BYMONTHDAY=1",
            expected: Some(&["2012-01-01", "2012-02-01", "2012-03-01"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "monthly_skips_short_months",
            rule: "DTSTART:20210131\nRRULE:FREQ=MONTHLY;COUNT=4",
            expected: Some(&["2021-01-31", "2021-03-31", "2021-05-31", "2021-07-31"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "monthly_last_day",
            rule: "DTSTART:20210131\nRRULE:FREQ=MONTHLY;COUNT=4;BYMONTHDAY=-1",
            expected: Some(&["2021-01-31", "2021-02-28", "2021-03-31", "2021-04-30"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_first_friday",
            rule: "DTSTART:19970905\nRRULE:FREQ=MONTHLY;COUNT=10;BYDAY=+1FR",
            expected: Some(&[
                "1997-09-05",
                "1997-10-03",
                "1997-11-07",
                "1997-12-05",
                "1998-01-02",
                "1998-02-06",
                "1998-03-06",
                "1998-04-03",
                "1998-05-01",
                "1998-06-05",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_second_to_last_monday",
            rule: "DTSTART:19970922\nRRULE:FREQ=MONTHLY;COUNT=6;BYDAY=-2MO",
            expected: Some(&[
                "1997-09-22",
                "1997-10-20",
                "1997-11-17",
                "1997-12-22",
                "1998-01-19",
                "1998-02-16",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_third_of_tue_wed_thu",
            rule: "DTSTART:19970904\nRRULE:FREQ=MONTHLY;COUNT=3;BYSETPOS=3;BYDAY=TU,WE,TH",
            expected: Some(&["1997-09-04", "1997-10-07", "1997-11-06"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "monthly_selected_months",
            rule: "DTSTART:20210101\nRRULE:FREQ=MONTHLY;COUNT=6;BYMONTH=3,6;BYMONTHDAY=1,15",
            expected: Some(&[
                "2021-03-01",
                "2021-03-15",
                "2021-06-01",
                "2021-06-15",
                "2022-03-01",
                "2022-03-15",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "yearly_basic",
            rule: "DTSTART:20120101\nRRULE:FREQ=YEARLY;COUNT=3",
            expected: Some(&["2012-01-01", "2013-01-01", "2014-01-01"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_every_other_year_in_q1",
            rule: "DTSTART:19970310\nRRULE:FREQ=YEARLY;INTERVAL=2;COUNT=5;BYMONTH=1,2,3",
            expected: Some(&[
                "1997-03-10",
                "1999-01-10",
                "1999-02-10",
                "1999-03-10",
                "2001-01-10",
            ]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_year_days",
            rule: "DTSTART:19970101\nRRULE:FREQ=YEARLY;COUNT=4;BYYEARDAY=1,100,200,-1",
            expected: Some(&["1997-01-01", "1997-04-10", "1997-07-19", "1997-12-31"]),
            expected_len: None,
            limit: 100,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "rfc_every_day_in_jan",
            rule: "DTSTART:19980101\nRRULE:FREQ=YEARLY;UNTIL=20000131;BYDAY=MO,TU,WE,TH,FR,SA,SU;BYMONTH=1",
            expected: None,
            expected_len: Some(93),
            limit: 200,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "unbounded_rule_limited",
            rule: "DTSTART:20210112\nRRULE:FREQ=MONTHLY;BYDAY=+2TU",
            expected: None,
            expected_len: Some(24),
            limit: 24,
            after: None,
            before: None,
        },
        OccurrenceCase {
            name: "impossible_rule_is_empty",
            rule: "DTSTART:20210101\nRRULE:FREQ=MONTHLY;BYMONTH=2;BYMONTHDAY=30",
            expected: Some(&[]),
            expected_len: None,
            limit: 10,
            after: None,
            before: None,
        },
    ]
}

pub fn assert_case(case: &OccurrenceCase) {
    let rule: Recurrence = case
        .rule
        .parse()
        .unwrap_or_else(|err| panic!("Failed to parse {}: {}", case.name, err));

    let dates: Vec<NaiveDate> = match (case.after, case.before) {
        (Some(after), Some(before)) => rule
            .occurrences_between(parse_date(after), parse_date(before), true)
            .take(case.limit)
            .collect(),
        (Some(after), None) => rule
            .iter()
            .filter(|date| *date >= parse_date(after))
            .take(case.limit)
            .collect(),
        (None, Some(before)) => rule
            .iter()
            .take_while(|date| *date <= parse_date(before))
            .take(case.limit)
            .collect(),
        (None, None) => rule.iter().take(case.limit).collect(),
    };

    if let Some(expected) = case.expected {
        let expected: Vec<NaiveDate> = expected.iter().map(|value| parse_date(value)).collect();
        assert_eq!(dates, expected, "Case {} did not match", case.name);
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            dates.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }

    assert!(
        dates.windows(2).all(|pair| pair[0] < pair[1]),
        "Case {} is not strictly increasing",
        case.name
    );
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}
