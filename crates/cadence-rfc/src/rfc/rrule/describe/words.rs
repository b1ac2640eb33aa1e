//! English words used in rule descriptions.

use chrono::NaiveDate;

pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const WEEKDAY_NAMES_PLURAL: [&str; 7] = [
    "Mondays",
    "Tuesdays",
    "Wednesdays",
    "Thursdays",
    "Fridays",
    "Saturdays",
    "Sundays",
];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ORDINAL_WORDS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

const NUMBER_WORDS: [&str; 11] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Name of month `month` (1-based); months outside 1..=12 wrap around.
#[must_use]
pub fn month_name(month: i32) -> &'static str {
    let index = usize::try_from((month - 1).rem_euclid(12)).unwrap_or(0);
    MONTH_NAMES[index]
}

/// Upper-cases the first character.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Ordinal word: "first".."fifth", "last", "penultimate", else "6th", "21st".
#[must_use]
pub fn to_ordinal(n: i32) -> String {
    match n {
        -1 => "last".to_string(),
        -2 => "penultimate".to_string(),
        1..=5 => ORDINAL_WORDS[usize::try_from(n - 1).unwrap_or(0)].to_string(),
        _ => {
            let magnitude = n.unsigned_abs();
            let suffix = match (magnitude % 10, magnitude % 100) {
                (_, 11..=13) => "th",
                (1, _) => "st",
                (2, _) => "nd",
                (3, _) => "rd",
                _ => "th",
            };
            format!("{n}{suffix}")
        }
    }
}

/// [`to_ordinal`] with a leading "the".
#[must_use]
pub fn to_the_ordinal(n: i32) -> String {
    format!("the {}", to_ordinal(n))
}

/// Joins items for reading: "a", "a and b", "a, b and c".
#[must_use]
pub fn hr_join<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Number as a word up to ten, digits beyond.
#[must_use]
pub fn number_word(n: u32) -> String {
    usize::try_from(n)
        .ok()
        .and_then(|index| NUMBER_WORDS.get(index))
        .map_or_else(|| n.to_string(), |word| (*word).to_string())
}

/// "The day before", "Two days after" and so on; empty for zero.
#[must_use]
pub fn days_offset_phrase(offset: i32) -> String {
    let direction = if offset < 0 { "before" } else { "after" };
    match offset.unsigned_abs() {
        0 => String::new(),
        1 => format!("The day {direction}"),
        n => format!("{} days {direction}", capitalize(&number_word(n))),
    }
}

/// Short human date, e.g. "5 May 2012".
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}
