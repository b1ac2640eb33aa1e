use std::io::Write;

use anyhow::Result;
use cadence_rfc::rfc::rrule::Recurrence;
use chrono::NaiveDate;

use super::DEFAULT_LIMIT;

/// Prints occurrence dates, one per line.
///
/// With `to` the range is `from..to` (both ends included unless `exclusive`);
/// without it at most `limit` dates from `from` are printed. `from` defaults
/// to the rule's anchor.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn run(
    rule: &Recurrence,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    exclusive: bool,
    limit: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    let from = from.unwrap_or_else(|| rule.anchor());
    let dates: Vec<NaiveDate> = match to {
        Some(to) => rule
            .occurrences_between(from, to, !exclusive)
            .take(limit.unwrap_or(usize::MAX))
            .collect(),
        None => rule
            .iter()
            .filter(|date| if exclusive { *date > from } else { *date >= from })
            .take(limit.unwrap_or(DEFAULT_LIMIT))
            .collect(),
    };
    tracing::debug!(count = dates.len(), %from, ?to, "Occurrences listed");

    for date in dates {
        writeln!(out, "{date}")?;
    }
    Ok(())
}
