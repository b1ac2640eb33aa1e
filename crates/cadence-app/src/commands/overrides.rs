use std::io::Write;

use anyhow::Result;
use cadence_rfc::rfc::rrule::Recurrence;
use chrono::NaiveDate;

use crate::context::Context;

/// Prints the dates offered for overriding single occurrences around `today`.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn run(
    context: &Context,
    rule: &Recurrence,
    today: NaiveDate,
    out: &mut impl Write,
) -> Result<()> {
    let window = context.override_window(today);
    tracing::info!(start = %window.start, end = %window.end, "Override window");
    for date in rule.override_dates(window) {
        writeln!(out, "{date}")?;
    }
    Ok(())
}
