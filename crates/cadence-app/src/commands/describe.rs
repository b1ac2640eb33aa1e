use std::io::Write;

use anyhow::Result;
use cadence_rfc::rfc::rrule::Recurrence;

/// Prints the rule's sentence, shifted by `offset` days for `num_days` days.
///
/// ## Errors
/// Returns an error if writing to `out` fails.
pub fn run(rule: &Recurrence, offset: i32, num_days: u32, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", rule.describe_shifted(offset, num_days))?;
    Ok(())
}
