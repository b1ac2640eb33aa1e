use std::io::Write;

use anyhow::{Context as _, Result};
use cadence_rfc::rfc::rrule::{Recurrence, WizardFields};

use crate::context::Context;

/// Prints the rule as a 13-element wizard JSON array.
///
/// ## Errors
/// Returns an error if serialization or writing to `out` fails.
pub fn encode(rule: &Recurrence, out: &mut impl Write) -> Result<()> {
    let json = serde_json::to_string(&rule.to_wizard())?;
    writeln!(out, "{json}")?;
    Ok(())
}

/// Reads a wizard JSON array and prints the rule's canonical text.
///
/// The rule takes the configured week start, and the text is written so
/// that reading it back with the same configuration gives the same rule.
///
/// ## Errors
/// Returns an error if the array is malformed, does not describe a valid
/// rule, or writing to `out` fails.
pub fn decode(context: &Context, json: &str, out: &mut impl Write) -> Result<()> {
    let fields: WizardFields =
        serde_json::from_str(json).with_context(|| format!("Invalid wizard array {json}"))?;
    let rule = Recurrence::from_wizard_with_week_start(&fields, context.week_start)?;
    writeln!(out, "{}", context.rule_text(&rule))?;
    Ok(())
}
