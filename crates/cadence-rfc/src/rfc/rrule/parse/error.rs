//! Recurrence text parsing error types.

use std::fmt;

/// Result type for recurrence parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Error type for recurrence parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Kind of error.
    pub kind: ParseErrorKind,
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Column number where the error occurred (1-based).
    pub column: usize,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            line,
            column,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at line {}, column {}", self.kind, self.line, self.column)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Kinds of parse errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Invalid content line format.
    InvalidContentLine,
    /// Invalid date format.
    InvalidDate,
    /// Invalid recurrence rule.
    InvalidRRule,
    /// Invalid frequency.
    InvalidFrequency,
    /// Frequency finer than a day.
    UnsupportedFrequency,
    /// Invalid weekday.
    InvalidWeekday,
    /// Invalid integer value.
    InvalidInteger,
    /// Rule part outside the supported subset (BYHOUR and friends).
    UnsupportedPart,
    /// Rule part not defined by RFC 5545.
    UnknownPart,
    /// Rule part given twice.
    DuplicatePart,
    /// No FREQ part.
    MissingFrequency,
    /// No DTSTART line and no default start.
    MissingStart,
    /// More than one RRULE line.
    MultipleRules,
    /// EXRULE, RDATE or EXDATE.
    UnsupportedProperty,
    /// UNTIL and COUNT are mutually exclusive.
    UntilCountConflict,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidContentLine => write!(f, "invalid content line format"),
            Self::InvalidDate => write!(f, "invalid date format"),
            Self::InvalidRRule => write!(f, "invalid recurrence rule"),
            Self::InvalidFrequency => write!(f, "invalid frequency"),
            Self::UnsupportedFrequency => write!(f, "unsupported frequency"),
            Self::InvalidWeekday => write!(f, "invalid weekday"),
            Self::InvalidInteger => write!(f, "invalid integer value"),
            Self::UnsupportedPart => write!(f, "unsupported rule part"),
            Self::UnknownPart => write!(f, "unknown rule part"),
            Self::DuplicatePart => write!(f, "duplicate rule part"),
            Self::MissingFrequency => write!(f, "missing FREQ"),
            Self::MissingStart => write!(f, "missing DTSTART"),
            Self::MultipleRules => write!(f, "multiple RRULE lines"),
            Self::UnsupportedProperty => write!(f, "unsupported property"),
            Self::UntilCountConflict => write!(f, "UNTIL and COUNT are mutually exclusive"),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
