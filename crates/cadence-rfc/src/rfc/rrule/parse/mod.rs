//! Parsing canonical recurrence text.

mod error;
mod parser;
mod values;

pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use parser::{ParseOptions, parse, parse_with_default_anchor};
