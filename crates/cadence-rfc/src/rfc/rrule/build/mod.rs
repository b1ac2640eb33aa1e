//! Serializing a `Recurrence` to canonical text.

mod serializer;

pub use serializer::format_date;
