//! Human-readable descriptions of recurrence rules.

mod sentence;
pub mod words;
