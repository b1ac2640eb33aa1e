pub mod describe;
pub mod occurrences;
pub mod overrides;
pub mod wizard;

/// Occurrences printed when no end date is given.
pub const DEFAULT_LIMIT: usize = 20;
