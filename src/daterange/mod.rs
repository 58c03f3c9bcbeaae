pub mod locale;
pub mod selector;

/// Fixed separator joining the two dates in the raw range string.
pub const RANGE_SEPARATOR: &str = " - ";

pub use locale::DateRangeLocale;
pub use selector::{DateRange, DateRangeSelector, QuickRange};
