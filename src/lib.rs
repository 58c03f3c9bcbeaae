//! Client-side query controller for an Icelandic word-frequency dashboard.
//!
//! The crate owns the path from raw UI state (word list + date range) to a
//! rendered frequency chart: building request parameters, keeping at most
//! one network request in flight, cancelling stale ones, and feeding the
//! response to the chart surface without flicker or out-of-order updates.
//! Page layout, server-side aggregation and the concrete chart widget stay
//! behind trait seams.

pub mod chart;
pub mod dashboard;
pub mod daterange;
pub mod error;
pub mod query;
pub mod settings;
pub mod stats;

pub use chart::{ChartAdapter, ChartDataset, ChartSeries, ChartSurface};
pub use dashboard::Dashboard;
pub use daterange::{DateRange, DateRangeLocale, DateRangeSelector, QuickRange, RANGE_SEPARATOR};
pub use error::QueryError;
pub use query::{
    FrequencyResponse, HttpFrequencyClient, QueryController, QueryEvent, RequestDescriptor,
    WordFrequencyApi, WordInput, WordQuery,
};
pub use settings::{DashboardSettings, SettingsStore};

/// Initialize logging from the environment (reads RUST_LOG).
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
