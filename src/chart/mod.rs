pub mod adapter;
pub mod dataset;

pub use adapter::{ChartAdapter, ChartSurface};
pub use dataset::{ChartDataset, ChartSeries};
