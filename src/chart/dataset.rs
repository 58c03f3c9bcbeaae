//! Wire-shape models for the chart rendering surface.
//!
//! The shape mirrors what the line/bar chart consumes:
//! `{labels, datasets: [{label, data, ...style}]}`.

use serde::{Deserialize, Serialize};

/// One plotted series plus its optional style attributes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Complete dataset handed to the rendering surface. Replaced wholesale on
/// every successful query; never patched incrementally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartSeries>,
}

impl ChartDataset {
    /// Empty shell drawn before any data exists.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}
