//! Models and dataset shaping for the aggregate statistics panels shown
//! next to the frequency chart: per-source article counts, parse success
//! rate, name/gender distribution and top authors. All numbers come from
//! the server; this module only reshapes them for the rendering surfaces.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartDataset, ChartSeries};

/// Stats period shown by default, clamped server-side to the maximum.
pub const DEFAULT_STATS_PERIOD_DAYS: u32 = 10;
pub const MAX_STATS_PERIOD_DAYS: u32 = 30;

const FALLBACK_SOURCE_COLOR: &str = "#000";

/// Fixed bar color per news source.
pub fn source_color(source: &str) -> &'static str {
    match source {
        "Kjarninn" => "#f17030",
        "RÚV" => "#dcdcdc",
        "Vísir" => "#3d6ab9",
        "Morgunblaðið" => "#020b75",
        "Eyjan" => "#ca151c",
        "Kvennablaðið" => "#900000",
        "Stundin" => "#ee4420",
        "Hringbraut" => "#44607a",
        "Fréttablaðið" => "#002a61",
        "Hagstofa Íslands" => "#818285",
        _ => FALLBACK_SOURCE_COLOR,
    }
}

/// One labelled series block as served by the stats endpoint, plus the
/// period average the panel header displays.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartSeries>,
    #[serde(default)]
    pub avg: f64,
}

/// The two chart blocks of the stats page: articles scraped per source
/// (stacked bars) and parse-success percentage (line).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsCharts {
    pub scraped: StatsSeries,
    pub parsed: StatsSeries,
}

/// Grammatical genders used in name statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Kvk,
    Kk,
    Hk,
}

/// Counts of person-name mentions by gender.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GenderTotals {
    pub kvk: u64,
    pub kk: u64,
    pub hk: u64,
}

impl GenderTotals {
    pub fn total(&self) -> u64 {
        self.kvk + self.kk + self.hk
    }

    /// Share of one gender in percent, 0 when nothing has been counted.
    pub fn percent(&self, gender: Gender) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let count = match gender {
            Gender::Kvk => self.kvk,
            Gender::Kk => self.kk,
            Gender::Hk => self.hk,
        };
        (count as f64 / total as f64) * 100.0
    }
}

/// One row of the top-authors table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthorEntry {
    pub name: String,
    pub gender: Gender,
    pub perc: f64,
}

/// Per-source article/sentence/parse totals for the overview table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceTotals {
    pub source: String,
    pub articles: u64,
    pub sentences: u64,
    pub parsed: u64,
}

impl SourceTotals {
    /// Parse success as a percentage of sentences, 0 for empty sources.
    pub fn parse_percent(&self) -> f64 {
        if self.sentences == 0 {
            return 0.0;
        }
        (self.parsed as f64 / self.sentences as f64) * 100.0
    }
}

/// Bar-chart dataset for the scraped-articles panel. Series missing a
/// color are filled in from the fixed per-source table.
pub fn scraped_dataset(series: &StatsSeries) -> ChartDataset {
    let datasets = series
        .datasets
        .iter()
        .map(|s| {
            let mut s = s.clone();
            if s.background_color.is_none() {
                let color = s
                    .label
                    .as_deref()
                    .map(source_color)
                    .unwrap_or(FALLBACK_SOURCE_COLOR);
                s.background_color = Some(color.to_string());
            }
            s
        })
        .collect();

    ChartDataset {
        labels: series.labels.clone(),
        datasets,
    }
}

/// Line-chart dataset for the parse-success panel.
pub fn parsed_dataset(series: &StatsSeries) -> ChartDataset {
    ChartDataset {
        labels: series.labels.clone(),
        datasets: series.datasets.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_sources_have_fixed_colors() {
        assert_eq!(source_color("RÚV"), "#dcdcdc");
        assert_eq!(source_color("Morgunblaðið"), "#020b75");
        assert_eq!(source_color("Óþekkt miðill"), "#000");
    }

    #[test]
    fn gender_percentages_sum_to_hundred() {
        let totals = GenderTotals {
            kvk: 250,
            kk: 600,
            hk: 150,
        };
        assert_eq!(totals.total(), 1000);
        assert_eq!(totals.percent(Gender::Kvk), 25.0);
        assert_eq!(totals.percent(Gender::Kk), 60.0);
        assert_eq!(totals.percent(Gender::Hk), 15.0);
    }

    #[test]
    fn empty_gender_totals_yield_zero_percent() {
        let totals = GenderTotals::default();
        assert_eq!(totals.percent(Gender::Kvk), 0.0);
    }

    #[test]
    fn scraped_dataset_fills_missing_source_colors() {
        let series = StatsSeries {
            labels: vec!["mánudagur".into(), "þriðjudagur".into()],
            datasets: vec![
                ChartSeries {
                    label: Some("Kjarninn".into()),
                    data: vec![12.0, 9.0],
                    ..Default::default()
                },
                ChartSeries {
                    label: Some("Vísir".into()),
                    data: vec![30.0, 27.0],
                    background_color: Some("#111111".into()),
                    ..Default::default()
                },
            ],
            avg: 39.0,
        };

        let dataset = scraped_dataset(&series);
        assert_eq!(
            dataset.datasets[0].background_color.as_deref(),
            Some("#f17030")
        );
        // Server-supplied colors win.
        assert_eq!(
            dataset.datasets[1].background_color.as_deref(),
            Some("#111111")
        );
    }

    #[test]
    fn source_totals_parse_percent() {
        let totals = SourceTotals {
            source: "Kjarninn".into(),
            articles: 40,
            sentences: 200,
            parsed: 180,
        };
        assert_eq!(totals.parse_percent(), 90.0);
        assert_eq!(SourceTotals::default().parse_percent(), 0.0);
    }

    #[test]
    fn decodes_stats_charts_payload() {
        let json = r##"{
            "scraped": {
                "labels": ["föstudagur"],
                "datasets": [{"label": "RÚV", "backgroundColor": "#dcdcdc", "data": [42.0]}],
                "avg": 42.0
            },
            "parsed": {
                "labels": ["föstudagur"],
                "datasets": [{"data": [91.3]}],
                "avg": 91.3
            }
        }"##;

        let charts: StatsCharts = serde_json::from_str(json).unwrap();
        assert_eq!(charts.scraped.avg, 42.0);
        assert_eq!(charts.parsed.datasets[0].data, vec![91.3]);
    }
}
