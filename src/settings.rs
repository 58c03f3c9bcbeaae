use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSettings {
    /// Word-frequency query endpoint.
    pub endpoint_url: String,
    /// Word list pre-filled into the input field on first load.
    pub default_words: String,
    /// Length of the default date range, inclusive of today.
    pub default_range_days: u32,
    /// Longest range the date widget accepts, in days between endpoints.
    pub max_span_days: u32,
    /// Days covered by the aggregate statistics panels.
    pub stats_period_days: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            endpoint_url: "https://greynir.is/wordfreq".into(),
            default_words: "veira:kvk, smit:hk".into(),
            default_range_days: 90,
            max_span_days: 365,
            stats_period_days: crate::stats::DEFAULT_STATS_PERIOD_DAYS,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<DashboardSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            DashboardSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn current(&self) -> DashboardSettings {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, settings: DashboardSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            *guard = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &DashboardSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.current(), DashboardSettings::default());
    }

    #[test]
    fn update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        let mut settings = store.current();
        settings.default_words = "bóla".into();
        settings.default_range_days = 30;
        store.update(settings.clone()).unwrap();

        let reloaded = SettingsStore::new(path).unwrap();
        assert_eq!(reloaded.current(), settings);
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.current(), DashboardSettings::default());
    }
}
