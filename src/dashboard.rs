use anyhow::Result;
use chrono::Utc;
use log::warn;
use tokio::task::JoinHandle;

use crate::chart::{ChartAdapter, ChartSurface};
use crate::daterange::{DateRange, DateRangeLocale, DateRangeSelector};
use crate::query::{QueryController, WordFrequencyApi, WordInput};
use crate::settings::DashboardSettings;

/// Wires the date-range selector, the parameter builder and the query
/// controller into the frequency-chart pipeline. The host UI keeps a
/// `Dashboard` alive for the lifetime of the page.
pub struct Dashboard<A> {
    selector: DateRangeSelector,
    controller: QueryController<A>,
    locale: DateRangeLocale,
}

impl<A: WordFrequencyApi> Dashboard<A> {
    pub fn new(
        api: A,
        surface: Box<dyn ChartSurface>,
        settings: &DashboardSettings,
    ) -> Result<Self> {
        let today = Utc::now().date_naive();
        let initial = DateRange::last_days(settings.default_range_days, today);
        let selector = DateRangeSelector::new(initial, settings.max_span_days)?;
        let words = WordInput::new(&settings.default_words);
        let controller = QueryController::new(api, ChartAdapter::new(surface), words);

        Ok(Self {
            selector,
            controller,
            locale: DateRangeLocale::icelandic(),
        })
    }

    pub fn selector(&self) -> &DateRangeSelector {
        &self.selector
    }

    pub fn controller(&self) -> &QueryController<A> {
        &self.controller
    }

    /// Locale table handed to the date-range widget.
    pub fn locale(&self) -> &DateRangeLocale {
        &self.locale
    }

    /// Draw the empty chart shell, then issue the eager startup query with
    /// the default range and the pre-filled word list.
    pub async fn start(&self) {
        self.controller.render_blank().await;
        self.submit_current().await;
    }

    /// Resubmit with whatever the word field and the selector currently
    /// hold (Enter pressed in the word field).
    pub async fn submit_current(&self) {
        let words = self.controller.words().get();
        let range = self.selector.current_raw();
        if let Err(err) = self.controller.query(&words, &range).await {
            warn!("query skipped: {err}");
        }
    }

    /// Subscribe to committed range changes and resubmit on each one.
    /// Runs until the host aborts the handle.
    pub fn spawn_range_listener(&self) -> JoinHandle<()> {
        let mut changes = self.selector.subscribe();
        let controller = self.controller.clone();

        tokio::spawn(async move {
            while changes.changed().await.is_ok() {
                let range = changes.borrow_and_update().clone();
                let words = controller.words().get();
                if let Err(err) = controller.query(&words, &range).await {
                    warn!("query skipped: {err}");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
    use pretty_assertions::assert_eq;
    use tokio::time::timeout;

    use super::*;
    use crate::chart::{ChartDataset, ChartSeries};
    use crate::error::QueryError;
    use crate::query::{FrequencyResponse, QueryEvent, RequestDescriptor};

    struct NullSurface;

    impl ChartSurface for NullSurface {
        fn mount(&mut self) {}
        fn update(&mut self, _dataset: &ChartDataset) {}
    }

    /// Fake endpoint that answers immediately and records every descriptor.
    #[derive(Clone, Default)]
    struct RecordingApi {
        calls: Arc<Mutex<Vec<RequestDescriptor>>>,
    }

    impl WordFrequencyApi for RecordingApi {
        async fn word_frequency(
            &self,
            descriptor: &RequestDescriptor,
        ) -> Result<FrequencyResponse, QueryError> {
            self.calls.lock().unwrap().push(descriptor.clone());
            Ok(FrequencyResponse {
                data: ChartDataset {
                    labels: vec![],
                    datasets: vec![ChartSeries::default()],
                },
                words: descriptor.words.as_str().to_string(),
            })
        }
    }

    async fn wait_rendered(rx: &mut tokio::sync::broadcast::Receiver<QueryEvent>) {
        loop {
            let event = timeout(Duration::from_secs(1), rx.recv())
                .await
                .expect("timed out waiting for render")
                .expect("event channel closed");
            if matches!(event, QueryEvent::Rendered { .. }) {
                return;
            }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[tokio::test]
    async fn startup_issues_one_query_with_defaults() {
        let api = RecordingApi::default();
        let calls = api.calls.clone();
        let dashboard =
            Dashboard::new(api, Box::new(NullSurface), &DashboardSettings::default()).unwrap();
        let mut events = dashboard.controller().subscribe();

        dashboard.start().await;
        wait_rendered(&mut events).await;

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].words.as_str(), "veira:kvk, smit:hk");

        let today = Utc::now().date_naive();
        assert_eq!(recorded[0].date_from, today - ChronoDuration::days(89));
        assert_eq!(recorded[0].date_to, today);
    }

    #[tokio::test]
    async fn committed_range_change_resubmits() {
        let api = RecordingApi::default();
        let calls = api.calls.clone();
        let dashboard =
            Dashboard::new(api, Box::new(NullSurface), &DashboardSettings::default()).unwrap();
        let mut events = dashboard.controller().subscribe();

        dashboard.start().await;
        wait_rendered(&mut events).await;

        let listener = dashboard.spawn_range_listener();
        dashboard
            .selector()
            .set_range(date("2024-01-01"), date("2024-01-10"))
            .unwrap();
        wait_rendered(&mut events).await;
        listener.abort();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[1].date_from, date("2024-01-01"));
        assert_eq!(recorded[1].date_to, date("2024-01-10"));
    }

    #[tokio::test]
    async fn word_input_holds_canonical_value_after_start() {
        let api = RecordingApi::default();
        let dashboard =
            Dashboard::new(api, Box::new(NullSurface), &DashboardSettings::default()).unwrap();
        let mut events = dashboard.controller().subscribe();

        dashboard.start().await;
        wait_rendered(&mut events).await;

        // The fake echoes the submitted list back unchanged.
        assert_eq!(dashboard.controller().words().get(), "veira:kvk, smit:hk");
    }
}
