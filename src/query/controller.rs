use std::sync::{Arc, RwLock};

use log::{debug, info, warn};
use tokio::sync::{broadcast, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::chart::{ChartAdapter, ChartDataset};
use crate::error::QueryError;

use super::builder::build_descriptor;
use super::client::WordFrequencyApi;
use super::descriptor::RequestDescriptor;

/// Shared state of the word-input field. The controller reads the raw value
/// on submit and writes the server-canonicalized value back on success.
#[derive(Clone, Default)]
pub struct WordInput {
    value: Arc<RwLock<String>>,
}

impl WordInput {
    pub fn new(initial: &str) -> Self {
        Self {
            value: Arc::new(RwLock::new(initial.to_string())),
        }
    }

    pub fn get(&self) -> String {
        self.value.read().unwrap().clone()
    }

    pub fn set(&self, value: String) {
        *self.value.write().unwrap() = value;
    }
}

/// Per-cycle lifecycle notifications, one receiver per interested host.
#[derive(Debug, Clone)]
pub enum QueryEvent {
    Started { id: Uuid },
    Rendered { id: Uuid },
    Failed { id: Uuid, message: String },
    Superseded { id: Uuid },
}

/// The single in-flight slot. Acquired on submit, released when the request
/// resolves or is superseded.
struct InFlightRequest {
    id: Uuid,
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Owns the query lifecycle: at most one outstanding request, cancellation
/// of the previous request strictly before the next one is sent, and
/// token-checked side effects so a superseded response can never touch the
/// chart or the word input.
pub struct QueryController<A> {
    api: Arc<A>,
    inflight: Arc<Mutex<Option<InFlightRequest>>>,
    chart: Arc<Mutex<ChartAdapter>>,
    words: WordInput,
    progress_tx: Arc<watch::Sender<bool>>,
    events_tx: broadcast::Sender<QueryEvent>,
}

impl<A> Clone for QueryController<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            inflight: Arc::clone(&self.inflight),
            chart: Arc::clone(&self.chart),
            words: self.words.clone(),
            progress_tx: Arc::clone(&self.progress_tx),
            events_tx: self.events_tx.clone(),
        }
    }
}

impl<A: WordFrequencyApi> QueryController<A> {
    pub fn new(api: A, chart: ChartAdapter, words: WordInput) -> Self {
        let (progress_tx, _) = watch::channel(false);
        let (events_tx, _) = broadcast::channel(64);

        Self {
            api: Arc::new(api),
            inflight: Arc::new(Mutex::new(None)),
            chart: Arc::new(Mutex::new(chart)),
            words,
            progress_tx: Arc::new(progress_tx),
            events_tx,
        }
    }

    pub fn words(&self) -> &WordInput {
        &self.words
    }

    /// True exactly while a request is in flight.
    pub fn progress(&self) -> watch::Receiver<bool> {
        self.progress_tx.subscribe()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<QueryEvent> {
        self.events_tx.subscribe()
    }

    /// Last dataset handed to the rendering surface.
    pub async fn current_dataset(&self) -> Option<ChartDataset> {
        self.chart.lock().await.current_dataset().cloned()
    }

    /// Draw the empty chart shell. Valid before any data exists.
    pub async fn render_blank(&self) {
        self.chart.lock().await.render(None);
    }

    /// Build a descriptor from raw UI state and submit it. A malformed
    /// range string is a no-op: the error is returned, nothing else moves.
    pub async fn query(&self, words_raw: &str, range_raw: &str) -> Result<Uuid, QueryError> {
        let descriptor = build_descriptor(words_raw, range_raw)?;
        Ok(self.submit(descriptor).await)
    }

    /// Issue a request for the given descriptor, cancelling any outstanding
    /// one first so the transport never carries two requests at once.
    pub async fn submit(&self, descriptor: RequestDescriptor) -> Uuid {
        let mut slot = self.inflight.lock().await;

        if let Some(prev) = slot.take() {
            prev.cancel.cancel();
            prev.handle.abort();
            debug!("request {} superseded", prev.id);
            let _ = self.events_tx.send(QueryEvent::Superseded { id: prev.id });
        }

        let id = Uuid::new_v4();
        let cancel = CancellationToken::new();
        self.progress_tx.send_replace(true);
        let _ = self.events_tx.send(QueryEvent::Started { id });
        info!(
            "query {id}: words={:?} range={} - {}",
            descriptor.words.as_str(),
            descriptor.date_from,
            descriptor.date_to
        );

        let api = Arc::clone(&self.api);
        let inflight = Arc::clone(&self.inflight);
        let chart = Arc::clone(&self.chart);
        let words = self.words.clone();
        let progress_tx = Arc::clone(&self.progress_tx);
        let events_tx = self.events_tx.clone();
        let token = cancel.clone();

        let handle = tokio::spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => {
                    debug!("query {id} cancelled before completion");
                    return;
                }
                result = api.word_frequency(&descriptor) => result,
            };

            // A response may only touch shared state while its request
            // still owns the in-flight slot; out-of-order responses are
            // discarded here. The slot lock stays held until every side
            // effect is applied, so a concurrent submit cannot find the
            // slot empty and have its progress flag clobbered by this
            // request's tail.
            let mut slot = inflight.lock().await;
            let still_current =
                matches!(&*slot, Some(req) if req.id == id) && !token.is_cancelled();
            if !still_current {
                debug!("discarding out-of-order response for query {id}");
                return;
            }

            match result {
                Ok(response) => {
                    chart.lock().await.render(Some(response.data));
                    words.set(response.words);
                    progress_tx.send_replace(false);
                    let _ = events_tx.send(QueryEvent::Rendered { id });
                }
                Err(err) => {
                    // Fail soft: the previous chart content stays visible.
                    warn!("query {id} failed: {err}");
                    progress_tx.send_replace(false);
                    let _ = events_tx.send(QueryEvent::Failed {
                        id,
                        message: err.to_string(),
                    });
                }
            }

            *slot = None;
        });

        *slot = Some(InFlightRequest { id, cancel, handle });
        id
    }
}
