use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::chart::ChartDataset;
use crate::error::QueryError;

use super::descriptor::RequestDescriptor;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Payload returned by the word-frequency endpoint. `words` carries the
/// server-canonicalized word list (tag inference applied), which the
/// controller echoes back into the input field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyResponse {
    pub data: ChartDataset,
    pub words: String,
}

/// The query endpoint seam. Production uses [`HttpFrequencyClient`]; tests
/// substitute controllable fakes.
pub trait WordFrequencyApi: Send + Sync + 'static {
    fn word_frequency(
        &self,
        descriptor: &RequestDescriptor,
    ) -> impl Future<Output = Result<FrequencyResponse, QueryError>> + Send;
}

/// HTTP client for the word-frequency endpoint. The descriptor is encoded
/// as `words`, `date_from` and `date_to` query parameters; any non-2xx or
/// transport error is a request failure.
#[derive(Clone)]
pub struct HttpFrequencyClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFrequencyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl WordFrequencyApi for HttpFrequencyClient {
    async fn word_frequency(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<FrequencyResponse, QueryError> {
        let date_from = descriptor.date_from.format(DATE_FORMAT).to_string();
        let date_to = descriptor.date_to.format(DATE_FORMAT).to_string();

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("words", descriptor.words.as_str()),
                ("date_from", date_from.as_str()),
                ("date_to", date_to.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QueryError::RequestFailed(format!("send: {e}")))?
            .error_for_status()
            .map_err(|e| QueryError::RequestFailed(format!("status: {e}")))?;

        response
            .json::<FrequencyResponse>()
            .await
            .map_err(|e| QueryError::RequestFailed(format!("decode: {e}")))
    }
}
