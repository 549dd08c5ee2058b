use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

use invopt_core::{DemandRecord, ItemId, PlanningError, PlanningResult};
use invopt_planning::HistoricalDataProvider;

/// Config for the historical-data HTTP client.
#[derive(Debug, Clone)]
pub struct HttpHistoricalDataConfig {
    /// Base URL; requests go to `{base_url}/histdata/{item_id}`.
    pub base_url: String,
    /// Whole-request timeout (connect + body).
    pub timeout: Duration,
}

impl Default for HttpHistoricalDataConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    #[error("error connecting to historical data API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("historical data API returned HTTP {0}")]
    Status(StatusCode),

    #[error("invalid data format in historical records: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<FetchError> for PlanningError {
    fn from(err: FetchError) -> Self {
        PlanningError::data_fetch(err.to_string())
    }
}

/// Historical-data provider backed by the external HTTP API.
///
/// One GET per call, no retries. TLS is verified against the platform trust
/// store.
#[derive(Debug, Clone)]
pub struct HttpHistoricalData {
    client: Client,
    base_url: Url,
}

impl HttpHistoricalData {
    pub fn new(config: HttpHistoricalDataConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(config.base_url));
        }

        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { client, base_url })
    }

    /// `{base_url}/histdata/{item_id}` with the id encoded as a single path segment.
    pub fn endpoint(&self, item_id: &ItemId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push("histdata")
            .push(item_id.as_str());
        Ok(url)
    }

    async fn get_records(&self, item_id: &ItemId) -> Result<Vec<DemandRecord>, FetchError> {
        let url = self.endpoint(item_id)?;
        debug!(%url, "GET historical data");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl HistoricalDataProvider for HttpHistoricalData {
    async fn fetch_demand(&self, item_id: &ItemId) -> PlanningResult<Vec<DemandRecord>> {
        self.get_records(item_id).await.map_err(|e| {
            warn!(item_id = %item_id, error = %e, "historical data fetch failed");
            PlanningError::from(e)
        })
    }
}
