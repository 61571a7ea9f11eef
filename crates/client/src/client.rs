//! Prediction Service Client

use feature_engine::{PredictRequest, PredictResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::error::ClientError;

/// Fixed request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for `POST /predict`. Failures are returned, never retried.
pub struct PredictionClient {
    client: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one prediction request
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ClientError> {
        let url = format!("{}/predict", self.base_url);
        debug!("POST {} {:?}", url, request);

        let response = self.client.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(ClientError::Decode)
    }
}
