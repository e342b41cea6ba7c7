//! HTTP forecast collaborator.
//!
//! Posts `{"financialData": ...}` to the configured endpoint and expects
//! `{"forecast": ...}` back. Every failure mode collapses into
//! [`ForecastError::Unavailable`]; the caller decides what to tell clients.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::ports::{ForecastError, ForecastService};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ForecastRequestBody<'a> {
    financial_data: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastResponseBody {
    forecast: String,
}

/// Forecast service talking to a remote generative endpoint over HTTPS.
pub struct HttpForecastService {
    endpoint: Url,
    client: reqwest::Client,
}

impl HttpForecastService {
    /// Build a client for `endpoint`.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ForecastService for HttpForecastService {
    async fn forecast(&self, financial_data: &str) -> Result<String, ForecastError> {
        debug!(endpoint = %self.endpoint, "requesting forecast");
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ForecastRequestBody { financial_data })
            .send()
            .await
            .map_err(|err| ForecastError::unavailable(err.to_string()))?;
        let response = response
            .error_for_status()
            .map_err(|err| ForecastError::unavailable(err.to_string()))?;
        let body: ForecastResponseBody = response
            .json()
            .await
            .map_err(|err| ForecastError::unavailable(err.to_string()))?;
        Ok(body.forecast)
    }
}
