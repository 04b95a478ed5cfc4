use std::time::Duration;

use async_trait::async_trait;
use common::service::{PREDICT_PATH, feed_path, history_path, rejection_detail};
use common::{
    FeedAck, FeedRow, ForecastService, ForecastSnapshot, HistoryPayload, PriceRecord,
    ServiceError, Symbol,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

use crate::config::ClientConfig;

/// [`ForecastService`] over a pooled `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestForecastService {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestForecastService {
    pub fn new(config: &ClientConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Read a response body, mapping non-2xx statuses to `Rejected`.
    async fn body(endpoint: &str, response: reqwest::Response) -> Result<String, ServiceError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            let detail = rejection_detail(&body);
            error!(endpoint, status = status.as_u16(), %detail, "Request rejected");
            return Err(ServiceError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(body)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ServiceError> {
        debug!(endpoint, "GET");
        let response = self
            .client
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| {
                error!(endpoint, error = %e, "GET failed");
                ServiceError::Transport(e.to_string())
            })?;

        let body = Self::body(endpoint, response).await?;
        serde_json::from_str(&body).map_err(|e| {
            error!(endpoint, error = %e, "Failed to parse response");
            ServiceError::Decode(e.to_string())
        })
    }
}

#[async_trait(?Send)]
impl ForecastService for ReqwestForecastService {
    #[instrument(skip(self))]
    async fn predict(&self) -> Result<ForecastSnapshot, ServiceError> {
        self.get(PREDICT_PATH).await
    }

    #[instrument(skip(self))]
    async fn history(&self, symbol: Symbol, days: u32) -> Result<Vec<PriceRecord>, ServiceError> {
        let payload: HistoryPayload = self.get(&history_path(symbol, days)).await?;
        let rows = payload.into_rows();
        debug!(count = rows.len(), "History fetched");
        Ok(rows)
    }

    #[instrument(skip(self, row), fields(symbol = %row.symbol(), date = row.date()))]
    async fn feed(&self, row: &FeedRow) -> Result<FeedAck, ServiceError> {
        let endpoint = feed_path(row.symbol());
        let response = self
            .client
            .post(self.url(&endpoint))
            .json(&[row])
            .send()
            .await
            .map_err(|e| {
                error!(%endpoint, error = %e, "POST failed");
                ServiceError::Transport(e.to_string())
            })?;

        let body = Self::body(&endpoint, response).await?;
        Ok(FeedAck::from_body(&body))
    }
}
