pub mod forecast;
pub mod market_data;

use async_trait::async_trait;
use common::service::rejection_detail;
use common::{FeedAck, FeedRow, ForecastService, ForecastSnapshot, PriceRecord, ServiceError, Symbol};
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use crate::settings;

fn api_url(endpoint: &str) -> String {
    settings::get_settings().api_url(endpoint)
}

async fn rejected(endpoint: &str, response: Response) -> ServiceError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let detail = rejection_detail(&body);
    log::error!("{} - HTTP {}: {}", endpoint, status, detail);
    ServiceError::Rejected { status, detail }
}

/// Common GET request handler
pub async fn get<T>(endpoint: &str) -> Result<T, ServiceError>
where
    T: for<'de> Deserialize<'de>,
{
    let url = api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("GET {} - Request failed: {}", endpoint, e);
        ServiceError::Transport(e.to_string())
    })?;

    if !response.ok() {
        return Err(rejected(endpoint, response).await);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data = response.json::<T>().await.map_err(|e| {
        log::error!("GET {} - Failed to parse response: {}", endpoint, e);
        ServiceError::Decode(e.to_string())
    })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}

/// Common POST request handler.
///
/// The acknowledgement body is informational; an unreadable one still counts
/// as success.
pub async fn post<B>(endpoint: &str, body: &B) -> Result<FeedAck, ServiceError>
where
    B: Serialize,
{
    let url = api_url(endpoint);
    log::debug!("POST request to: {}", url);

    let response = Request::post(&url)
        .json(body)
        .map_err(|e| {
            log::error!("POST {} - Failed to serialize request: {}", endpoint, e);
            ServiceError::Decode(e.to_string())
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST {} - Request failed: {}", endpoint, e);
            ServiceError::Transport(e.to_string())
        })?;

    if !response.ok() {
        log::warn!("POST {} - Non-OK response: {}", endpoint, response.status());
        return Err(rejected(endpoint, response).await);
    }

    let text = response.text().await.unwrap_or_default();
    log::info!("POST {} - Success", endpoint);
    Ok(FeedAck::from_body(&text))
}

/// [`ForecastService`] over the browser fetch API.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HttpForecastService;

#[async_trait(?Send)]
impl ForecastService for HttpForecastService {
    async fn predict(&self) -> Result<ForecastSnapshot, ServiceError> {
        forecast::get_prediction().await
    }

    async fn history(&self, symbol: Symbol, days: u32) -> Result<Vec<PriceRecord>, ServiceError> {
        market_data::get_history(symbol, days).await
    }

    async fn feed(&self, row: &FeedRow) -> Result<FeedAck, ServiceError> {
        market_data::feed_row(row).await
    }
}
