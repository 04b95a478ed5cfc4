//! The remote forecast service as seen by the client.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ServiceError;
use crate::forecast::ForecastSnapshot;
use crate::record::{FeedAck, FeedRow, PriceRecord};
use crate::symbol::Symbol;

pub const PREDICT_PATH: &str = "/predict";

/// `GET /data/{symbol}?days=N`
pub fn history_path(symbol: Symbol, days: u32) -> String {
    format!("/data/{}?days={}", symbol.path_segment(), days)
}

/// `POST /feed/{symbol}`
pub fn feed_path(symbol: Symbol) -> String {
    format!("/feed/{}", symbol.path_segment())
}

/// Pull a human-readable reason out of an error body.
///
/// The service reports errors as `{"detail": ...}` where `detail` is either a
/// string or a list of validation errors. Anything else is returned trimmed.
pub fn rejection_detail(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("detail") {
            Some(Value::String(detail)) => detail.clone(),
            Some(other) => other.to_string(),
            None => body.trim().to_string(),
        },
        _ => body.trim().to_string(),
    }
}

/// Operations offered by the forecast service.
///
/// Futures are not required to be `Send`, the browser transport runs on a
/// single-threaded executor.
#[async_trait(?Send)]
pub trait ForecastService {
    /// `GET /predict`
    async fn predict(&self) -> Result<ForecastSnapshot, ServiceError>;

    /// `GET /data/{symbol}?days=N`, rows oldest first.
    async fn history(&self, symbol: Symbol, days: u32) -> Result<Vec<PriceRecord>, ServiceError>;

    /// `POST /feed/{symbol}` with a single-element batch.
    async fn feed(&self, row: &FeedRow) -> Result<FeedAck, ServiceError>;
}
