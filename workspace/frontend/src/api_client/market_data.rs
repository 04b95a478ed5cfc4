use crate::api_client;
use common::service::{feed_path, history_path};
use common::{FeedAck, FeedRow, HistoryPayload, PriceRecord, ServiceError, Symbol};

/// Daily rows for `symbol`, oldest first.
pub async fn get_history(symbol: Symbol, days: u32) -> Result<Vec<PriceRecord>, ServiceError> {
    log::trace!("Fetching {} days of {} history", days, symbol);
    let rows = api_client::get::<HistoryPayload>(&history_path(symbol, days))
        .await
        .map(HistoryPayload::into_rows);

    match &rows {
        Ok(rows) => log::info!("Fetched {} {} rows", rows.len(), symbol),
        Err(e) => log::error!("Failed to fetch {} history: {}", symbol, e),
    }

    rows
}

/// Upsert one row; the service takes a batch so it is wrapped in a list.
pub async fn feed_row(row: &FeedRow) -> Result<FeedAck, ServiceError> {
    let symbol = row.symbol();
    log::debug!("Feeding {} row for {}", symbol, row.date());
    api_client::post(&feed_path(symbol), &[row]).await
}
