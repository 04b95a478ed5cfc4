use crate::api_client;
use common::service::PREDICT_PATH;
use common::{ForecastSnapshot, ServiceError};

pub async fn get_prediction() -> Result<ForecastSnapshot, ServiceError> {
    log::trace!("Fetching latest forecast");
    let result = api_client::get::<ForecastSnapshot>(PREDICT_PATH).await;

    match &result {
        Ok(snapshot) => log::info!(
            "Forecast for {}: {} / {}",
            snapshot.date,
            snapshot.regime.volatility.as_str(),
            snapshot.regime.direction.as_str()
        ),
        Err(e) => log::error!("Failed to fetch forecast: {}", e),
    }

    result
}
