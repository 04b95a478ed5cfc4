use anyhow::{Context, Result};
use common::{Dashboard, DashboardState, ForecastService};
use tracing::{info, warn};

use crate::render;

/// Fetch the current forecast once and render it.
///
/// Runs through the same refresh state machine as the browser dashboard, so
/// a failed fetch surfaces the same advisory.
pub async fn predict<S>(service: &S, json: bool) -> Result<String>
where
    S: ForecastService + ?Sized,
{
    let mut dashboard = Dashboard::new();
    let ticket = dashboard.begin_refresh();
    let result = service.predict().await;
    let cause = result.as_ref().err().cloned();
    dashboard.resolve(ticket, result);

    match dashboard.state() {
        DashboardState::Ready(snapshot) => {
            info!(date = %snapshot.date, strategy = snapshot.recommendation.strategy.as_str(), "Forecast received");
            if json {
                serde_json::to_string_pretty(snapshot).context("Failed to encode forecast")
            } else {
                Ok(render::forecast(snapshot))
            }
        }
        DashboardState::Failed(advisory) => {
            warn!(%advisory, "Forecast unavailable");
            match cause {
                Some(err) => Err(anyhow::Error::new(err).context(advisory.clone())),
                None => Err(anyhow::anyhow!(advisory.clone())),
            }
        }
        DashboardState::Loading => Err(anyhow::anyhow!("Forecast request did not complete")),
    }
}
