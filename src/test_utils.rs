//! In-process stand-in for the forecast service.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::client::ReqwestForecastService;
use crate::config::ClientConfig;

/// What the fake service holds. Rows are kept oldest first.
#[derive(Debug, Default)]
pub struct FakeState {
    /// `None` makes `/predict` answer 503 like a service without models
    pub snapshot: Option<Value>,
    pub nifty: Vec<Value>,
    pub vix: Vec<Value>,
    /// Every row accepted by `/feed`, with its path symbol
    pub fed: Vec<(String, Value)>,
}

pub type SharedState = Arc<Mutex<FakeState>>;

type ApiError = (StatusCode, Json<Value>);

fn reject(status: StatusCode, detail: impl Into<String>) -> ApiError {
    (status, Json(json!({ "detail": detail.into() })))
}

async fn predict(State(state): State<SharedState>) -> Result<Json<Value>, ApiError> {
    let guard = state.lock().unwrap();
    match &guard.snapshot {
        Some(snapshot) => Ok(Json(snapshot.clone())),
        None => Err(reject(StatusCode::SERVICE_UNAVAILABLE, "AI Models not loaded")),
    }
}

#[derive(Deserialize)]
struct DaysQuery {
    days: usize,
}

async fn data(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
    Query(query): Query<DaysQuery>,
) -> Result<Json<Value>, ApiError> {
    let guard = state.lock().unwrap();
    let (label, rows) = match symbol.as_str() {
        "nifty" => ("NIFTY", &guard.nifty),
        "vix" => ("INDIA_VIX", &guard.vix),
        _ => return Err(reject(StatusCode::NOT_FOUND, "Not Found")),
    };
    let start = rows.len().saturating_sub(query.days);
    let data = rows[start..].to_vec();
    Ok(Json(json!({
        "symbol": label,
        "rows_returned": data.len(),
        "data": data,
    })))
}

async fn feed(
    State(state): State<SharedState>,
    Path(symbol): Path<String>,
    Json(rows): Json<Vec<Value>>,
) -> Result<Json<Value>, ApiError> {
    if rows.is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, "No rows provided"));
    }

    let mut guard = state.lock().unwrap();
    for row in &rows {
        let date = row["Date"].as_str().unwrap_or_default().to_string();
        if NaiveDate::parse_from_str(&date, "%d-%m-%Y").is_err() {
            return Err(reject(
                StatusCode::BAD_REQUEST,
                format!("Date '{}' must be in DD-MM-YYYY format", date),
            ));
        }

        let table = match symbol.as_str() {
            "nifty" => &mut guard.nifty,
            "vix" => &mut guard.vix,
            _ => return Err(reject(StatusCode::NOT_FOUND, "Not Found")),
        };
        match table.iter_mut().find(|r| r["Date"] == row["Date"]) {
            Some(existing) => *existing = row.clone(),
            None => table.push(row.clone()),
        }
        guard.fed.push((symbol.clone(), row.clone()));
    }

    Ok(Json(json!({
        "status": "success",
        "rows_processed": rows.len(),
        "action": "upsert",
    })))
}

/// Serve `state` on an ephemeral local port. Returns the base URL.
pub async fn spawn_fake_service(state: FakeState) -> (String, SharedState) {
    let shared = Arc::new(Mutex::new(state));
    let app = Router::new()
        .route("/predict", get(predict))
        .route("/data/:symbol", get(data))
        .route("/feed/:symbol", post(feed))
        .with_state(shared.clone());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake service");
    let addr = listener.local_addr().expect("Fake service has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (format!("http://{}", addr), shared)
}

pub fn client_for(base_url: &str) -> ReqwestForecastService {
    let config = ClientConfig::default()
        .with_api_url(base_url)
        .expect("Invalid fake service URL");
    ReqwestForecastService::new(&config).expect("Failed to build client")
}

pub fn sample_snapshot() -> Value {
    json!({
        "date": "2024-01-25",
        "nifty_spot": 21453.95,
        "india_vix": 13.42,
        "metrics": {
            "predicted_annualized_vol": 0.1234,
            "bull_probability": 0.615
        },
        "regime": {
            "volatility": "FALLING_VOL",
            "direction": "BULLISH"
        },
        "recommendation": {
            "strategy": "BULL_PUT_SPREAD",
            "expiry_type": "WEEKLY",
            "expiry_date": "01-Feb-2024",
            "legs": { "SELL_PUT": 21400.0, "BUY_PUT": 21200.0 }
        }
    })
}

/// NIFTY rows for every day of January 2024 up to `days`, oldest first.
pub fn january_nifty(days: u32) -> Vec<Value> {
    (1..=days)
        .map(|day| {
            let open = 21000.0 + f64::from(day) * 10.0;
            json!({
                "Date": format!("{:02}-01-2024", day),
                "Open": open,
                "High": open + 50.0,
                "Low": open - 40.0,
                "Close": if day % 2 == 0 { open + 20.0 } else { open - 20.0 },
                "Shares Traded": 250_000_000u64,
                "Turnover (₹ Cr)": format!("{:.2}", 20000.0 + f64::from(day)),
            })
        })
        .collect()
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level comes from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}
