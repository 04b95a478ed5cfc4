use common::{
    EntryField, EntryForm, EntryOutcome, ForecastService, ServiceError, Strategy, Symbol,
    submit_entry,
};
use std::cell::RefCell;

use crate::cli::commands::{FeedFields, feed, history, predict};
use crate::cli::{HistoryArgs, PriceArgs};
use crate::client::ReqwestForecastService;
use crate::config::ClientConfig;
use crate::test_utils::{
    FakeState, client_for, init_test_tracing, january_nifty, sample_snapshot, spawn_fake_service,
};

#[derive(Default)]
struct RecordingNotifier {
    updates: RefCell<Vec<Symbol>>,
    alerts: RefCell<Vec<String>>,
}

impl common::EntryNotifier for RecordingNotifier {
    fn updated(&self, symbol: Symbol) {
        self.updates.borrow_mut().push(symbol);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

fn history_args(symbol: Symbol) -> HistoryArgs {
    HistoryArgs {
        symbol,
        days: Some(1000),
        from: None,
        to: None,
        page: 1,
        page_size: 10,
    }
}

fn vix_prices(date: &str) -> PriceArgs {
    PriceArgs {
        date: date.to_string(),
        open: "14.10".to_string(),
        high: "15.00".to_string(),
        low: "13.85".to_string(),
        close: "14.62".to_string(),
    }
}

#[tokio::test]
async fn test_predict_decodes_snapshot() {
    let _guard = init_test_tracing();
    let (url, _) = spawn_fake_service(FakeState {
        snapshot: Some(sample_snapshot()),
        ..Default::default()
    })
    .await;
    let client = client_for(&url);

    let snapshot = client.predict().await.unwrap();
    assert_eq!(snapshot.recommendation.strategy, Strategy::BullPutSpread);
    assert!(snapshot.is_bullish());
    assert_eq!(snapshot.predicted_vol_pct(), "12.34%");
    assert_eq!(snapshot.bull_probability_pct(), "61.5%");

    let text = predict(&client, false).await.unwrap();
    assert!(text.contains("Recommended strategy: BULL PUT SPREAD"));
    assert!(text.contains("SELL PUT"));

    let json = predict(&client, true).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["recommendation"]["expiry_type"], "WEEKLY");
}

#[tokio::test]
async fn test_predict_unavailable_is_rejected_with_detail() {
    let _guard = init_test_tracing();
    let (url, _) = spawn_fake_service(FakeState::default()).await;
    let client = client_for(&url);

    let err = client.predict().await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::Rejected {
            status: 503,
            detail: "AI Models not loaded".to_string()
        }
    );

    let err = predict(&client, false).await.unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.starts_with("AI models not ready or data missing."));
    assert!(message.contains("AI Models not loaded"));
}

#[tokio::test]
async fn test_history_unwraps_envelope_and_limits_days() {
    let (url, _) = spawn_fake_service(FakeState {
        nifty: january_nifty(25),
        ..Default::default()
    })
    .await;
    let client = client_for(&url);

    let rows = client.history(Symbol::Nifty, 5).await.unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].date, "21-01-2024");
    assert_eq!(rows[4].turnover_cr, Some(20025.0));

    assert!(client.history(Symbol::Vix, 30).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_command_filters_and_pages() {
    let (url, _) = spawn_fake_service(FakeState {
        nifty: january_nifty(25),
        ..Default::default()
    })
    .await;
    let client = client_for(&url);

    let mut args = history_args(Symbol::Nifty);
    args.from = chrono::NaiveDate::from_ymd_opt(2024, 1, 10);
    args.to = chrono::NaiveDate::from_ymd_opt(2024, 1, 20);

    let page_one = history(&client, &args, 30).await.unwrap();
    let lines: Vec<_> = page_one.lines().collect();
    assert!(lines[1].starts_with("20-01-2024"));
    assert_eq!(lines.last(), Some(&"Page 1 of 2 (11 rows)"));

    args.page = 2;
    let page_two = history(&client, &args, 30).await.unwrap();
    let lines: Vec<_> = page_two.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("10-01-2024"));
    assert_eq!(lines[2], "Page 2 of 2 (11 rows)");

    args.page = 7;
    let fallback = history(&client, &args, 30).await.unwrap();
    assert!(fallback.ends_with("Page 1 of 2 (11 rows)"));
}

#[tokio::test]
async fn test_history_rejects_inverted_range() {
    let client = client_for("http://127.0.0.1:9");
    let mut args = history_args(Symbol::Vix);
    args.from = chrono::NaiveDate::from_ymd_opt(2024, 2, 1);
    args.to = chrono::NaiveDate::from_ymd_opt(2024, 1, 1);
    assert!(history(&client, &args, 30).await.is_err());
}

#[tokio::test]
async fn test_submit_entry_notifies_once_on_success() {
    let (url, shared) = spawn_fake_service(FakeState::default()).await;
    let client = client_for(&url);
    let notifier = RecordingNotifier::default();

    let form = EntryForm::new(Symbol::Nifty)
        .with(EntryField::Date, "26-01-2024")
        .with(EntryField::Open, "21500")
        .with(EntryField::Close, "21552.5")
        .with(EntryField::High, "21600.05")
        .with(EntryField::Low, "21480")
        .with(EntryField::SharesTraded, "301234567")
        .with(EntryField::Turnover, "28123.45");

    let outcome = submit_entry(&client, &form, &notifier).await;
    assert!(outcome.is_submitted());
    assert_eq!(*notifier.updates.borrow(), vec![Symbol::Nifty]);
    assert_eq!(*notifier.alerts.borrow(), vec!["NIFTY Data Updated!".to_string()]);

    let state = shared.lock().unwrap();
    assert_eq!(state.fed.len(), 1);
    let (symbol, row) = &state.fed[0];
    assert_eq!(symbol, "nifty");
    assert_eq!(row["Shares Traded"], 301234567u64);
    assert_eq!(row["Turnover (₹ Cr)"], 28123.45);
    assert_eq!(state.nifty.len(), 1);
}

#[tokio::test]
async fn test_submit_entry_alerts_once_on_rejection() {
    let (url, shared) = spawn_fake_service(FakeState::default()).await;
    let client = client_for(&url);
    let notifier = RecordingNotifier::default();

    let form = EntryForm::new(Symbol::Vix)
        .with(EntryField::Date, "2024-01-26")
        .with(EntryField::Open, "14.1")
        .with(EntryField::Close, "14.6")
        .with(EntryField::High, "15")
        .with(EntryField::Low, "13.9")
        .with(EntryField::PrevClose, "14.2");

    let outcome = submit_entry(&client, &form, &notifier).await;
    match outcome {
        EntryOutcome::Failed(ServiceError::Rejected { status, detail }) => {
            assert_eq!(status, 400);
            assert!(detail.contains("DD-MM-YYYY"));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(notifier.updates.borrow().is_empty());
    assert_eq!(*notifier.alerts.borrow(), vec!["Error updating VIX".to_string()]);
    assert!(shared.lock().unwrap().fed.is_empty());
}

#[tokio::test]
async fn test_feed_command_upserts_by_date() {
    let (url, shared) = spawn_fake_service(FakeState::default()).await;
    let client = client_for(&url);

    let out = feed(&client, FeedFields::vix(vix_prices("26-01-2024"), "14.20".into()))
        .await
        .unwrap();
    assert!(out.starts_with("VIX Data Updated!"));
    assert!(out.contains("rows processed: 1"));

    feed(&client, FeedFields::vix(vix_prices("26-01-2024"), "14.30".into()))
        .await
        .unwrap();

    let state = shared.lock().unwrap();
    assert_eq!(state.vix.len(), 1);
    assert_eq!(state.vix[0]["Prev. Close"], 14.3);
    assert_eq!(state.fed.len(), 2);
}

#[tokio::test]
async fn test_feed_command_invalid_number_never_sends() {
    let (url, shared) = spawn_fake_service(FakeState::default()).await;
    let client = client_for(&url);

    let mut prices = vix_prices("26-01-2024");
    prices.high = "fifteen".to_string();
    let err = feed(&client, FeedFields::vix(prices, "14.2".into()))
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("High"));
    assert!(shared.lock().unwrap().fed.is_empty());
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let config = ClientConfig {
        request_timeout_secs: 2,
        ..ClientConfig::default()
    }
    .with_api_url("http://127.0.0.1:9")
    .unwrap();
    let client = ReqwestForecastService::new(&config).unwrap();
    assert_eq!(client.base_url(), "http://127.0.0.1:9");

    assert!(matches!(
        client.predict().await,
        Err(ServiceError::Transport(_))
    ));
}

#[test]
fn test_default_log_filter_shows_shared_crate_info() {
    use tracing_subscriber::layer::SubscriberExt;

    let filter = tracing_subscriber::EnvFilter::try_new(crate::DEFAULT_LOG_FILTER).unwrap();
    let subscriber = tracing_subscriber::registry().with(filter);
    tracing::subscriber::with_default(subscriber, || {
        assert!(tracing::event_enabled!(target: "common::entry", tracing::Level::INFO));
        assert!(tracing::event_enabled!(target: "volstack::cli", tracing::Level::INFO));
        assert!(!tracing::event_enabled!(target: "common::history", tracing::Level::DEBUG));
        assert!(!tracing::event_enabled!(target: "hyper", tracing::Level::INFO));
    });
}
