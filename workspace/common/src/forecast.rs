//! Forecast snapshot returned by `GET /predict` and the dashboard state that
//! displays it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

use crate::converters::{format_number, humanize_identifier};
use crate::error::ServiceError;

/// Shown in place of the dashboard whenever a forecast fetch fails.
pub const FORECAST_ADVISORY: &str = "AI models not ready or data missing.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolatilityRegime {
    RisingVol,
    FallingVol,
    NeutralVol,
    #[serde(other)]
    Unknown,
}

impl VolatilityRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            VolatilityRegime::RisingVol => "RISING_VOL",
            VolatilityRegime::FallingVol => "FALLING_VOL",
            VolatilityRegime::NeutralVol => "NEUTRAL_VOL",
            VolatilityRegime::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DirectionRegime {
    Bullish,
    Bearish,
    Neutral,
    #[serde(other)]
    Unknown,
}

impl DirectionRegime {
    pub fn as_str(self) -> &'static str {
        match self {
            DirectionRegime::Bullish => "BULLISH",
            DirectionRegime::Bearish => "BEARISH",
            DirectionRegime::Neutral => "NEUTRAL",
            DirectionRegime::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    LongCall,
    LongPut,
    Straddle,
    BullPutSpread,
    BearCallSpread,
    IronCondor,
    NoTrade,
    #[serde(other)]
    Unknown,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::LongCall => "LONG_CALL",
            Strategy::LongPut => "LONG_PUT",
            Strategy::Straddle => "STRADDLE",
            Strategy::BullPutSpread => "BULL_PUT_SPREAD",
            Strategy::BearCallSpread => "BEAR_CALL_SPREAD",
            Strategy::IronCondor => "IRON_CONDOR",
            Strategy::NoTrade => "NO_TRADE",
            Strategy::Unknown => "UNKNOWN",
        }
    }

    /// `BULL_PUT_SPREAD` -> `BULL PUT SPREAD`
    pub fn label(self) -> String {
        humanize_identifier(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryType {
    Weekly,
    NextWeekly,
    Monthly,
    #[serde(other)]
    Unknown,
}

impl ExpiryType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExpiryType::Weekly => "WEEKLY",
            ExpiryType::NextWeekly => "NEXT_WEEKLY",
            ExpiryType::Monthly => "MONTHLY",
            ExpiryType::Unknown => "UNKNOWN",
        }
    }
}

/// Option leg of a recommended strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LegAction {
    BuyCall,
    BuyPut,
    SellCall,
    SellPut,
    Unknown,
}

impl LegAction {
    pub fn from_key(key: &str) -> Self {
        match key {
            "BUY_CALL" => LegAction::BuyCall,
            "BUY_PUT" => LegAction::BuyPut,
            "SELL_CALL" => LegAction::SellCall,
            "SELL_PUT" => LegAction::SellPut,
            _ => LegAction::Unknown,
        }
    }

    pub fn is_buy(self) -> bool {
        matches!(self, LegAction::BuyCall | LegAction::BuyPut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetrics {
    pub predicted_annualized_vol: f64,
    pub bull_probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRegime {
    pub volatility: VolatilityRegime,
    pub direction: DirectionRegime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub strategy: Strategy,
    pub expiry_type: ExpiryType,
    pub expiry_date: String,
    /// Leg key (`BUY_CALL`, ...) to strike.
    #[serde(default)]
    pub legs: BTreeMap<String, f64>,
}

impl Recommendation {
    pub fn legs(&self) -> impl Iterator<Item = (LegAction, &str, f64)> + '_ {
        self.legs
            .iter()
            .map(|(key, strike)| (LegAction::from_key(key), key.as_str(), *strike))
    }
}

/// Payload of `GET /predict`. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSnapshot {
    pub date: String,
    pub nifty_spot: f64,
    pub india_vix: f64,
    pub metrics: ForecastMetrics,
    pub regime: MarketRegime,
    pub recommendation: Recommendation,
}

impl ForecastSnapshot {
    pub fn is_bullish(&self) -> bool {
        self.regime.direction == DirectionRegime::Bullish
    }

    /// Annualized volatility as a percentage, two decimals.
    pub fn predicted_vol_pct(&self) -> String {
        format!("{:.2}%", self.metrics.predicted_annualized_vol * 100.0)
    }

    /// Bull probability as a percentage, one decimal.
    pub fn bull_probability_pct(&self) -> String {
        format!("{:.1}%", self.metrics.bull_probability * 100.0)
    }

    /// The four headline cards of the dashboard.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("NIFTY Spot", format_number(Some(self.nifty_spot)), Tone::Plain),
            StatCard::new("India VIX", format_number(Some(self.india_vix)), Tone::Plain),
            StatCard::new("Pred. Volatility", self.predicted_vol_pct(), Tone::Plain),
            StatCard::new(
                "Bull Probability",
                self.bull_probability_pct(),
                if self.is_bullish() { Tone::Positive } else { Tone::Negative },
            ),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

impl StatCard {
    fn new(label: &'static str, value: String, tone: Tone) -> Self {
        Self { label, value, tone }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    Loading,
    Ready(ForecastSnapshot),
    /// Advisory message to show instead of the dashboard.
    Failed(String),
}

/// Identifies one forecast request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Dashboard refresh state.
///
/// Every refresh issues a new [`RequestTicket`]; only the response for the
/// most recently issued ticket is applied, so two overlapping refreshes
/// settle on the later request even when the earlier one resolves last.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    state: DashboardState,
    issued: u64,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            issued: 0,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&ForecastSnapshot> {
        match &self.state {
            DashboardState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Empty unless a snapshot is showing.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        self.snapshot().map(ForecastSnapshot::stat_cards).unwrap_or_default()
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Enter the loading state for a new request.
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.issued += 1;
        self.state = DashboardState::Loading;
        debug!(ticket = self.issued, "Forecast refresh started");
        RequestTicket(self.issued)
    }

    /// Apply a response. Returns `false` when the ticket is stale and the
    /// response was dropped.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<ForecastSnapshot, ServiceError>,
    ) -> bool {
        if !self.is_current(ticket) {
            warn!(
                ticket = ticket.0,
                latest = self.issued,
                "Discarding stale forecast response"
            );
            return false;
        }

        self.state = match result {
            Ok(snapshot) => {
                debug!(ticket = ticket.0, date = %snapshot.date, "Forecast loaded");
                DashboardState::Ready(snapshot)
            }
            Err(err) => {
                error!(ticket = ticket.0, %err, "Forecast fetch failed");
                DashboardState::Failed(FORECAST_ADVISORY.to_string())
            }
        };
        true
    }
}
