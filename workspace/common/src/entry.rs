//! Data entry forms for appending one day of prices per symbol.

use std::collections::BTreeMap;
use tracing::{error, info, warn};

use crate::error::{EntryError, ServiceError};
use crate::record::{FeedAck, FeedRow, NiftyFeedRow, VixFeedRow};
use crate::service::ForecastService;
use crate::symbol::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryField {
    Date,
    Open,
    Close,
    High,
    Low,
    SharesTraded,
    Turnover,
    PrevClose,
}

const NIFTY_FIELDS: [EntryField; 7] = [
    EntryField::Date,
    EntryField::Open,
    EntryField::Close,
    EntryField::High,
    EntryField::Low,
    EntryField::SharesTraded,
    EntryField::Turnover,
];

const VIX_FIELDS: [EntryField; 6] = [
    EntryField::Date,
    EntryField::Open,
    EntryField::Close,
    EntryField::High,
    EntryField::Low,
    EntryField::PrevClose,
];

impl EntryField {
    /// Fields of a symbol's form, in display order.
    pub fn for_symbol(symbol: Symbol) -> &'static [EntryField] {
        match symbol {
            Symbol::Nifty => &NIFTY_FIELDS,
            Symbol::Vix => &VIX_FIELDS,
        }
    }

    /// Column name on the wire; also used as the HTML input name.
    pub fn key(self) -> &'static str {
        match self {
            EntryField::Date => "Date",
            EntryField::Open => "Open",
            EntryField::Close => "Close",
            EntryField::High => "High",
            EntryField::Low => "Low",
            EntryField::SharesTraded => "Shares Traded",
            EntryField::Turnover => "Turnover (₹ Cr)",
            EntryField::PrevClose => "Prev. Close",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntryField::Date => "Date (DD-MM-YYYY)",
            EntryField::Turnover => "Turnover (Cr)",
            other => other.key(),
        }
    }

    pub fn is_numeric(self) -> bool {
        self != EntryField::Date
    }

    /// `step` attribute of the numeric input.
    pub fn step(self, symbol: Symbol) -> Option<&'static str> {
        match (self, symbol) {
            (EntryField::Date, _) => None,
            (EntryField::SharesTraded, _) => Some("1"),
            (EntryField::Turnover, _) => Some("0.01"),
            (_, Symbol::Nifty) => Some("0.05"),
            (_, Symbol::Vix) => Some("0.01"),
        }
    }
}

/// Raw text of one symbol's entry form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntryForm {
    symbol: Symbol,
    values: BTreeMap<EntryField, String>,
}

impl EntryForm {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            values: BTreeMap::new(),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn fields(&self) -> &'static [EntryField] {
        EntryField::for_symbol(self.symbol)
    }

    /// Set a field. Fields that don't belong to this form are ignored.
    pub fn set(&mut self, field: EntryField, value: impl Into<String>) -> bool {
        if !self.fields().contains(&field) {
            warn!(symbol = %self.symbol, field = field.key(), "Field not part of form");
            return false;
        }
        self.values.insert(field, value.into());
        true
    }

    pub fn with(mut self, field: EntryField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: EntryField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn missing_fields(&self) -> Vec<EntryField> {
        self.fields()
            .iter()
            .copied()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Build the feed row. Every field is required and numeric fields must
    /// parse; nothing else is checked, the service owns date validation.
    pub fn to_row(&self) -> Result<FeedRow, EntryError> {
        if let Some(field) = self.missing_fields().first() {
            return Err(EntryError::MissingField(field.key()));
        }

        let date = self.get(EntryField::Date).trim().to_string();
        let open = self.number(EntryField::Open)?;
        let high = self.number(EntryField::High)?;
        let low = self.number(EntryField::Low)?;
        let close = self.number(EntryField::Close)?;

        let row = match self.symbol {
            Symbol::Nifty => FeedRow::Nifty(NiftyFeedRow {
                date,
                open,
                high,
                low,
                close,
                shares_traded: self.whole_number(EntryField::SharesTraded)?,
                turnover_cr: self.number(EntryField::Turnover)?,
            }),
            Symbol::Vix => FeedRow::Vix(VixFeedRow {
                date,
                open,
                high,
                low,
                close,
                prev_close: self.number(EntryField::PrevClose)?,
            }),
        };
        Ok(row)
    }

    fn number(&self, field: EntryField) -> Result<f64, EntryError> {
        let raw = self.get(field).trim();
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| EntryError::InvalidNumber {
                field: field.key(),
                value: raw.to_string(),
            })
    }

    fn whole_number(&self, field: EntryField) -> Result<u64, EntryError> {
        let raw = self.get(field).trim();
        if let Ok(value) = raw.parse::<u64>() {
            return Ok(value);
        }
        match self.number(field)? {
            value if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 => {
                Ok(value as u64)
            }
            _ => Err(EntryError::InvalidNumber {
                field: field.key(),
                value: raw.to_string(),
            }),
        }
    }
}

/// Receives the outcome of a submission.
pub trait EntryNotifier {
    /// The service accepted a row; the parent should refresh.
    fn updated(&self, symbol: Symbol);

    /// Blocking, user-facing message.
    fn alert(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Submitted(FeedAck),
    Invalid(EntryError),
    Failed(ServiceError),
}

impl EntryOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, EntryOutcome::Submitted(_))
    }
}

pub fn success_message(symbol: Symbol) -> String {
    format!("{} Data Updated!", symbol.label())
}

pub fn failure_message(symbol: Symbol) -> String {
    format!("Error updating {}", symbol.label())
}

/// Send the form as a single-element batch.
///
/// Success raises one `updated` notification (after the confirmation alert).
/// Any failure raises exactly one alert and no notification. Nothing is
/// retried.
pub async fn submit_entry<S, N>(service: &S, form: &EntryForm, notifier: &N) -> EntryOutcome
where
    S: ForecastService + ?Sized,
    N: EntryNotifier + ?Sized,
{
    let symbol = form.symbol();
    let row = match form.to_row() {
        Ok(row) => row,
        Err(err) => {
            warn!(%symbol, %err, "Entry form incomplete");
            notifier.alert(&err.to_string());
            return EntryOutcome::Invalid(err);
        }
    };

    info!(%symbol, date = row.date(), "Submitting entry");
    match service.feed(&row).await {
        Ok(ack) => {
            info!(%symbol, rows = ?ack.rows_processed, action = ?ack.action, "Entry accepted");
            notifier.alert(&success_message(symbol));
            notifier.updated(symbol);
            EntryOutcome::Submitted(ack)
        }
        Err(err) => {
            error!(%symbol, %err, "Entry submission failed");
            notifier.alert(&failure_message(symbol));
            EntryOutcome::Failed(err)
        }
    }
}
