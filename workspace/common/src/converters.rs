//! Converter functions from wire records to display values
//!
//! Both the browser table and the CLI printer go through these so the two
//! surfaces format numbers the same way.

use crate::record::PriceRecord;
use crate::symbol::Symbol;

/// Format a price with two decimals. Missing values render as `0.00`.
pub fn format_number(value: Option<f64>) -> String {
    format!("{:.2}", value.filter(|v| v.is_finite()).unwrap_or(0.0))
}

/// `IRON_CONDOR` -> `IRON CONDOR`
pub fn humanize_identifier(identifier: &str) -> String {
    identifier.replace('_', " ")
}

/// A history row ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    pub close: String,
    pub open: String,
    pub high: String,
    pub low: String,
    /// Absolute percentage change, VIX only.
    pub change: Option<String>,
    /// Whether the row closed up: change > 0 for VIX, close > open for NIFTY.
    pub is_up: bool,
}

impl TableRow {
    pub fn from_record(symbol: Symbol, record: &PriceRecord) -> Self {
        let change = record.change.unwrap_or(0.0);
        let is_up = match symbol {
            Symbol::Vix => change > 0.0,
            Symbol::Nifty => record.close.unwrap_or(0.0) > record.open.unwrap_or(0.0),
        };

        Self {
            date: record.date.clone(),
            close: format_number(record.close),
            open: format_number(record.open),
            high: format_number(record.high),
            low: format_number(record.low),
            change: (symbol == Symbol::Vix).then(|| format!("{:.2}%", change.abs())),
            is_up,
        }
    }
}

/// Column headers for a symbol's table.
pub fn table_headers(symbol: Symbol) -> &'static [&'static str] {
    match symbol {
        Symbol::Nifty => &["Date", "Close", "Open", "High", "Low"],
        Symbol::Vix => &["Date", "Close", "Open", "High", "Low", "Change"],
    }
}

pub fn records_to_rows(symbol: Symbol, records: &[PriceRecord]) -> Vec<TableRow> {
    records
        .iter()
        .map(|record| TableRow::from_record(symbol, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(Some(21665.8)), "21665.80");
        assert_eq!(format_number(Some(1.006)), "1.01");
        assert_eq!(format_number(None), "0.00");
        assert_eq!(format_number(Some(f64::NAN)), "0.00");
    }

    #[test]
    fn test_humanize_identifier() {
        assert_eq!(humanize_identifier("BEAR_CALL_SPREAD"), "BEAR CALL SPREAD");
        assert_eq!(humanize_identifier("STRADDLE"), "STRADDLE");
    }

    #[test]
    fn test_nifty_row_direction_from_open_close() {
        let record = PriceRecord {
            date: "02-01-2024".to_string(),
            open: Some(100.0),
            close: Some(101.5),
            ..Default::default()
        };
        let row = TableRow::from_record(Symbol::Nifty, &record);
        assert!(row.is_up);
        assert_eq!(row.change, None);
        assert_eq!(row.close, "101.50");
    }

    #[test]
    fn test_vix_row_direction_from_change() {
        let record = PriceRecord {
            date: "02-01-2024".to_string(),
            open: Some(14.0),
            close: Some(15.0),
            change: Some(-0.42),
            ..Default::default()
        };
        let row = TableRow::from_record(Symbol::Vix, &record);
        assert!(!row.is_up);
        assert_eq!(row.change.as_deref(), Some("0.42%"));
        assert_eq!(table_headers(Symbol::Vix).len(), 6);
    }
}
