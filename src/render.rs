//! Plain-text output of the CLI commands.

use std::fmt::Write;

use common::converters::{records_to_rows, table_headers};
use common::{FeedAck, ForecastSnapshot, HistoryView, Symbol, humanize_identifier};

const COLUMN_WIDTH: usize = 12;

pub fn forecast(snapshot: &ForecastSnapshot) -> String {
    let mut out = String::new();
    let rec = &snapshot.recommendation;

    let _ = writeln!(out, "Forecast for {}", snapshot.date);
    for card in snapshot.stat_cards() {
        let _ = writeln!(out, "  {:<18}{}", card.label, card.value);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Direction regime:   {}", snapshot.regime.direction.as_str());
    let _ = writeln!(out, "Volatility regime:  {}", snapshot.regime.volatility.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended strategy: {}", rec.strategy.label());
    let _ = writeln!(out, "Expiry: {} ({})", rec.expiry_date, rec.expiry_type.as_str());

    if rec.legs.is_empty() {
        let _ = write!(out, "No execution legs");
    } else {
        let _ = write!(out, "Execution legs:");
        for (_, key, strike) in rec.legs() {
            let _ = write!(out, "\n  {:<12}{}", humanize_identifier(key), strike);
        }
    }
    out
}

/// The current page of `view`, newest first, followed by the page footer.
pub fn history(view: &HistoryView) -> String {
    let mut out = String::new();
    let symbol = view.symbol();

    if view.skipped() > 0 {
        let _ = writeln!(
            out,
            "Skipped {} rows with an unreadable date",
            view.skipped()
        );
    }

    if view.filtered().is_empty() {
        let _ = write!(out, "No data found for selected range");
        return out;
    }

    let headers = table_headers(symbol);
    let _ = writeln!(out, "{}", row_line(headers.iter().copied()));

    for row in records_to_rows(symbol, view.current_page_rows()) {
        let marker = if row.is_up { "+" } else { "-" };
        let change = row.change.as_deref().map(|c| format!("{}{}", marker, c));
        let close = format!("{}{}", row.close, marker);
        let cells = [
            row.date.as_str(),
            close.as_str(),
            row.open.as_str(),
            row.high.as_str(),
            row.low.as_str(),
        ];
        let line = match &change {
            Some(change) => row_line(cells.into_iter().chain([change.as_str()])),
            None => row_line(cells.into_iter()),
        };
        let _ = writeln!(out, "{}", line);
    }

    let window = view.window();
    let _ = write!(
        out,
        "Page {} of {} ({} rows)",
        window.page(),
        window.total_pages(),
        window.total_items()
    );
    out
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    cells
        .map(|cell| format!("{:<width$}", cell, width = COLUMN_WIDTH))
        .collect::<Vec<_>>()
        .join("")
        .trim_end()
        .to_string()
}

pub fn feed_ack(symbol: Symbol, ack: &FeedAck) -> String {
    format!(
        "{} row accepted (status: {}, rows processed: {}, action: {})",
        symbol.label(),
        ack.status.as_deref().unwrap_or("unknown"),
        ack.rows_processed
            .map(|n| n.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        ack.action.as_deref().unwrap_or("unknown"),
    )
}
