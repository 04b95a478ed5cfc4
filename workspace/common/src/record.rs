//! Wire shapes for historical price data and the feed endpoints.
//!
//! Field names follow the service's CSV column headers verbatim, which is
//! why most of them need an explicit `rename`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::RecordError;
use crate::symbol::Symbol;

/// Layout of the `Date` column.
pub const RECORD_DATE_FORMAT: &str = "%d-%m-%Y";
/// Layout produced by `<input type="date">`.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One day of price data as returned by `GET /data/{symbol}`.
///
/// Numeric columns are optional: the service serializes straight from a CSV
/// file, so any cell can be empty or hold something non-numeric.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open", default, deserialize_with = "lenient_number")]
    pub open: Option<f64>,
    #[serde(rename = "High", default, deserialize_with = "lenient_number")]
    pub high: Option<f64>,
    #[serde(rename = "Low", default, deserialize_with = "lenient_number")]
    pub low: Option<f64>,
    #[serde(rename = "Close", default, deserialize_with = "lenient_number")]
    pub close: Option<f64>,

    // NIFTY only
    #[serde(
        rename = "Shares Traded",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub shares_traded: Option<f64>,
    #[serde(
        rename = "Turnover (₹ Cr)",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub turnover_cr: Option<f64>,

    // VIX only
    #[serde(
        rename = "Prev. Close",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub prev_close: Option<f64>,
    #[serde(
        rename = "Change",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub change: Option<f64>,
    #[serde(
        rename = "% Change",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub change_pct: Option<f64>,
}

impl PriceRecord {
    /// Parsed `Date` column.
    pub fn trade_date(&self) -> Result<NaiveDate, RecordError> {
        parse_record_date(&self.date)
    }
}

/// Parse a `DD-MM-YYYY` date as stored by the service.
pub fn parse_record_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value.trim(), RECORD_DATE_FORMAT)
        .map_err(|_| RecordError::MalformedDate(value.to_string()))
}

/// Parse a `YYYY-MM-DD` filter bound. Blank input means "no bound".
pub fn parse_input_date(value: &str) -> Result<Option<NaiveDate>, RecordError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT)
        .map(Some)
        .map_err(|_| RecordError::MalformedFilterDate(value.to_string()))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(Raw::Other(_)) | None => None,
    };
    Ok(value.filter(|n| n.is_finite()))
}

/// Body of `GET /data/{symbol}`.
///
/// The service wraps rows in an envelope; a bare array is accepted too.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HistoryPayload {
    Envelope {
        #[serde(default)]
        symbol: Option<String>,
        #[serde(default)]
        rows_returned: Option<usize>,
        data: Vec<PriceRecord>,
    },
    Rows(Vec<PriceRecord>),
}

impl HistoryPayload {
    /// Rows in service order (oldest first).
    pub fn into_rows(self) -> Vec<PriceRecord> {
        match self {
            HistoryPayload::Envelope { data, .. } => data,
            HistoryPayload::Rows(rows) => rows,
        }
    }
}

/// A NIFTY row accepted by `POST /feed/nifty`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NiftyFeedRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Shares Traded")]
    pub shares_traded: u64,
    #[serde(rename = "Turnover (₹ Cr)")]
    pub turnover_cr: f64,
}

/// A VIX row accepted by `POST /feed/vix`. Change columns are derived by the
/// service from `Prev. Close`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VixFeedRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Open")]
    pub open: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Close")]
    pub close: f64,
    #[serde(rename = "Prev. Close")]
    pub prev_close: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeedRow {
    Nifty(NiftyFeedRow),
    Vix(VixFeedRow),
}

impl FeedRow {
    pub fn symbol(&self) -> Symbol {
        match self {
            FeedRow::Nifty(_) => Symbol::Nifty,
            FeedRow::Vix(_) => Symbol::Vix,
        }
    }

    pub fn date(&self) -> &str {
        match self {
            FeedRow::Nifty(row) => &row.date,
            FeedRow::Vix(row) => &row.date,
        }
    }
}

/// Acknowledgement returned by the feed endpoints. Never validated, only
/// logged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub rows_processed: Option<usize>,
    #[serde(default)]
    pub action: Option<String>,
}

impl FeedAck {
    /// Lenient decode: an unreadable body is still an acknowledgement.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_record_date() {
        assert_eq!(
            parse_record_date("05-02-2024"),
            Ok(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap())
        );
        assert!(matches!(
            parse_record_date("2024-02-05"),
            Err(RecordError::MalformedDate(_))
        ));
        assert!(parse_record_date("31-02-2024").is_err());
        assert!(parse_record_date("").is_err());
    }

    #[test]
    fn test_parse_input_date_blank_is_unbounded() {
        assert_eq!(parse_input_date(""), Ok(None));
        assert_eq!(parse_input_date("   "), Ok(None));
        assert_eq!(
            parse_input_date("2024-01-10"),
            Ok(Some(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()))
        );
        assert!(parse_input_date("10-01-2024").is_err());
    }

    #[test]
    fn test_decode_nifty_row_with_csv_headers() {
        let json = r#"{
            "Date": "02-01-2024",
            "Open": 21727.75,
            "High": 21755.6,
            "Low": 21555.65,
            "Close": 21665.8,
            "Shares Traded": 262818424,
            "Turnover (₹ Cr)": 23498.65
        }"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, "02-01-2024");
        assert_eq!(record.close, Some(21665.8));
        assert_eq!(record.shares_traded, Some(262818424.0));
        assert_eq!(record.turnover_cr, Some(23498.65));
        assert_eq!(record.change, None);
    }

    #[test]
    fn test_decode_tolerates_strings_and_blanks() {
        let json = r#"{
            "Date": "02-01-2024",
            "Open": "14.5",
            "High": "",
            "Low": null,
            "Close": "n/a",
            "Change": -0.35,
            "% Change": true
        }"#;
        let record: PriceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.open, Some(14.5));
        assert_eq!(record.high, None);
        assert_eq!(record.low, None);
        assert_eq!(record.close, None);
        assert_eq!(record.change, Some(-0.35));
        assert_eq!(record.change_pct, None);
    }

    #[test]
    fn test_history_payload_envelope_and_bare_rows() {
        let envelope = r#"{"symbol":"NIFTY","rows_returned":1,"data":[{"Date":"01-01-2024","Close":1}]}"#;
        let payload: HistoryPayload = serde_json::from_str(envelope).unwrap();
        assert_eq!(payload.into_rows().len(), 1);

        let bare = r#"[{"Date":"01-01-2024"},{"Date":"02-01-2024"}]"#;
        let payload: HistoryPayload = serde_json::from_str(bare).unwrap();
        let rows = payload.into_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date, "02-01-2024");
    }

    #[test]
    fn test_feed_row_uses_column_names() {
        let row = FeedRow::Vix(VixFeedRow {
            date: "03-01-2024".to_string(),
            open: 14.1,
            high: 14.9,
            low: 13.8,
            close: 14.4,
            prev_close: 14.0,
        });
        let value = serde_json::to_value(vec![&row]).unwrap();
        assert_eq!(value[0]["Prev. Close"], 14.0);
        assert_eq!(value[0]["Date"], "03-01-2024");
        assert_eq!(row.symbol(), Symbol::Vix);
    }

    #[test]
    fn test_feed_ack_is_lenient() {
        let ack = FeedAck::from_body(r#"{"status":"success","rows_processed":1,"action":"upsert"}"#);
        assert_eq!(ack.rows_processed, Some(1));
        assert_eq!(FeedAck::from_body("not json"), FeedAck::default());
    }
}
