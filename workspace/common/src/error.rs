use thiserror::Error;

/// Failures talking to the remote forecast service.
///
/// The browser collapses all three into a generic message; the CLI prints
/// them as-is.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// The request never produced an HTTP response
    #[error("Request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("HTTP error {status}: {detail}")]
    Rejected { status: u16, detail: String },

    /// The response body did not have the expected shape
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Date strings that don't follow the expected layout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Date '{0}' must be in DD-MM-YYYY format")]
    MalformedDate(String),

    #[error("Filter date '{0}' must be in YYYY-MM-DD format")]
    MalformedFilterDate(String),
}

/// Data entry validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
