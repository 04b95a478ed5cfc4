//! Common client-side types and view logic shared between the browser
//! dashboard and the native command-line client.
//!
//! Everything here is platform independent: the wire shapes of the remote
//! forecast service, the history filter/paginate state, the data entry
//! forms and the dashboard refresh state. The transports live in the
//! frontend (gloo-net) and in the CLI (reqwest) and plug in through
//! [`ForecastService`].

pub mod converters;
pub mod entry;
pub mod error;
pub mod forecast;
pub mod history;
pub mod record;
pub mod service;
pub mod symbol;

pub use converters::{TableRow, format_number, humanize_identifier};
pub use entry::{EntryField, EntryForm, EntryNotifier, EntryOutcome, submit_entry};
pub use error::{EntryError, RecordError, ServiceError};
pub use forecast::{
    Dashboard, DashboardState, DirectionRegime, ExpiryType, ForecastMetrics, ForecastSnapshot,
    LegAction, MarketRegime, Recommendation, RequestTicket, StatCard, Strategy, Tone,
    VolatilityRegime, FORECAST_ADVISORY,
};
pub use history::{
    DEFAULT_HISTORY_DAYS, DateRange, HISTORY_DAYS, HistoryView, PAGE_SIZE, PageWindow,
    filter_records,
};
pub use record::{
    FeedAck, FeedRow, HistoryPayload, NiftyFeedRow, PriceRecord, VixFeedRow, parse_input_date,
    parse_record_date,
};
pub use service::ForecastService;
pub use symbol::Symbol;
