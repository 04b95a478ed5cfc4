//! Client-side filtering and pagination of historical price data.
//!
//! The service has no server-side paging: the viewer fetches a large
//! window once per symbol and everything below is derived from that cache.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::error::RecordError;
use crate::record::{PriceRecord, parse_input_date};
use crate::symbol::Symbol;

/// Rows per page in the history table.
pub const PAGE_SIZE: usize = 10;
/// Window requested by the history viewer.
pub const HISTORY_DAYS: u32 = 1000;
/// Window the service uses when a caller has no preference.
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Inclusive date bounds. Both ends optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Build a range from two `YYYY-MM-DD` strings, blank meaning open.
    pub fn parse_bounds(from: &str, to: &str) -> Result<Self, RecordError> {
        Ok(Self::new(parse_input_date(from)?, parse_input_date(to)?))
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Keep the records whose `Date` falls inside `range`, preserving order.
///
/// An unbounded range returns the input untouched. With any bound set, a
/// record whose date cannot be parsed never matches.
pub fn filter_records(records: &[PriceRecord], range: &DateRange) -> Vec<PriceRecord> {
    if range.is_unbounded() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| match record.trade_date() {
            Ok(date) => range.contains(date),
            Err(_) => false,
        })
        .cloned()
        .collect()
}

/// One page over a list of `total_items` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    total_items: usize,
    page_size: usize,
    page: usize,
}

impl PageWindow {
    /// `page` is 1-based. A page outside `[1, last_page]` falls back to the
    /// first page.
    pub fn new(total_items: usize, page_size: usize, page: usize) -> Self {
        let page_size = page_size.max(1);
        let last_page = total_items.div_ceil(page_size).max(1);
        let page = if page == 0 || page > last_page { 1 } else { page };
        Self {
            total_items,
            page_size,
            page,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Zero when there is nothing to show.
    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    /// Half-open index range of the current page.
    pub fn bounds(&self) -> (usize, usize) {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.bounds();
        let end = end.min(items.len());
        &items[start.min(end)..end]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}

/// State behind the history tab: active symbol, cached rows, filter bounds
/// and current page.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryView {
    symbol: Symbol,
    /// Newest first.
    raw: Vec<PriceRecord>,
    range: DateRange,
    page: usize,
    page_size: usize,
    skipped: usize,
    filtered: Vec<PriceRecord>,
}

impl Default for HistoryView {
    fn default() -> Self {
        Self::new(Symbol::default())
    }
}

impl HistoryView {
    pub fn new(symbol: Symbol) -> Self {
        Self::with_page_size(symbol, PAGE_SIZE)
    }

    pub fn with_page_size(symbol: Symbol, page_size: usize) -> Self {
        Self {
            symbol,
            raw: Vec::new(),
            range: DateRange::unbounded(),
            page: 1,
            page_size: page_size.max(1),
            skipped: 0,
            filtered: Vec::new(),
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows dropped from the last load because their date did not parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn raw_len(&self) -> usize {
        self.raw.len()
    }

    /// Switch series, clearing bounds, page and cache. Selecting the active
    /// symbol again leaves everything as it is. Returns whether it changed.
    pub fn select_symbol(&mut self, symbol: Symbol) -> bool {
        if symbol == self.symbol {
            return false;
        }
        debug!(from = %self.symbol, to = %symbol, "Selecting history symbol");
        self.symbol = symbol;
        self.range = DateRange::unbounded();
        self.page = 1;
        self.raw.clear();
        self.skipped = 0;
        self.refilter();
        true
    }

    /// Replace the cache with rows fetched for `symbol`, given oldest first
    /// as the service returns them.
    ///
    /// Rows for a symbol that is no longer active are ignored. Rows with a
    /// malformed date are dropped and counted in [`Self::skipped`].
    pub fn load(&mut self, symbol: Symbol, rows: Vec<PriceRecord>) -> bool {
        if symbol != self.symbol {
            debug!(%symbol, active = %self.symbol, "Ignoring rows for inactive symbol");
            return false;
        }

        let total = rows.len();
        let (mut valid, invalid): (Vec<_>, Vec<_>) =
            rows.into_iter().partition(|row| row.trade_date().is_ok());
        if !invalid.is_empty() {
            warn!(
                %symbol,
                skipped = invalid.len(),
                first = %invalid[0].date,
                "Dropping rows with malformed dates"
            );
        }
        valid.reverse();

        self.skipped = invalid.len();
        self.raw = valid;
        self.refilter();
        if self.page > self.last_page() {
            self.page = 1;
        }
        debug!(%symbol, total, kept = self.raw.len(), "History rows loaded");
        true
    }

    pub fn set_from(&mut self, from: Option<NaiveDate>) {
        self.set_range(DateRange::new(from, self.range.to));
    }

    pub fn set_to(&mut self, to: Option<NaiveDate>) {
        self.set_range(DateRange::new(self.range.from, to));
    }

    /// Any bound change sends the user back to the first page.
    pub fn set_range(&mut self, range: DateRange) {
        trace!(?range, "History range changed");
        self.range = range;
        self.page = 1;
        self.refilter();
    }

    pub fn next_page(&mut self) {
        if self.page < self.last_page() {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Jump to a page; out-of-range requests are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.last_page() {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn filtered(&self) -> &[PriceRecord] {
        &self.filtered
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.filtered.len(), self.page_size, self.page)
    }

    pub fn current_page_rows(&self) -> &[PriceRecord] {
        self.window().slice(&self.filtered)
    }

    fn last_page(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    fn refilter(&mut self) {
        self.filtered = filter_records(&self.raw, &self.range);
    }
}
