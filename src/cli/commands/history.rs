use anyhow::{Result, bail};
use common::{DateRange, ForecastService, HistoryView};
use tracing::{info, warn};

use crate::cli::HistoryArgs;
use crate::render;

pub async fn history<S>(service: &S, args: &HistoryArgs, default_days: u32) -> Result<String>
where
    S: ForecastService + ?Sized,
{
    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            bail!("--from {} is after --to {}", from, to);
        }
    }

    let days = args.days.unwrap_or(default_days);
    let rows = service.history(args.symbol, days).await?;
    info!(symbol = %args.symbol, days, fetched = rows.len(), "History fetched");

    let mut view = HistoryView::with_page_size(args.symbol, args.page_size);
    view.load(args.symbol, rows);
    view.set_range(DateRange::new(args.from, args.to));

    if !view.go_to_page(args.page) {
        warn!(
            requested = args.page,
            pages = view.window().total_pages(),
            "Page out of range, showing first page"
        );
    }

    Ok(render::history(&view))
}
