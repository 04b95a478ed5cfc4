use std::cell::RefCell;

use anyhow::{Result, anyhow};
use common::{EntryField, EntryForm, EntryNotifier, EntryOutcome, ForecastService, Symbol, submit_entry};
use tracing::info;

use crate::cli::PriceArgs;
use crate::render;

/// Raw command-line values of one entry, validated by [`EntryForm`].
#[derive(Debug, Clone)]
pub struct FeedFields {
    form: EntryForm,
}

impl FeedFields {
    fn prices(symbol: Symbol, prices: PriceArgs) -> EntryForm {
        EntryForm::new(symbol)
            .with(EntryField::Date, prices.date)
            .with(EntryField::Open, prices.open)
            .with(EntryField::High, prices.high)
            .with(EntryField::Low, prices.low)
            .with(EntryField::Close, prices.close)
    }

    pub fn nifty(prices: PriceArgs, shares_traded: String, turnover: String) -> Self {
        let form = Self::prices(Symbol::Nifty, prices)
            .with(EntryField::SharesTraded, shares_traded)
            .with(EntryField::Turnover, turnover);
        Self { form }
    }

    pub fn vix(prices: PriceArgs, prev_close: String) -> Self {
        let form = Self::prices(Symbol::Vix, prices).with(EntryField::PrevClose, prev_close);
        Self { form }
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }
}

/// Collects alerts instead of showing them.
#[derive(Default)]
struct TerminalNotifier {
    alerts: RefCell<Vec<String>>,
}

impl EntryNotifier for TerminalNotifier {
    fn updated(&self, symbol: Symbol) {
        info!(%symbol, "Service data updated");
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

pub async fn feed<S>(service: &S, fields: FeedFields) -> Result<String>
where
    S: ForecastService + ?Sized,
{
    let notifier = TerminalNotifier::default();
    let symbol = fields.form().symbol();
    let outcome = submit_entry(service, fields.form(), &notifier).await;
    let message = notifier.alerts.borrow().join("\n");

    match outcome {
        EntryOutcome::Submitted(ack) => Ok(format!("{}\n{}", message, render::feed_ack(symbol, &ack))),
        EntryOutcome::Invalid(err) => Err(anyhow!(err).context(format!("Invalid {} entry", symbol.label()))),
        EntryOutcome::Failed(err) => Err(anyhow!(err).context(message)),
    }
}
