use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use common::{PAGE_SIZE, Symbol};
use tracing::debug;

pub mod commands;

use crate::client::ReqwestForecastService;
use crate::config::ClientConfig;
use commands::{FeedFields, feed, history, predict};

#[derive(Parser)]
#[command(name = "volstack")]
#[command(about = "Command-line client for the VolStack forecast service")]
#[command(version)]
pub struct Cli {
    /// Base URL of the forecast service
    ///
    /// Overrides `api_url` from volstack.toml and VOLSTACK_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the latest forecast and strategy recommendation
    Predict {
        /// Print the raw snapshot as JSON
        #[arg(long)]
        json: bool,
    },
    /// Browse daily price history, newest first
    History(HistoryArgs),
    /// Append or replace one day of prices
    Feed {
        #[command(subcommand)]
        row: FeedCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct HistoryArgs {
    /// nifty or vix
    pub symbol: Symbol,

    /// Days of history to request (defaults to `history_days` from config)
    #[arg(long)]
    pub days: Option<u32>,

    /// First day to show, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last day to show, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    #[arg(long, default_value_t = PAGE_SIZE)]
    pub page_size: usize,
}

#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Trading day (DD-MM-YYYY)
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub open: String,
    #[arg(long)]
    pub high: String,
    #[arg(long)]
    pub low: String,
    #[arg(long)]
    pub close: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FeedCommand {
    /// NIFTY 50 daily bar
    Nifty {
        #[command(flatten)]
        prices: PriceArgs,
        #[arg(long)]
        shares_traded: String,
        /// Turnover in ₹ crore
        #[arg(long)]
        turnover: String,
    },
    /// India VIX daily bar
    Vix {
        #[command(flatten)]
        prices: PriceArgs,
        #[arg(long)]
        prev_close: String,
    },
}

impl From<FeedCommand> for FeedFields {
    fn from(command: FeedCommand) -> Self {
        match command {
            FeedCommand::Nifty {
                prices,
                shares_traded,
                turnover,
            } => FeedFields::nifty(prices, shares_traded, turnover),
            FeedCommand::Vix { prices, prev_close } => FeedFields::vix(prices, prev_close),
        }
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = ClientConfig::load()?;
        if let Some(api_url) = self.api_url {
            config = config.with_api_url(api_url)?;
        }
        let service = ReqwestForecastService::new(&config)?;
        debug!(api_url = service.base_url(), "Using forecast service");
        let output = match self.command {
            Commands::Predict { json } => predict(&service, json).await?,
            Commands::History(args) => history(&service, &args, config.history_days).await?,
            Commands::Feed { row } => feed(&service, row.into()).await?,
        };

        println!("{}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_history_args() {
        let cli = Cli::try_parse_from([
            "volstack",
            "--api-url",
            "http://10.0.0.1:8000",
            "history",
            "india_vix",
            "--from",
            "2024-01-10",
            "--page",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://10.0.0.1:8000"));
        match cli.command {
            Commands::History(args) => {
                assert_eq!(args.symbol, Symbol::Vix);
                assert_eq!(args.from, NaiveDate::from_ymd_opt(2024, 1, 10));
                assert_eq!(args.to, None);
                assert_eq!(args.page, 2);
                assert_eq!(args.page_size, 10);
                assert_eq!(args.days, None);
            }
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn test_parse_feed_vix() {
        let cli = Cli::try_parse_from([
            "volstack", "feed", "vix", "--date", "02-01-2024", "--open", "14.1", "--high",
            "15.0", "--low", "13.9", "--close", "14.6", "--prev-close", "14.2",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Feed { row: FeedCommand::Vix { ref prev_close, .. } } if prev_close == "14.2"
        ));
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert!(Cli::try_parse_from(["volstack", "history", "sensex"]).is_err());
    }
}
