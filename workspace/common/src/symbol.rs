use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two series the forecast service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Symbol {
    /// NIFTY 50 index.
    #[default]
    #[serde(rename = "NIFTY")]
    Nifty,
    /// India VIX volatility index.
    #[serde(rename = "VIX")]
    Vix,
}

impl Symbol {
    pub const ALL: [Symbol; 2] = [Symbol::Nifty, Symbol::Vix];

    /// Path segment used by `/data/{symbol}` and `/feed/{symbol}`.
    pub fn path_segment(self) -> &'static str {
        match self {
            Symbol::Nifty => "nifty",
            Symbol::Vix => "vix",
        }
    }

    /// Short label shown on tabs and buttons.
    pub fn label(self) -> &'static str {
        match self {
            Symbol::Nifty => "NIFTY",
            Symbol::Vix => "VIX",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Symbol::Nifty => "NIFTY 50",
            Symbol::Vix => "India VIX",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Symbol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nifty" | "nifty50" | "nifty_50" => Ok(Symbol::Nifty),
            "vix" | "india_vix" | "indiavix" => Ok(Symbol::Vix),
            other => Err(format!("Unknown symbol '{}', expected 'nifty' or 'vix'", other)),
        }
    }
}
