//! Shell configuration module

use clap::Parser;
use rusty_money::iso::Currency;
use trolley::pricing::currency_from_code;

/// Trolley shell configuration
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Trolley shopping cart shell", long_about = None)]
pub struct Config {
    /// Display currency for unit prices (GBP, USD or EUR)
    #[arg(short, long, env = "TROLLEY_CURRENCY", default_value = "USD", value_parser = parse_currency)]
    pub currency: &'static Currency,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    currency_from_code(code).ok_or_else(|| format!("unsupported currency: {code}"))
}
