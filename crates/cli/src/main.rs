//! Trolley terminal shell
//!
//! Reads cart commands from standard input, one per line.

use std::{io, process};

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trolley::cart::Cart;

use crate::{config::Config, shell::Shell};

mod config;
mod shell;

/// Trolley shell entry point
pub fn main() {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    info!(
        currency = config.currency.iso_alpha_code,
        "cart session started"
    );

    let mut shell = Shell::new(Cart::new(config.currency));

    if let Err(shell_error) = shell.run(io::stdin().lock(), io::stdout(), io::stderr()) {
        error!("shell stopped: {shell_error}");

        process::exit(1);
    }

    info!(
        items = shell.cart().len(),
        total = %shell.cart().formatted_total(),
        "cart session ended"
    );
}
