//! # Tool Rental Checkout
//!
//! Interactive checkout at the rental counter.
//!
//! ## Usage
//! ```bash
//! cargo run -p rental-cli --bin tool-rental
//!
//! # JSON agreements, verbose logs on stderr
//! TOOL_RENTAL_LOG=debug cargo run -p rental-cli --bin tool-rental -- --json
//! ```
//!
//! ## Startup Sequence
//! 1. Load configuration (environment, then flags)
//! 2. Initialize tracing (stderr)
//! 3. Run the checkout session over stdin/stdout

use std::io;

use anyhow::Context;
use rental_cli::{CliConfig, Invocation, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = match CliConfig::load()?.with_args(std::env::args().skip(1))? {
        Invocation::Run(config) => config,
        Invocation::Help => {
            print!("{}", rental_cli::config::USAGE);
            return Ok(());
        }
    };

    init_tracing(&config.log_filter);
    info!(output = ?config.output, "starting checkout session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let completed = Session::new(stdin.lock(), stdout.lock(), config.output)
        .run()
        .context("checkout session failed")?;

    info!(completed, "checkout session finished");
    Ok(())
}

/// Installs the tracing subscriber. Logs go to stderr so stdout carries
/// only prompts and agreements.
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}
