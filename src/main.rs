//! Assistant Bot - Main entry point
//!
//! Runs the interactive address book on stdin/stdout. Logs go to stderr so
//! they never interleave with the session transcript.

use anyhow::Result;
use assistant_bot::cli::{run_session, Assistant};
use assistant_bot::models::AddressBook;
use assistant_bot::{Config, SystemClock};
use tokio::io::{stdin, stdout, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to avoid polluting the session on stdout)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Configuration loaded, birthday window: {} days",
        config.birthday_window_days
    );

    let mut assistant =
        Assistant::with_book(AddressBook::new(), SystemClock, config.birthday_window_days);

    if let Err(e) = run_session(&mut assistant, BufReader::new(stdin()), stdout(), &config.prompt).await {
        error!("Session aborted: {}", e);
        return Err(e.into());
    }

    info!("Assistant bot shutdown complete");
    Ok(())
}
