//! Contact Assistant - Main entry point
//!
//! Wires logging, configuration and the address book together and hands
//! control to the command loop.

use anyhow::Result;
use contact_assistant::book::AddressBook;
use contact_assistant::{repl, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter.
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr; stdout belongs to the conversation.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    // The one address book instance, owned here and passed down explicitly.
    let mut book = AddressBook::new();

    if let Err(e) = repl::run(&mut book, &config) {
        error!("Assistant loop failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
