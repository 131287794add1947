//! # Quill
//!
//! Command line entry point for the blog store.
//!
//! ```text
//! quill author create --name "Jane Doe" --phone-number 5551234567
//! quill post create --title "Top 10 Facts" --content "..." --category Fiction
//! ```

use clap::Parser;

mod commands;
mod config;
mod state;
mod telemetry;

use commands::Cli;
use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    let state = AppState::new(config.database.as_ref()).await?;

    commands::run(&state, cli.command).await
}
