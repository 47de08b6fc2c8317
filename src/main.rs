//! Proset - terminal client
//!
//! Plays the seven-card projective-set game against an HTTP backend or an
//! in-process dealer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use proset::cli::{Cli, Command};
use proset::{ClientConfig, HttpGateway, LocalDealer};
use tracing::instrument;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ClientConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            server_url,
            settle_delay_ms,
        } => run_play(config, server_url, settle_delay_ms).await,
        Command::Offline { seed } => run_offline(config, seed).await,
    }
}

/// Play against the HTTP backend
#[instrument(skip(config))]
async fn run_play(
    config: ClientConfig,
    server_url: Option<String>,
    settle_delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = config;
    if let Some(url) = server_url {
        config = config.with_server_url(url);
    }
    if let Some(delay) = settle_delay_ms {
        config = config.with_settle_delay_ms(delay);
    }

    let gateway = HttpGateway::new(config.server_url());
    proset::tui::run_tui(gateway, &config).await
}

/// Play against the in-process dealer
#[instrument(skip(config))]
async fn run_offline(config: ClientConfig, seed: Option<u64>) -> Result<()> {
    let gateway = LocalDealer::new(seed);
    proset::tui::run_tui(gateway, &config).await
}
