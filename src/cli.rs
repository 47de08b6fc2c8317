//! Command-line interface for proset.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Proset - a projective-set card game in the terminal
#[derive(Parser, Debug)]
#[command(name = "proset")]
#[command(about = "Play projective set against a card backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the client config file
    #[arg(short, long, global = true, default_value = "proset.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the HTTP card backend
    Play {
        /// Backend URL (overrides the config file)
        #[arg(long)]
        server_url: Option<String>,

        /// Pause between clearing and refilling slots, in milliseconds
        #[arg(long)]
        settle_delay_ms: Option<u64>,
    },

    /// Play offline against an in-process dealer
    Offline {
        /// Seed for a reproducible deal order
        #[arg(long)]
        seed: Option<u64>,
    },
}
