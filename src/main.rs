// SPDX-License-Identifier: MIT
//
// tinto — build accessible UI color themes from two seed colors.
//
//   tinto build '#3b82f6' '#10b981'            CSS variables on stdout
//   tinto build --input theme.json --format json
//   tinto contrast '#111111' '#3b82f6'
//   tinto harmonize '#3b82f6' '#2563eb' --strategy triadic
//
// Diagnostics go to stderr through `tracing`; set TINTO_LOG (or RUST_LOG)
// to e.g. `debug` to see the engine's decisions.

mod cli;
mod commands;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const DEFAULT_LOG_LEVEL: &str = "warn";

fn init_logging() {
    let filter = EnvFilter::try_from_env("TINTO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let out = commands::handle(cli.command)?;
    io::stdout().lock().write_all(out.as_bytes())?;
    Ok(())
}
