//! Aggregator entry point: poll the agency feeds and write this week's
//! artifact.
//!
//! Exit code 0 on success; any stage error (no usable entries, unwritable
//! output directory, write failure) prints a plain-text diagnostic to stderr
//! and exits non-zero.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tfmt};

use scamwatch::cli::BuildArgs;
use scamwatch::config::BuildConfig;

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = BuildArgs::parse();
    info!(out_dir = %args.out_dir, "build_scam_week starting up");

    let config = BuildConfig {
        out_dir: args.out_dir,
        ..BuildConfig::default()
    };

    if let Err(e) = scamwatch::run_build(&config).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
