//! # Scamwatch
//!
//! A small automation pipeline that polls consumer-protection agency feeds
//! (FTC, FBI IC3, CISA), selects the most recent qualifying alert, reshapes
//! it into a fixed "scam of the week" JSON document, and validates that
//! document against a JSON Schema.
//!
//! ## Binaries
//!
//! - `build_scam_week`: fetch feeds, pick the newest entry with a title and
//!   a link, write `content/scam-of-the-week.json` plus a per-ISO-week
//!   archive copy (`content/2024-W37.json`).
//! - `validate_schema`: check `schema/scam.schema.json` against the 2020-12
//!   meta-schema, then validate the data file against it.
//!
//! ## Architecture
//!
//! Two sequential components with no shared runtime, communicating only
//! through the filesystem:
//! 1. **Fetch**: retrieve each configured feed, tolerating per-source failures
//! 2. **Select**: keep entries with a title and link, newest first
//! 3. **Transform**: clean the summary and attach the fixed editorial copy
//! 4. **Write**: latest payload + weekly archive, 2-space-indented JSON
//! 5. **Validate**: schema meta-check, then data validation (separate run)

use chrono::Local;
use std::error::Error;
use std::fmt;
use tracing::{info, instrument};

pub mod cli;
pub mod config;
pub mod feeds;
pub mod models;
pub mod outputs;
pub mod utils;
pub mod validate;

use config::BuildConfig;
use models::{ScamItem, WeeklyPayload};

/// Fatal aggregator condition: every source was fetched and nothing usable
/// came back.
#[derive(Debug)]
pub struct NoEntries;

impl fmt::Display for NoEntries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No feed entries found.")
    }
}

impl Error for NoEntries {}

/// Run one aggregation pass: fetch, select, transform, write.
///
/// The output directory is created and probed for writability before any
/// network traffic. If no usable entry survives filtering, the run fails
/// with [`NoEntries`] and no output file is written. Otherwise the newest
/// entry becomes this week's item and both the latest payload and the weekly
/// archive copy are written.
#[instrument(level = "info", skip_all)]
pub async fn run_build(config: &BuildConfig) -> Result<(), Box<dyn Error>> {
    utils::ensure_writable_dir(&config.out_dir).await?;

    let entries = feeds::fetch_entries(config).await;
    let Some(newest) = entries.first() else {
        return Err(Box::new(NoEntries));
    };
    info!(title = %newest.title, source = %newest.src, "Selected newest entry");

    let today = Local::now().date_naive();
    let item = ScamItem::from_entry(newest, config, today);
    let payload = WeeklyPayload::new(item);

    outputs::json::write_latest(&payload, &config.out_dir).await?;
    outputs::json::write_archive(&payload.items[0], &config.out_dir).await?;

    info!(id = %payload.items[0].id, "Aggregation complete");
    Ok(())
}
