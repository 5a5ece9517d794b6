//! JSON file writers for the latest payload and the weekly archive copy.
//!
//! Both files are 2-space-indented UTF-8 JSON, overwritten in place. The
//! archive filename comes from the item's ISO week id, so a re-run within the
//! same week replaces that week's snapshot instead of accumulating files.
//!
//! The latest/archive pair is not written atomically; with a single weekly
//! writer there is no contention, and a crash between the two writes only
//! leaves the archive one run behind.

use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

use crate::models::{ScamItem, WeeklyPayload};

/// Fixed filename of the "latest" pointer file.
pub const LATEST_FILE: &str = "scam-of-the-week.json";

fn join(out_dir: &str, file: &str) -> String {
    format!("{}/{}", out_dir.trim_end_matches('/'), file)
}

/// Write the payload to the fixed "latest" filename inside `out_dir`.
#[instrument(level = "info", skip_all, fields(out_dir = %out_dir))]
pub async fn write_latest(payload: &WeeklyPayload, out_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(payload)?;
    let path = join(out_dir, LATEST_FILE);
    fs::write(&path, json).await?;
    info!(path = %path, "Wrote latest payload");
    Ok(())
}

/// Write the bare item to `<id>.json` inside `out_dir` — the per-week
/// archive/rollback copy, without the payload envelope.
#[instrument(level = "info", skip_all, fields(out_dir = %out_dir, id = %item.id))]
pub async fn write_archive(item: &ScamItem, out_dir: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(item)?;
    let path = join(out_dir, &format!("{}.json", item.id));
    fs::write(&path, json).await?;
    info!(path = %path, "Wrote weekly archive copy");
    Ok(())
}
