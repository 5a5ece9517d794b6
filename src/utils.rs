//! Utility functions for text cleaning, week identifiers, and file system checks.
//!
//! The text cleaner is the heart of the summary pipeline: feed payloads arrive
//! as loosely structured HTML snippets and must come out as a bounded,
//! plain-text sentence or two.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{debug, info, instrument};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Sanitize a feed-supplied HTML snippet into bounded plain text.
///
/// Tags are stripped by regex substitution rather than a full HTML parser;
/// feed payloads are generally well-formed snippets and the cruder pass keeps
/// the dependency surface small. Runs of whitespace collapse to single
/// spaces, HTML entities are unescaped, and the result is trimmed and cut to
/// `max_len` characters with any whitespace left dangling by the cut trimmed
/// again.
///
/// Always returns a string (possibly empty); there is no failure path.
///
/// # Examples
///
/// ```
/// use scamwatch::utils::clean;
/// assert_eq!(clean("", 600), "");
/// assert_eq!(clean("<b>Hi</b> &amp; bye", 600), "Hi & bye");
/// ```
pub fn clean(text: &str, max_len: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let no_tags = TAG_RE.replace_all(text, " ");
    let collapsed = WS_RE.replace_all(&no_tags, " ");
    let unescaped = html_escape::decode_html_entities(collapsed.as_ref());
    let trimmed = unescaped.trim();
    let cut: String = trimmed.chars().take(max_len).collect();
    cut.trim_end().to_string()
}

/// Format a date as an ISO 8601 week identifier, e.g. `2024-W37`.
///
/// Uses the ISO week-numbering year, which differs from the calendar year
/// around the new year boundary (2024-12-30 falls in 2025-W01).
pub fn iso_week_id(date: NaiveDate) -> String {
    let week = date.iso_week();
    format!("{}-W{:02}", week.year(), week.week())
}

/// Current UTC time as an ISO-8601 string with seconds precision and a
/// trailing `Z`, e.g. `2024-09-09T14:03:11Z`.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if absent, then probes writability by creating and
/// immediately removing a scratch file. Failing early here produces a clearer
/// diagnostic than a write error after the feeds have already been fetched.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;

    let probe = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe);
            debug!("Output directory is writable");
            Ok(())
        }
        Err(e) => {
            info!(error = %e, "Output directory probe failed");
            Err(Box::new(e))
        }
    }
}
