//! Data models for feed entries and the weekly scam artifact.
//!
//! This module defines the core data structures used throughout the application:
//! - [`RawEntry`]: One item as pulled out of an RSS/Atom feed, untrusted and loosely shaped
//! - [`ScamItem`]: The canonical record describing the selected scam alert for one ISO week
//! - [`SourceRef`]: A named link back to the agency that published the alert
//! - [`WeeklyPayload`]: The versioned envelope written to the "latest" file
//!
//! Field names are snake_case and match `schema/scam.schema.json`, which is the
//! authoritative description of the serialized shape.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::BuildConfig;
use crate::utils;

/// A single feed item as collected from a source, before selection.
///
/// All fields default to the empty string when the feed omits them. The
/// `published` field is the source-supplied timestamp string, kept verbatim:
/// formats differ between feeds and the value is only ever used as an opaque
/// sortable token, never parsed into a date.
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Display name of the source the entry came from (e.g. "FTC").
    pub src: String,
    /// Entry headline, trimmed.
    pub title: String,
    /// Raw summary/description markup, cleaned later by [`utils::clean`].
    pub summary_raw: String,
    /// Entry link, verbatim from the feed.
    pub link: String,
    /// Source-supplied date string, verbatim from the feed.
    pub published: String,
}

/// A named link back to the agency alert backing a [`ScamItem`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceRef {
    pub name: String,
    pub url: String,
}

/// The canonical scam-of-the-week record, the system's durable artifact.
///
/// # Identity
///
/// `id` is derived solely from the generation date (ISO week number), never
/// from the entry's own published date. Two runs in the same ISO week produce
/// the same `id`, so the per-week archive file is overwritten rather than
/// duplicated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScamItem {
    /// ISO week identifier, e.g. `"2024-W37"`.
    pub id: String,
    /// ISO calendar date of generation, e.g. `"2024-09-09"`.
    pub week_of: String,
    /// Headline of the selected alert.
    pub title: String,
    /// Cleaned summary, at most 600 characters and never empty.
    pub summary: String,
    /// Fixed editorial list of warning signs (always 3 entries).
    pub red_flags: Vec<String>,
    /// Fixed editorial list of recommended actions (always 3 entries).
    pub what_to_do: Vec<String>,
    /// Exactly one reference to the originating agency alert.
    pub sources: Vec<SourceRef>,
    /// Reserved for later editorial use; always empty at generation time.
    pub hero_image: String,
}

impl ScamItem {
    /// Map one selected [`RawEntry`] into the canonical record.
    ///
    /// Pure aside from the injected `today`, which drives both `id` and
    /// `week_of`. The summary is the cleaned feed summary, or the configured
    /// fallback sentence when cleaning yields an empty string. `red_flags`
    /// and `what_to_do` come straight from the configuration, not from the
    /// entry.
    pub fn from_entry(entry: &RawEntry, config: &BuildConfig, today: NaiveDate) -> Self {
        let cleaned = utils::clean(&entry.summary_raw, config.summary_max_len);
        let summary = if cleaned.is_empty() {
            config.fallback_summary.clone()
        } else {
            cleaned
        };

        ScamItem {
            id: utils::iso_week_id(today),
            week_of: today.to_string(),
            title: entry.title.clone(),
            summary,
            red_flags: config.red_flags.clone(),
            what_to_do: config.what_to_do.clone(),
            sources: vec![SourceRef {
                name: entry.src.clone(),
                url: entry.link.clone(),
            }],
            hero_image: String::new(),
        }
    }
}

/// Versioned envelope around the weekly item, written to the "latest" file.
///
/// `items` always holds exactly one element today; the array shape is
/// forward-compatible scaffolding, not a multi-item container.
#[derive(Debug, Deserialize, Serialize)]
pub struct WeeklyPayload {
    /// Payload format version, currently always `1`.
    pub version: u32,
    /// UTC generation timestamp, seconds precision, trailing `Z`.
    pub updated_at: String,
    /// The selected item, wrapped in a single-element array.
    pub items: Vec<ScamItem>,
}

impl WeeklyPayload {
    /// Wrap one [`ScamItem`], stamping the current UTC time.
    pub fn new(item: ScamItem) -> Self {
        WeeklyPayload {
            version: 1,
            updated_at: utils::utc_timestamp(),
            items: vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(summary_raw: &str) -> RawEntry {
        RawEntry {
            src: "FTC".to_string(),
            title: "Fake toll-road texts are back".to_string(),
            summary_raw: summary_raw.to_string(),
            link: "https://consumer.ftc.gov/alerts/fake-toll-texts".to_string(),
            published: "Mon, 09 Sep 2024 12:00:00 GMT".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_entry_shapes_fixed_lists() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry("<p>Watch out.</p>"), &config, date(2024, 9, 9));

        assert_eq!(item.red_flags.len(), 3);
        assert_eq!(item.what_to_do.len(), 3);
        assert_eq!(item.sources.len(), 1);
        assert_eq!(item.hero_image, "");
        assert_eq!(item.sources[0].name, "FTC");
        assert_eq!(
            item.sources[0].url,
            "https://consumer.ftc.gov/alerts/fake-toll-texts"
        );
    }

    #[test]
    fn test_from_entry_week_identity() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry(""), &config, date(2024, 9, 9));
        assert_eq!(item.id, "2024-W37");
        assert_eq!(item.week_of, "2024-09-09");
    }

    #[test]
    fn test_from_entry_same_week_same_id() {
        let config = BuildConfig::default();
        let a = ScamItem::from_entry(&entry(""), &config, date(2024, 9, 9));
        let b = ScamItem::from_entry(&entry(""), &config, date(2024, 9, 13));
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_from_entry_empty_summary_falls_back() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry(""), &config, date(2024, 9, 9));
        assert_eq!(
            item.summary,
            "Key consumer scam alert summarized for this week."
        );

        let tags_only = ScamItem::from_entry(&entry("<br/><p> </p>"), &config, date(2024, 9, 9));
        assert_eq!(
            tags_only.summary,
            "Key consumer scam alert summarized for this week."
        );
    }

    #[test]
    fn test_from_entry_cleans_summary() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry("<b>Hi</b> &amp; bye"), &config, date(2024, 9, 9));
        assert_eq!(item.summary, "Hi & bye");
    }

    #[test]
    fn test_payload_wraps_single_item() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry("x"), &config, date(2024, 9, 9));
        let payload = WeeklyPayload::new(item);

        assert_eq!(payload.version, 1);
        assert_eq!(payload.items.len(), 1);
        assert!(payload.updated_at.ends_with('Z'));
    }

    #[test]
    fn test_payload_serialization_shape() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry("x"), &config, date(2024, 9, 9));
        let payload = WeeklyPayload::new(item);

        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"version\":1"));
        assert!(json.contains("\"2024-W37\""));
        assert!(json.contains("\"hero_image\":\"\""));
    }

    #[test]
    fn test_scam_item_roundtrip() {
        let config = BuildConfig::default();
        let item = ScamItem::from_entry(&entry("summary"), &config, date(2024, 9, 9));
        let json = serde_json::to_string(&item).unwrap();
        let back: ScamItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, item.id);
        assert_eq!(back.sources, item.sources);
    }
}
