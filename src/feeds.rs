//! Feed retrieval, parsing, and entry selection.
//!
//! Each configured source is fetched in order and parsed as either RSS 2.0 or
//! Atom. The two formats are deserialized with `quick-xml` into narrow structs
//! that keep every date string verbatim: `published` values are heterogeneous
//! across the agencies and are deliberately treated as opaque sortable tokens,
//! never parsed into real dates.
//!
//! A failing source — network error, non-success status, unparseable XML —
//! contributes zero entries and is logged; it never aborts the run.

use futures::stream::{self, StreamExt};
use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

use crate::config::{BuildConfig, FeedSource};
use crate::models::RawEntry;

// --- RSS 2.0 wire shape ---

#[derive(Debug, Deserialize)]
struct Rss {
    channel: RssChannel,
}

#[derive(Debug, Deserialize)]
struct RssChannel {
    #[serde(rename = "item", default)]
    items: Vec<RssItem>,
}

#[derive(Debug, Deserialize)]
struct RssItem {
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
}

// --- Atom wire shape ---

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<AtomText>,
    summary: Option<AtomText>,
    content: Option<AtomText>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    published: Option<String>,
    updated: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomText {
    #[serde(rename = "$text")]
    value: Option<String>,
}

impl AtomText {
    fn into_value(self) -> String {
        self.value.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
    #[serde(rename = "@rel")]
    rel: Option<String>,
}

/// Parse one feed body into raw entries, taking at most `cap` items in
/// feed-native order.
///
/// The body is tried as RSS first, then as Atom; a document that is neither
/// yields an empty vector. Missing fields default to the empty string. Atom
/// entries fall back from `summary` to `content` and from `published` to
/// `updated`, mirroring what the agencies actually serve.
pub fn parse_feed(src_name: &str, body: &str, cap: usize) -> Vec<RawEntry> {
    if let Ok(rss) = from_str::<Rss>(body) {
        return rss
            .channel
            .items
            .into_iter()
            .take(cap)
            .map(|item| RawEntry {
                src: src_name.to_string(),
                title: item.title.as_deref().unwrap_or("").trim().to_string(),
                summary_raw: item.description.unwrap_or_default(),
                link: item.link.unwrap_or_default(),
                published: item.pub_date.unwrap_or_default(),
            })
            .collect();
    }

    match from_str::<AtomFeed>(body) {
        Ok(feed) => feed
            .entries
            .into_iter()
            .take(cap)
            .map(|entry| {
                let summary_raw = entry
                    .summary
                    .map(AtomText::into_value)
                    .filter(|s| !s.is_empty())
                    .or_else(|| entry.content.map(AtomText::into_value))
                    .unwrap_or_default();
                RawEntry {
                    src: src_name.to_string(),
                    title: entry
                        .title
                        .map(AtomText::into_value)
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                    summary_raw,
                    link: pick_link(&entry.links),
                    published: entry.published.or(entry.updated).unwrap_or_default(),
                }
            })
            .collect(),
        Err(e) => {
            warn!(source = src_name, error = %e, "Feed is neither RSS nor Atom; skipping");
            Vec::new()
        }
    }
}

/// Prefer the alternate link, like feed readers do; fall back to the first
/// link carrying an href.
fn pick_link(links: &[AtomLink]) -> String {
    links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| links.first())
        .and_then(|l| l.href.clone())
        .unwrap_or_default()
}

/// Fetch and parse a single source, tolerating every failure mode.
#[instrument(level = "info", skip_all, fields(source = %src.name))]
async fn fetch_feed(src: &FeedSource, cap: usize) -> Vec<RawEntry> {
    let response = match reqwest::get(&src.url).await {
        Ok(r) => r,
        Err(e) => {
            warn!(url = %src.url, error = %e, "Feed request failed");
            return Vec::new();
        }
    };
    if !response.status().is_success() {
        warn!(url = %src.url, status = %response.status(), "Feed returned non-success status");
        return Vec::new();
    }
    let body = match response.text().await {
        Ok(b) => b,
        Err(e) => {
            warn!(url = %src.url, error = %e, "Failed to read feed body");
            return Vec::new();
        }
    };

    let entries = parse_feed(&src.name, &body, cap);
    info!(count = entries.len(), "Collected feed entries");
    entries
}

/// Drop entries lacking a title or link, then sort newest-first by the raw
/// `published` string.
///
/// Plain string comparison over heterogeneous date formats is a documented,
/// intentional simplification: it is a best-effort freshness signal, not a
/// guaranteed chronological order. Date-aware ordering would be a separate
/// feature, not a fix.
pub fn select_entries(mut entries: Vec<RawEntry>) -> Vec<RawEntry> {
    entries.retain(|e| !e.title.is_empty() && !e.link.is_empty());
    entries.sort_by(|a, b| b.published.cmp(&a.published));
    entries
}

/// Fetch every configured source in order and return the filtered, sorted
/// entries across all of them.
#[instrument(level = "info", skip_all)]
pub async fn fetch_entries(config: &BuildConfig) -> Vec<RawEntry> {
    let cap = config.per_source_cap;
    let per_source: Vec<Vec<RawEntry>> = stream::iter(config.sources.clone())
        .then(move |src| async move { fetch_feed(&src, cap).await })
        .collect()
        .await;

    let collected: Vec<RawEntry> = per_source.into_iter().flatten().collect();
    debug!(count = collected.len(), "Entries collected across sources");

    let selected = select_entries(collected);
    info!(count = selected.len(), "Usable entries after filtering");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>Consumer Alerts</title>
    <item>
      <title> Fake toll-road texts </title>
      <link>https://consumer.ftc.gov/alerts/fake-toll-texts</link>
      <description><![CDATA[<p>Scammers send <b>urgent</b> texts.</p>]]></description>
      <pubDate>Mon, 09 Sep 2024 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Grandparent scams</title>
      <link>https://consumer.ftc.gov/alerts/grandparent</link>
      <description>An old favorite returns.</description>
      <pubDate>Sun, 08 Sep 2024 09:30:00 GMT</pubDate>
    </item>
    <item>
      <title>No link item</title>
      <description>Missing link entirely.</description>
    </item>
  </channel>
</rss>"#;

    const ATOM_FIXTURE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>IC3 News</title>
  <entry>
    <title>Business email compromise alert</title>
    <link rel="alternate" href="https://www.ic3.gov/news/bec-alert"/>
    <summary>Wire transfer fraud is rising.</summary>
    <published>2024-09-10T08:00:00Z</published>
    <updated>2024-09-10T09:00:00Z</updated>
  </entry>
  <entry>
    <title>Ransomware advisory</title>
    <link href="https://www.ic3.gov/news/ransomware"/>
    <content>Details in the content block.</content>
    <updated>2024-09-05T10:00:00Z</updated>
  </entry>
</feed>"#;

    fn raw(title: &str, link: &str, published: &str) -> RawEntry {
        RawEntry {
            src: "TEST".to_string(),
            title: title.to_string(),
            summary_raw: String::new(),
            link: link.to_string(),
            published: published.to_string(),
        }
    }

    #[test]
    fn test_parse_rss_fixture() {
        let entries = parse_feed("FTC", RSS_FIXTURE, 10);
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].src, "FTC");
        assert_eq!(entries[0].title, "Fake toll-road texts");
        assert_eq!(entries[0].link, "https://consumer.ftc.gov/alerts/fake-toll-texts");
        assert_eq!(entries[0].summary_raw, "<p>Scammers send <b>urgent</b> texts.</p>");
        assert_eq!(entries[0].published, "Mon, 09 Sep 2024 12:00:00 GMT");

        // missing fields default to empty strings
        assert_eq!(entries[2].link, "");
        assert_eq!(entries[2].published, "");
    }

    #[test]
    fn test_parse_atom_fixture() {
        let entries = parse_feed("FBI IC3", ATOM_FIXTURE, 10);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].title, "Business email compromise alert");
        assert_eq!(entries[0].link, "https://www.ic3.gov/news/bec-alert");
        assert_eq!(entries[0].summary_raw, "Wire transfer fraud is rising.");
        assert_eq!(entries[0].published, "2024-09-10T08:00:00Z");

        // summary missing: fall back to content; published missing: fall back to updated
        assert_eq!(entries[1].summary_raw, "Details in the content block.");
        assert_eq!(entries[1].published, "2024-09-05T10:00:00Z");
    }

    #[test]
    fn test_parse_feed_caps_per_source() {
        let items: String = (0..15)
            .map(|i| {
                format!(
                    "<item><title>t{i}</title><link>https://x.test/{i}</link></item>"
                )
            })
            .collect();
        let body = format!("<rss><channel>{items}</channel></rss>");

        let entries = parse_feed("FTC", &body, 10);
        assert_eq!(entries.len(), 10);
        // feed-native order is preserved at this stage
        assert_eq!(entries[0].title, "t0");
        assert_eq!(entries[9].title, "t9");
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed("FTC", "not xml at all", 10).is_empty());
        assert!(parse_feed("FTC", "<html><body>nope</body></html>", 10).is_empty());
    }

    #[test]
    fn test_select_entries_filters_and_sorts() {
        let entries = vec![
            raw("older", "https://x.test/a", "2024-09-01"),
            raw("", "https://x.test/b", "2024-09-20"),
            raw("no link", "", "2024-09-21"),
            raw("newer", "https://x.test/c", "2024-09-10"),
        ];

        let selected = select_entries(entries);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].title, "newer");
        assert_eq!(selected[1].title, "older");
    }

    #[test]
    fn test_select_entries_string_ordering() {
        // lexicographic, not chronological: that is the contract
        let entries = vec![
            raw("rfc2822", "https://x.test/a", "Mon, 09 Sep 2024 12:00:00 GMT"),
            raw("iso", "https://x.test/b", "2024-09-10T08:00:00Z"),
        ];

        let selected = select_entries(entries);
        // "M" sorts after "2", so the RFC-2822 stamp wins under string order
        assert_eq!(selected[0].title, "rfc2822");
    }

    #[test]
    fn test_select_entries_empty_input() {
        assert!(select_entries(Vec::new()).is_empty());
    }

    #[tokio::test]
    async fn test_fetch_entries_no_sources() {
        let config = BuildConfig {
            sources: Vec::new(),
            ..BuildConfig::default()
        };
        assert!(fetch_entries(&config).await.is_empty());
    }
}
