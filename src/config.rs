//! Build configuration: feed sources, output location, and fixed editorial copy.
//!
//! Everything the aggregator treats as "policy" lives in [`BuildConfig`] and is
//! passed into the aggregation functions explicitly, so tests can substitute
//! sources and output paths instead of fighting module-level constants. The
//! [`Default`] implementation carries the production values.

/// A named RSS/Atom endpoint polled for entries.
#[derive(Debug, Clone)]
pub struct FeedSource {
    /// Display name used in the output `sources` list (e.g. "FTC").
    pub name: String,
    /// Feed URL.
    pub url: String,
}

impl FeedSource {
    pub fn new(name: &str, url: &str) -> Self {
        FeedSource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Configuration for one aggregator run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Feeds polled in order.
    pub sources: Vec<FeedSource>,
    /// Directory the JSON artifacts are written to.
    pub out_dir: String,
    /// At most this many entries are taken per source, in feed order.
    pub per_source_cap: usize,
    /// Character cap applied to the cleaned summary.
    pub summary_max_len: usize,
    /// Sentence used when the cleaned summary comes out empty.
    pub fallback_summary: String,
    /// Fixed editorial list of warning signs.
    pub red_flags: Vec<String>,
    /// Fixed editorial list of recommended actions.
    pub what_to_do: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            sources: vec![
                FeedSource::new("FTC", "https://www.ftc.gov/rss/consumer-alerts.xml"),
                FeedSource::new("FBI IC3", "https://www.ic3.gov/Media/News/Atom.aspx"),
                FeedSource::new("CISA", "https://www.cisa.gov/news.xml"),
            ],
            out_dir: "content".to_string(),
            per_source_cap: 10,
            summary_max_len: 600,
            fallback_summary: "Key consumer scam alert summarized for this week.".to_string(),
            red_flags: vec![
                "Unsolicited contact asking for personal/financial info".to_string(),
                "Urgent language or threats (account locked, legal action)".to_string(),
                "Links or attachments from unknown senders".to_string(),
            ],
            what_to_do: vec![
                "Do not click links—go directly to the official website/app".to_string(),
                "Never share passwords, 2FA codes, or full SSN".to_string(),
                "Report to the FTC at reportfraud.ftc.gov and your bank".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sources() {
        let config = BuildConfig::default();
        let names: Vec<&str> = config.sources.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["FTC", "FBI IC3", "CISA"]);
        for src in &config.sources {
            assert!(src.url.starts_with("https://"));
        }
    }

    #[test]
    fn test_default_editorial_copy() {
        let config = BuildConfig::default();
        assert_eq!(config.red_flags.len(), 3);
        assert_eq!(config.what_to_do.len(), 3);
        assert_eq!(config.per_source_cap, 10);
        assert_eq!(config.summary_max_len, 600);
        assert_eq!(config.out_dir, "content");
    }
}
