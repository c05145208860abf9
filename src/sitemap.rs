// Sitemap document model: an ordered list of URL entries with optional metadata
// Protocol: http://www.sitemaps.org/protocol.html

use chrono::{DateTime, FixedOffset};
use std::fmt;
use thiserror::Error;
use tracing::debug;

// Error types for sitemap serialization and rendering
#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("XML serialize error: {0}")]
    SerializeError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// How frequently the page is likely to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    // Protocol text for the value, always lowercase
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Optional metadata for one URL. Every field is independent, so any
// combination can be expressed; the empty one is UrlOptions::default().
#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
    // The date of last modification of the file
    pub lastmod: Option<DateTime<FixedOffset>>,
    // How frequently the page is likely to change
    pub changefreq: Option<ChangeFreq>,
    // The priority of this URL relative to other URLs on the site,
    // valid values range from 0.0 to 1.0
    pub priority: Option<f64>,
}

// One URL entry, in document order
#[derive(Debug, Clone)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<DateTime<FixedOffset>>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f64>,
}

// Accumulates URL entries and serializes them as a sitemap XML document.
// Attention: without support of exceeding 50,000 entries and size of 10 MB;
// callers exceeding the protocol limits must split the document into
// multiple sitemaps referenced from a sitemap index themselves.
#[derive(Debug, Default)]
pub struct SitemapBuilder {
    entries: Vec<UrlEntry>,
}

impl SitemapBuilder {
    // Create an empty sitemap
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    // Append a new URL into the sitemap. Entries keep call order; the
    // location and all metadata are serialized as given, no URL, date
    // range or priority validation is performed.
    pub fn append_url(&mut self, loc: impl Into<String>, options: UrlOptions) {
        let entry = UrlEntry {
            loc: loc.into(),
            lastmod: options.lastmod,
            changefreq: options.changefreq,
            priority: options.priority,
        };

        debug!(loc = %entry.loc, "appended sitemap url");
        self.entries.push(entry);
    }

    // Entries in document order
    pub fn entries(&self) -> &[UrlEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
