// Structures for XML serialization of the sitemap document

use crate::sitemap::{SitemapBuilder, SitemapError, UrlEntry};
use serde::Serialize;

// Protocol: http://www.sitemaps.org/protocol.html
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// W3.org (http://www.w3.org/TR/NOTE-datetime) pattern: YYYY-MM-DDThh:mm:ssTZD,
// with the numeric colon-delimited offset form rather than the Z suffix
const LASTMOD_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

// A document that can produce its complete XML text
pub trait XmlDocument {
    fn to_xml(&self) -> Result<String, SitemapError>;
}

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(rename = "urlset")]
pub struct XmlUrlset {
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    #[serde(rename = "url")]
    pub urls: Vec<XmlUrl>,
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct XmlUrl {
    pub loc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl From<&UrlEntry> for XmlUrl {
    fn from(entry: &UrlEntry) -> Self {
        XmlUrl {
            loc: entry.loc.clone(),
            lastmod: entry
                .lastmod
                .map(|lastmod| lastmod.format(LASTMOD_FORMAT).to_string()),
            changefreq: entry
                .changefreq
                .map(|changefreq| changefreq.as_str().to_string()),
            // f64 Display always uses a period as the decimal separator,
            // independent of host locale
            priority: entry.priority.map(|priority| priority.to_string()),
        }
    }
}

impl From<&SitemapBuilder> for XmlUrlset {
    fn from(sitemap: &SitemapBuilder) -> Self {
        XmlUrlset {
            xmlns: SITEMAP_NAMESPACE.to_string(),
            urls: sitemap.entries().iter().map(XmlUrl::from).collect(),
        }
    }
}

impl XmlDocument for SitemapBuilder {
    // Serialize as declaration plus <urlset>, one <url> child per entry
    // in entry order, children in the fixed order loc, lastmod,
    // changefreq, priority
    fn to_xml(&self) -> Result<String, SitemapError> {
        let urlset = XmlUrlset::from(self);
        let body = quick_xml::se::to_string(&urlset)
            .map_err(|e| SitemapError::SerializeError(e.to_string()))?;

        Ok(format!("{}{}", XML_DECLARATION, body))
    }
}
