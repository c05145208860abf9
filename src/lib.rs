// Main library file for the sitemap builder

// Export modules for each part of the crate
pub mod response;
pub mod sitemap;
pub mod xml_document;

// Re-export key types for convenience
pub use response::{MemoryResponse, ResponseSink, XmlResponse, XML_CONTENT_TYPE, XML_ENCODING};
pub use sitemap::{ChangeFreq, SitemapBuilder, SitemapError, UrlEntry, UrlOptions};
pub use xml_document::{XmlDocument, XmlUrl, XmlUrlset, SITEMAP_NAMESPACE};
