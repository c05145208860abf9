// HTTP response adaptation: serialize an XML document into a response sink

use crate::sitemap::SitemapError;
use crate::xml_document::XmlDocument;
use tracing::debug;

pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const XML_ENCODING: &str = "utf-8";

// Narrow view of a framework response: a writable byte sink with a
// settable content type and text encoding. Implement this for the
// response type of whatever HTTP server is hosting the sitemap.
pub trait ResponseSink {
    fn set_content_type(&mut self, content_type: &str);

    fn set_encoding(&mut self, encoding: &str);

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()>;
}

// Wraps an XML document so a request pipeline can serialize it into the
// response with the correct content type
pub struct XmlResponse<D: XmlDocument> {
    document: D,
}

impl<D: XmlDocument> XmlResponse<D> {
    pub fn new(document: D) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    // Serialize the wrapped document and write it to the sink. The body
    // is written untransformed; write failures from the underlying
    // stream propagate to the caller.
    pub fn render<S: ResponseSink>(&self, sink: &mut S) -> Result<(), SitemapError> {
        let xml = self.document.to_xml()?;

        sink.set_content_type(XML_CONTENT_TYPE);
        sink.set_encoding(XML_ENCODING);

        debug!(bytes = xml.len(), "writing xml response body");
        sink.write_body(xml.as_bytes())?;

        Ok(())
    }
}

// In-memory response sink, used by the tests and as a reference for
// adapting a real framework response type
#[derive(Debug, Default)]
pub struct MemoryResponse {
    pub content_type: Option<String>,
    pub encoding: Option<String>,
    pub body: Vec<u8>,
}

impl MemoryResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl ResponseSink for MemoryResponse {
    fn set_content_type(&mut self, content_type: &str) {
        self.content_type = Some(content_type.to_string());
    }

    fn set_encoding(&mut self, encoding: &str) {
        self.encoding = Some(encoding.to_string());
    }

    fn write_body(&mut self, body: &[u8]) -> std::io::Result<()> {
        self.body.extend_from_slice(body);
        Ok(())
    }
}
