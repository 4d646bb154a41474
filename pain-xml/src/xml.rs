//! XML text encoding of pain documents
//!
//! Serialization goes through `quick_xml::se` with the explicit tag mapping
//! of [`crate::document`]; the output always starts with a UTF-8 XML
//! declaration. Pretty output is produced by re-indenting the compact form
//! event by event, so leaf text such as `<InstdAmt Ccy="EUR">100.00</InstdAmt>`
//! stays on one line. Parsing accepts any supported namespace and rejects
//! others with [`Error::UnsupportedNamespace`].

use crate::document::Document;
use crate::{Error, Result};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use serde::Serialize;

/// Declaration prepended to every serialized document
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Serialize `document` to XML text, indented by two spaces when `pretty`
pub fn to_xml_string(document: &Document, pretty: bool) -> Result<String> {
    let mut body = String::new();
    document
        .serialize(quick_xml::se::Serializer::new(&mut body))
        .map_err(|e| Error::Xml(format!("XML serialization failed: {}", e)))?;

    if pretty {
        body = indent(&body)?;
    }

    Ok(format!("{}\n{}", XML_DECLARATION, body))
}

// Start-Text-End runs are kept on one line by the writer
fn indent(compact: &str) -> Result<String> {
    let mut reader = Reader::from_str(compact);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer
                .write_event(event)
                .map_err(|e| Error::Xml(format!("XML indentation failed: {}", e)))?,
            Err(e) => return Err(Error::Xml(format!("XML indentation failed: {}", e))),
        }
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| Error::Xml(format!("Indented XML is not valid UTF-8: {}", e)))
}

/// Parse a document from XML text
pub fn from_xml_str(xml: &str) -> Result<Document> {
    let document: Document = quick_xml::de::from_str(xml)?;
    let version = document.schema_version()?;

    tracing::debug!(
        "Parsed {} document {}",
        version,
        document.group_header().message_id
    );

    Ok(document)
}

/// Parse a document from raw bytes; the content must be UTF-8
pub fn from_xml_bytes(bytes: &[u8]) -> Result<Document> {
    let xml = std::str::from_utf8(bytes)
        .map_err(|e| Error::Xml(format!("Document is not valid UTF-8: {}", e)))?;
    from_xml_str(xml)
}
