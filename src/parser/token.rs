//! Tokens produced by a [`MarkupCursor`](super::MarkupCursor).

use crate::model::{local_part, XmlAttribute};

/// One markup event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Opening tag (empty elements are reported as a start followed by an end)
    Start(StartTag),
    /// Closing tag, by local name
    End(String),
    /// Unescaped character data
    Text(String),
}

/// An opening tag with its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTag {
    name: String,
    attributes: Vec<XmlAttribute>,
}

impl StartTag {
    /// Create a start tag from a qualified name and attributes.
    pub fn new(name: impl Into<String>, attributes: Vec<XmlAttribute>) -> Self {
        Self {
            name: name.into(),
            attributes,
        }
    }

    /// Qualified name as written (e.g., "w:rPr").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without prefix; this is what decoders dispatch on.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Attribute value by local name, or `None` if missing.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local_name() == local)
            .map(|a| a.value.as_str())
    }

    /// Attribute value by local name, empty if missing.
    pub fn attribute_or_empty(&self, local: &str) -> String {
        self.attribute(local).unwrap_or_default().to_string()
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> &[XmlAttribute] {
        &self.attributes
    }
}
