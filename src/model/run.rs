//! Run and content-level types.

use serde::{Deserialize, Serialize};

use super::node::{Drawing, XmlElement};
use super::properties::RunProperties;

/// The smallest styled unit of inline content in a paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// Visual properties (`rPr`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<RunProperties>,

    /// Field code text (`instrText`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_instruction: Option<String>,

    /// Content children in document order
    #[serde(default)]
    pub children: Vec<ContentChild>,
}

impl Run {
    /// Create a new empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a run holding a single text span.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut run = Self::new();
        run.add_text(text);
        run
    }

    /// Append a text span.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.children.push(ContentChild::TextSpan(text.into()));
    }

    /// Append a tab marker.
    pub fn add_tab(&mut self) {
        self.children.push(ContentChild::Tab);
    }

    /// Append an embedded drawing.
    pub fn add_drawing(&mut self, drawing: Drawing) {
        self.children.push(ContentChild::EmbeddedObject(drawing));
    }

    /// Get plain text content of the run (tabs become `\t`).
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|c| match c {
                ContentChild::TextSpan(text) => Some(text.as_str()),
                ContentChild::Tab => Some("\t"),
                ContentChild::EmbeddedObject(_) | ContentChild::Unrecognized(_) => None,
            })
            .collect()
    }

    /// Iterate over text spans.
    pub fn text_spans(&self) -> impl Iterator<Item = &str> {
        self.children.iter().filter_map(|c| match c {
            ContentChild::TextSpan(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// Iterate over embedded drawings.
    pub fn drawings(&self) -> impl Iterator<Item = &Drawing> {
        self.children.iter().filter_map(|c| match c {
            ContentChild::EmbeddedObject(drawing) => Some(drawing),
            _ => None,
        })
    }

    /// Number of tab markers.
    pub fn tab_count(&self) -> usize {
        self.children
            .iter()
            .filter(|c| matches!(c, ContentChild::Tab))
            .count()
    }

    /// Check if the run carries no content and no metadata.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.properties.is_none() && self.field_instruction.is_none()
    }
}

/// Inline content within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentChild {
    /// Literal text (`t`)
    TextSpan(String),

    /// Embedded drawing (`drawing`)
    EmbeddedObject(Drawing),

    /// Tab character (`tab`)
    Tab,

    /// An element the decoder does not interpret, kept only on request
    Unrecognized(XmlElement),
}

impl ContentChild {
    /// Check if this child is a text span.
    pub fn is_text(&self) -> bool {
        matches!(self, ContentChild::TextSpan(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_plain_text() {
        let mut run = Run::with_text("Name");
        run.add_tab();
        run.add_drawing(Drawing::default());
        run.add_text("Value");

        assert_eq!(run.plain_text(), "Name\tValue");
        assert_eq!(run.tab_count(), 1);
        assert_eq!(run.drawings().count(), 1);
        assert_eq!(run.text_spans().collect::<Vec<_>>(), vec!["Name", "Value"]);
    }

    #[test]
    fn test_empty_run() {
        let run = Run::new();
        assert!(run.is_empty());

        let run = Run {
            field_instruction: Some(" PAGE ".into()),
            ..Default::default()
        };
        assert!(!run.is_empty());
    }

    #[test]
    fn test_content_child_serde_shape() {
        let json = serde_json::to_string(&ContentChild::TextSpan("Hi".into())).unwrap();
        assert_eq!(json, r#"{"type":"text_span","value":"Hi"}"#);

        let json = serde_json::to_string(&ContentChild::Tab).unwrap();
        assert_eq!(json, r#"{"type":"tab"}"#);
    }
}
