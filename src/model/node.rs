//! Opaque markup subtrees kept verbatim in the model.

use serde::{Deserialize, Serialize};

/// An attribute as it appeared on a start tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlAttribute {
    /// Qualified name (e.g., "w:val")
    pub name: String,
    /// Unescaped value
    pub value: String,
}

impl XmlAttribute {
    /// Attribute name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }
}

/// A node inside an [`XmlElement`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum XmlNode {
    /// Nested element
    Element(XmlElement),
    /// Character data (whitespace-only runs between elements are dropped)
    Text(String),
}

/// An element and everything nested inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    /// Qualified name (e.g., "wp:inline")
    pub name: String,

    /// Attributes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<XmlAttribute>,

    /// Child nodes in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Element name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Look up an attribute by local name.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.local_name() == local)
            .map(|a| a.value.as_str())
    }

    /// Direct child elements.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|c| match c {
            XmlNode::Element(e) => Some(e),
            XmlNode::Text(_) => None,
        })
    }

    /// First descendant (depth-first, excluding self) with the given local name.
    pub fn find(&self, local: &str) -> Option<&XmlElement> {
        for child in self.child_elements() {
            if child.local_name() == local {
                return Some(child);
            }
            if let Some(found) = child.find(local) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenated character data of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Element(e) => e.collect_text(out),
                XmlNode::Text(t) => out.push_str(t),
            }
        }
    }
}

/// Size of a drawing in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Width in EMU
    pub cx: u64,
    /// Height in EMU
    pub cy: u64,
}

impl Extent {
    /// EMUs per typographic point.
    pub const EMU_PER_POINT: u64 = 12_700;

    /// Width and height in points.
    pub fn to_points(self) -> (f32, f32) {
        (
            self.cx as f32 / Self::EMU_PER_POINT as f32,
            self.cy as f32 / Self::EMU_PER_POINT as f32,
        )
    }
}

/// An embedded drawing, kept as its raw subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drawing {
    /// The `drawing` element itself
    pub root: XmlElement,
}

impl Drawing {
    /// Wrap a decoded `drawing` element.
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Whether the drawing is placed inline (as opposed to anchored).
    pub fn is_inline(&self) -> bool {
        self.root
            .child_elements()
            .any(|e| e.local_name() == "inline")
    }

    /// Declared size from the `extent` element.
    pub fn extent(&self) -> Option<Extent> {
        let extent = self.root.find("extent")?;
        let cx = extent.attribute("cx")?.parse().ok()?;
        let cy = extent.attribute("cy")?.parse().ok()?;
        Some(Extent { cx, cy })
    }

    /// Relationship id of the embedded picture (`blip` `embed`).
    pub fn embedded_relationship_id(&self) -> Option<&str> {
        self.root.find("blip")?.attribute("embed")
    }

    /// Alternative text from `docPr`.
    pub fn description(&self) -> Option<&str> {
        self.root.find("docPr")?.attribute("descr")
    }

    /// Object name from `docPr`.
    pub fn name(&self) -> Option<&str> {
        self.root.find("docPr")?.attribute("name")
    }
}

pub(crate) fn local_part(name: &str) -> &str {
    match name.rfind(':') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}
