//! Run-level visual properties.
//!
//! Every value is stored as the raw attribute text. Typed views are
//! offered as accessors and never reject what was decoded.

use serde::{Deserialize, Serialize};

/// Visual properties of a run (`rPr`).
///
/// The four fields are independent; any combination may be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunProperties {
    /// Text color (`color`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,

    /// Font size in half-points (`sz`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,

    /// Character style reference (`rStyle`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_style: Option<RunStyleRef>,

    /// Paragraph style reference (`pStyle`) found inside run properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph_style: Option<ParagraphStyleRef>,
}

impl RunProperties {
    /// Create empty properties.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no field is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.size.is_none()
            && self.run_style.is_none()
            && self.paragraph_style.is_none()
    }
}

/// Text color as written in `w:color/@w:val`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Raw value (usually "RRGGBB" or "auto")
    pub value: String,
}

impl Color {
    /// Create a color holder.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Whether the color defers to the consumer's automatic color.
    pub fn is_auto(&self) -> bool {
        self.value.eq_ignore_ascii_case("auto")
    }

    /// Parse a six-digit hex value.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.value.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// Font size as written in `w:sz/@w:val`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSize {
    /// Raw value in half-points
    pub value: String,
}

impl FontSize {
    /// Create a size holder.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Size in half-points, if the value is numeric.
    pub fn half_points(&self) -> Option<u32> {
        self.value.trim().parse().ok()
    }

    /// Size in points.
    pub fn points(&self) -> Option<f32> {
        self.half_points().map(|hp| hp as f32 / 2.0)
    }
}

/// Character style id from `w:rStyle/@w:val`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyleRef {
    /// Style id
    pub value: String,
}

impl RunStyleRef {
    /// Create a style reference.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Paragraph style id from `w:pStyle/@w:val`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphStyleRef {
    /// Style id
    pub value: String,
}

impl ParagraphStyleRef {
    /// Create a style reference.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
