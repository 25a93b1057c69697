//! Horizontal alignment value (`jc`).

use serde::{Deserialize, Serialize};

/// Justification as written in `w:jc/@w:val`.
///
/// Any string is kept; [`Justification::alignment`] maps the known tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Justification {
    /// Raw alignment token
    pub value: String,
}

impl Justification {
    /// Create a justification holder.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Typed alignment, if the token is recognized.
    pub fn alignment(&self) -> Option<Alignment> {
        Alignment::from_token(&self.value)
    }
}

/// Known alignment tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Leading edge
    Start,
    /// Centered
    Center,
    /// Trailing edge
    End,
    /// Justified on both edges
    Both,
    /// Justified with inter-character spacing
    Distribute,
}

impl Alignment {
    /// Parse a token; `left` and `right` are the transitional spellings.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "start" | "left" => Some(Alignment::Start),
            "center" => Some(Alignment::Center),
            "end" | "right" => Some(Alignment::End),
            "both" => Some(Alignment::Both),
            "distribute" => Some(Alignment::Distribute),
            _ => None,
        }
    }

    /// Canonical token.
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
            Alignment::Both => "both",
            Alignment::Distribute => "distribute",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_tokens() {
        assert_eq!(Justification::new("center").alignment(), Some(Alignment::Center));
        assert_eq!(Justification::new("left").alignment(), Some(Alignment::Start));
        assert_eq!(Justification::new("right").alignment(), Some(Alignment::End));
        assert_eq!(Justification::new("sideways").alignment(), None);
        assert_eq!(Alignment::Distribute.as_str(), "distribute");
    }
}
