//! Decoder for run properties (`rPr`).

use crate::error::{Error, Result};
use crate::model::{Color, FontSize, ParagraphStyleRef, RunProperties, RunStyleRef};

use super::context::DecodeContext;
use super::cursor::{FromMarkup, MarkupCursor};
use super::token::{StartTag, Token};

/// Run properties hold child elements only. Non-whitespace character data
/// directly inside `rPr` is a shape mismatch; the run decoder absorbs it in
/// lenient mode and leaves the run without properties.
impl FromMarkup for RunProperties {
    const ELEMENT: Option<&'static str> = Some("rPr");

    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        start: &StartTag,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let mut props = RunProperties::default();

        while let Some(token) = cursor.next_token()? {
            let tag = match token {
                Token::Start(tag) => tag,
                Token::Text(text) if !text.trim().is_empty() => {
                    return Err(Error::shape_mismatch(
                        start.local_name(),
                        "child elements only, found character data",
                    ));
                }
                _ => continue,
            };

            match tag.local_name() {
                "color" => props.color = Some(Color::new(tag.attribute_or_empty("val"))),
                "sz" => props.size = Some(FontSize::new(tag.attribute_or_empty("val"))),
                "rStyle" => {
                    props.run_style = Some(RunStyleRef::new(tag.attribute_or_empty("val")))
                }
                "pStyle" => {
                    props.paragraph_style =
                        Some(ParagraphStyleRef::new(tag.attribute_or_empty("val")))
                }
                other => log::debug!("Skipping unsupported <{}> in run properties", other),
            }

            // Recognized tags only carry an attribute; their bodies are dropped too.
            cursor.skip_subtree()?;
        }

        Ok(props)
    }
}
