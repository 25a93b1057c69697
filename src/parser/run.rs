//! Decoder for runs (`r`).

use crate::error::Result;
use crate::model::{ContentChild, Drawing, Run, RunProperties, XmlElement};

use super::context::DecodeContext;
use super::cursor::{FromMarkup, MarkupCursor};
use super::token::{StartTag, Token};

impl FromMarkup for Run {
    const ELEMENT: Option<&'static str> = Some("r");

    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        _start: &StartTag,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let mut run = Run::default();

        while let Some(token) = cursor.next_token()? {
            // Character data directly inside a run carries nothing.
            let Token::Start(tag) = token else {
                continue;
            };

            match tag.local_name() {
                "rPr" => {
                    let result = cursor.decode_subtree::<RunProperties>(&tag, ctx);
                    run.properties = ctx.absorb("rPr", result)?;
                }
                "instrText" => {
                    let result = cursor.decode_subtree::<String>(&tag, ctx);
                    run.field_instruction = ctx.absorb("instrText", result)?;
                }
                "t" => {
                    let result = cursor.decode_subtree::<String>(&tag, ctx);
                    if let Some(text) = ctx.absorb("t", result)? {
                        run.children.push(ContentChild::TextSpan(text));
                    }
                }
                "drawing" => {
                    let result = cursor.decode_subtree::<Drawing>(&tag, ctx);
                    if let Some(drawing) = ctx.absorb("drawing", result)? {
                        run.children.push(ContentChild::EmbeddedObject(drawing));
                    }
                }
                "tab" => {
                    cursor.skip_subtree()?;
                    run.children.push(ContentChild::Tab);
                }
                _ if ctx.options().keep_unrecognized => {
                    let element = cursor.decode_subtree::<XmlElement>(&tag, ctx)?;
                    run.children.push(ContentChild::Unrecognized(element));
                }
                other => {
                    log::debug!("Skipping unsupported <{}> in run", other);
                    cursor.skip_subtree()?;
                }
            }
        }

        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::FontSize;
    use crate::parser::{DecodeOptions, XmlCursor};

    fn decode_with(xml: &str, options: DecodeOptions) -> Result<(Run, DecodeContext)> {
        let mut cursor = XmlCursor::new(xml);
        let start = cursor.next_start()?.expect("root element");
        let mut ctx = DecodeContext::new(options);
        let run = cursor.decode_subtree::<Run>(&start, &mut ctx)?;
        Ok((run, ctx))
    }

    fn decode(xml: &str) -> Run {
        decode_with(xml, DecodeOptions::default()).unwrap().0
    }

    #[test]
    fn test_children_keep_document_order() {
        let run = decode("<w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:drawing/><w:t>c</w:t></w:r>");

        assert_eq!(run.children.len(), 5);
        assert_eq!(run.children[0], ContentChild::TextSpan("a".into()));
        assert_eq!(run.children[1], ContentChild::Tab);
        assert_eq!(run.children[2], ContentChild::TextSpan("b".into()));
        assert!(matches!(run.children[3], ContentChild::EmbeddedObject(_)));
        assert_eq!(run.children[4], ContentChild::TextSpan("c".into()));
    }

    #[test]
    fn test_metadata_is_not_content() {
        let run = decode(
            r#"<w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:instrText> PAGE </w:instrText></w:r>"#,
        );

        assert!(run.children.is_empty());
        assert_eq!(run.field_instruction.as_deref(), Some(" PAGE "));
        assert_eq!(
            run.properties.and_then(|p| p.size),
            Some(FontSize::new("24"))
        );
    }

    #[test]
    fn test_last_field_instruction_wins() {
        let run = decode("<w:r><w:instrText>A</w:instrText><w:instrText>B</w:instrText></w:r>");
        assert_eq!(run.field_instruction.as_deref(), Some("B"));
    }

    #[test]
    fn test_tab_body_is_consumed() {
        let run = decode(r#"<w:r><w:tab w:val="left"><w:t>hidden</w:t></w:tab></w:r>"#);
        assert_eq!(run.children, vec![ContentChild::Tab]);
    }

    #[test]
    fn test_nested_element_in_text_keeps_surrounding_text() {
        let (run, ctx) = decode_with(
            "<w:r><w:t>Hello<w:proofErr/> world</w:t><w:instrText> PAGE <w:x/></w:instrText></w:r>",
            DecodeOptions::default(),
        )
        .unwrap();

        assert_eq!(run.children, vec![ContentChild::TextSpan("Hello world".into())]);
        assert_eq!(run.field_instruction.as_deref(), Some(" PAGE "));
        let elements: Vec<&str> = ctx.diagnostics().iter().map(|d| d.element.as_str()).collect();
        assert_eq!(elements, vec!["t", "instrText"]);
    }

    #[test]
    fn test_nested_element_in_text_fails_in_strict_mode() {
        let result = decode_with(
            "<w:r><w:t>Hello<w:proofErr/> world</w:t></w:r>",
            DecodeOptions::new().strict(),
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_strict_mode_propagates_mismatch() {
        let result = decode_with(
            "<w:r><w:rPr>oops</w:rPr><w:t>x</w:t></w:r>",
            DecodeOptions::new().strict(),
        );
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_unrecognized_kept_on_request() {
        let (run, _) = decode_with(
            r#"<w:r><w:t>a</w:t><w:br w:type="page"/><w:t>b</w:t></w:r>"#,
            DecodeOptions::new().with_unrecognized(true),
        )
        .unwrap();

        assert_eq!(run.children.len(), 3);
        match &run.children[1] {
            ContentChild::Unrecognized(element) => {
                assert_eq!(element.local_name(), "br");
                assert_eq!(element.attribute("type"), Some("page"));
            }
            other => panic!("expected unrecognized child, got {:?}", other),
        }
    }
}
