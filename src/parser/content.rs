//! Decoders for leaf content: plain text, opaque subtrees, drawings, `jc`.

use crate::error::{Error, Result};
use crate::model::{Drawing, Justification, XmlElement, XmlNode};

use super::context::DecodeContext;
use super::cursor::{FromMarkup, MarkupCursor};
use super::options::ErrorMode;
use super::token::{StartTag, Token};

/// Plain text: the concatenated character data of an element meant to
/// hold no child elements (`t`, `instrText`).
///
/// A nested element is a shape mismatch in strict mode. In lenient mode it
/// is skipped, recorded as a diagnostic against the text element, and the
/// surrounding character data is kept.
impl FromMarkup for String {
    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        start: &StartTag,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let mut text = String::new();
        while let Some(token) = cursor.next_token()? {
            match token {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::Start(tag) => {
                    let message = format!("character data only, found <{}>", tag.name());
                    if ctx.options().error_mode == ErrorMode::Strict {
                        return Err(Error::shape_mismatch(start.local_name(), message));
                    }
                    cursor.skip_subtree()?;
                    ctx.note(start.local_name(), message);
                }
                Token::End(_) => {}
            }
        }
        Ok(text)
    }
}

fn open_element(tag: &StartTag) -> XmlElement {
    XmlElement {
        name: tag.name().to_string(),
        attributes: tag.attributes().to_vec(),
        children: Vec::new(),
    }
}

/// Opaque subtree, built with an explicit stack of open elements.
impl FromMarkup for XmlElement {
    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        start: &StartTag,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        let mut root = open_element(start);
        let mut open: Vec<XmlElement> = Vec::new();

        while let Some(token) = cursor.next_token()? {
            match token {
                Token::Start(tag) => open.push(open_element(&tag)),
                Token::End(_) => {
                    if let Some(done) = open.pop() {
                        let parent = open.last_mut().unwrap_or(&mut root);
                        parent.children.push(XmlNode::Element(done));
                    }
                }
                Token::Text(text) if !text.trim().is_empty() => {
                    let parent = open.last_mut().unwrap_or(&mut root);
                    parent.children.push(XmlNode::Text(text));
                }
                Token::Text(_) => {}
            }
        }

        // Only reachable with a cursor that ends a scope early.
        while let Some(done) = open.pop() {
            let parent = open.last_mut().unwrap_or(&mut root);
            parent.children.push(XmlNode::Element(done));
        }

        Ok(root)
    }
}

impl FromMarkup for Drawing {
    const ELEMENT: Option<&'static str> = Some("drawing");

    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        start: &StartTag,
        ctx: &mut DecodeContext,
    ) -> Result<Self> {
        XmlElement::from_markup(cursor, start, ctx).map(Drawing::new)
    }
}

impl FromMarkup for Justification {
    const ELEMENT: Option<&'static str> = Some("jc");

    fn from_markup<C: MarkupCursor>(
        _cursor: &mut C,
        start: &StartTag,
        _ctx: &mut DecodeContext,
    ) -> Result<Self> {
        Ok(Justification::new(start.attribute_or_empty("val")))
    }
}
