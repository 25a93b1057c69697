//! Scoped token cursor over markup.
//!
//! A cursor hands out tokens for the element it is currently inside. Once
//! the end tag closing that element is read, [`MarkupCursor::next_token`]
//! reports `None` until the scope is closed again, so a decoder can loop
//! "until exhausted" without ever reading past its own element.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, ErrorKind, Result};
use crate::model::XmlAttribute;

use super::context::DecodeContext;
use super::token::{StartTag, Token};

/// A type that can be decoded from one element subtree.
pub trait FromMarkup: Sized {
    /// Local name the subtree root must have, if fixed.
    const ELEMENT: Option<&'static str> = None;

    /// Decode from a cursor whose scope is the element opened by `start`.
    ///
    /// Implementations read tokens until `next_token` returns `None`, or
    /// return early; whatever is left of the subtree is consumed by the
    /// caller ([`MarkupCursor::decode_subtree`]).
    fn from_markup<C: MarkupCursor>(
        cursor: &mut C,
        start: &StartTag,
        ctx: &mut DecodeContext,
    ) -> Result<Self>;
}

/// Source of markup tokens with subtree scoping.
pub trait MarkupCursor {
    /// Next token inside the current scope, or `None` when the scope (or
    /// the whole stream) is exhausted.
    fn next_token(&mut self) -> Result<Option<Token>>;

    /// Open a scope for the element whose start token was just returned.
    fn open_scope(&mut self);

    /// Consume the rest of the innermost scope and pop it.
    fn close_scope(&mut self) -> Result<()>;

    /// Byte offset of the tokenizer, for diagnostics.
    fn position(&self) -> usize {
        0
    }

    /// Discard the element whose start token was just returned.
    fn skip_subtree(&mut self) -> Result<()> {
        self.open_scope();
        self.close_scope()
    }

    /// Decode the element whose start token was just returned into `T`.
    ///
    /// The subtree is fully consumed on success and on shape mismatch, so
    /// the caller can keep reading siblings either way.
    fn decode_subtree<T: FromMarkup>(
        &mut self,
        start: &StartTag,
        ctx: &mut DecodeContext,
    ) -> Result<T>
    where
        Self: Sized,
    {
        self.open_scope();

        if let Some(expected) = T::ELEMENT {
            if start.local_name() != expected {
                self.close_scope()?;
                return Err(Error::shape_mismatch(
                    start.local_name(),
                    format!("a <{}> element", expected),
                ));
            }
        }

        match T::from_markup(self, start, ctx) {
            Err(err) if err.kind() == ErrorKind::Stream => Err(err),
            result => {
                self.close_scope()?;
                result
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scope {
    depth: usize,
    closed: bool,
}

/// [`MarkupCursor`] over an in-memory XML document.
///
/// Nesting deeper than the cursor's maximum depth is reported as a stream
/// error, so decoded trees stay shallow enough to drop, clone and compare.
pub struct XmlCursor<'a> {
    reader: Reader<&'a [u8]>,
    depth: usize,
    max_depth: usize,
    scopes: Vec<Scope>,
    finished: bool,
}

impl<'a> XmlCursor<'a> {
    /// Default limit on element nesting.
    pub const DEFAULT_MAX_DEPTH: usize = 512;

    /// Create a cursor over an XML string.
    pub fn new(xml: &'a str) -> Self {
        Self::from_bytes(xml.as_bytes())
    }

    /// Create a cursor over UTF-8 encoded XML bytes.
    pub fn from_bytes(data: &'a [u8]) -> Self {
        let mut reader = Reader::from_reader(data);
        reader.expand_empty_elements(true);
        reader.check_end_names(true);

        Self {
            reader,
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
            scopes: Vec::new(),
            finished: false,
        }
    }

    /// Set the maximum element nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Advance to the next start tag in the current scope.
    pub fn next_start(&mut self) -> Result<Option<StartTag>> {
        while let Some(token) = self.next_token()? {
            if let Token::Start(tag) = token {
                return Ok(Some(tag));
            }
        }
        Ok(None)
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn error(&self, message: impl std::fmt::Display) -> Error {
        Error::stream(self.reader.buffer_position(), message.to_string())
    }

    fn utf8(&self, bytes: &[u8]) -> Result<String> {
        std::str::from_utf8(bytes)
            .map(str::to_string)
            .map_err(|e| self.error(e))
    }

    fn start_tag(&self, e: &BytesStart<'_>) -> Result<StartTag> {
        let name = self.utf8(e.name().as_ref())?;
        let mut attributes = Vec::new();
        for attr in e.attributes() {
            let attr = attr.map_err(|err| self.error(err))?;
            let value = attr.unescape_value().map_err(|err| self.error(err))?;
            attributes.push(XmlAttribute {
                name: self.utf8(attr.key.as_ref())?,
                value: value.into_owned(),
            });
        }
        Ok(StartTag::new(name, attributes))
    }
}

impl MarkupCursor for XmlCursor<'_> {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.finished || self.scopes.last().is_some_and(|s| s.closed) {
            return Ok(None);
        }

        loop {
            let event = self.reader.read_event().map_err(|e| self.error(e))?;
            match event {
                Event::Start(e) => {
                    if self.depth >= self.max_depth {
                        return Err(self.error(format!(
                            "elements nested deeper than {} levels",
                            self.max_depth
                        )));
                    }
                    let tag = self.start_tag(&e)?;
                    self.depth += 1;
                    return Ok(Some(Token::Start(tag)));
                }
                Event::End(e) => {
                    if self.depth == 0 {
                        return Err(self.error("end tag without matching start tag"));
                    }
                    let closes_scope = match self.scopes.last_mut() {
                        Some(scope) if scope.depth == self.depth => {
                            scope.closed = true;
                            true
                        }
                        _ => false,
                    };
                    self.depth -= 1;
                    if closes_scope {
                        return Ok(None);
                    }
                    let name = self.utf8(e.local_name().as_ref())?;
                    return Ok(Some(Token::End(name)));
                }
                Event::Text(e) => {
                    let text = e.unescape().map_err(|err| self.error(err))?;
                    return Ok(Some(Token::Text(text.into_owned())));
                }
                Event::CData(e) => {
                    let text = self.utf8(&e)?;
                    return Ok(Some(Token::Text(text)));
                }
                Event::Eof => {
                    if self.depth > 0 {
                        return Err(self.error(format!(
                            "unexpected end of input with {} element(s) still open",
                            self.depth
                        )));
                    }
                    self.finished = true;
                    return Ok(None);
                }
                // Declarations, comments, processing instructions, doctypes.
                // Empty elements never show up: they are expanded.
                _ => {}
            }
        }
    }

    fn open_scope(&mut self) {
        self.scopes.push(Scope {
            depth: self.depth,
            closed: false,
        });
    }

    fn close_scope(&mut self) -> Result<()> {
        while self.next_token()?.is_some() {}
        self.scopes.pop();
        Ok(())
    }

    fn position(&self) -> usize {
        self.reader.buffer_position()
    }
}
