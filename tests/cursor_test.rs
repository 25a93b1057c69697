//! Integration tests for decoding through a caller-supplied cursor.

use std::collections::VecDeque;

use unrun::error::Result;
use unrun::{
    ContentChild, Error, ErrorKind, MarkupCursor, RunDecoder, StartTag, Token, XmlAttribute,
};

/// Cursor over a pre-built token list.
struct ReplayCursor {
    tokens: VecDeque<Token>,
    depth: usize,
    scopes: Vec<(usize, bool)>,
}

impl ReplayCursor {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into(),
            depth: 0,
            scopes: Vec::new(),
        }
    }
}

impl MarkupCursor for ReplayCursor {
    fn next_token(&mut self) -> Result<Option<Token>> {
        if self.scopes.last().is_some_and(|(_, closed)| *closed) {
            return Ok(None);
        }
        let Some(token) = self.tokens.pop_front() else {
            if self.depth > 0 {
                return Err(Error::stream(0, "token list ended inside an element"));
            }
            return Ok(None);
        };
        match &token {
            Token::Start(_) => self.depth += 1,
            Token::End(_) => {
                if let Some(scope) = self.scopes.last_mut() {
                    if scope.0 == self.depth {
                        scope.1 = true;
                        self.depth -= 1;
                        return Ok(None);
                    }
                }
                self.depth -= 1;
            }
            Token::Text(_) => {}
        }
        Ok(Some(token))
    }

    fn open_scope(&mut self) {
        self.scopes.push((self.depth, false));
    }

    fn close_scope(&mut self) -> Result<()> {
        while self.next_token()?.is_some() {}
        self.scopes.pop();
        Ok(())
    }
}

fn start(name: &str, attrs: &[(&str, &str)]) -> Token {
    Token::Start(StartTag::new(
        name,
        attrs
            .iter()
            .map(|(n, v)| XmlAttribute {
                name: n.to_string(),
                value: v.to_string(),
            })
            .collect(),
    ))
}

fn end(name: &str) -> Token {
    Token::End(name.to_string())
}

fn text(value: &str) -> Token {
    Token::Text(value.to_string())
}

fn open_run(cursor: &mut ReplayCursor) -> StartTag {
    match cursor.next_token().unwrap() {
        Some(Token::Start(tag)) => tag,
        other => panic!("expected run start, got {:?}", other),
    }
}

#[test]
fn test_decode_from_replayed_tokens() {
    let mut cursor = ReplayCursor::new(vec![
        start("w:r", &[]),
        start("w:rPr", &[]),
        start("w:color", &[("w:val", "00FF00")]),
        end("color"),
        end("rPr"),
        start("w:t", &[]),
        text("Green"),
        end("t"),
        start("w:tab", &[]),
        end("tab"),
        end("r"),
    ]);

    let run_start = open_run(&mut cursor);
    let decoded = RunDecoder::new()
        .decode_cursor(&mut cursor, &run_start)
        .unwrap();

    let run = decoded.value;
    assert_eq!(run.properties.unwrap().color.unwrap().rgb(), Some((0, 255, 0)));
    assert_eq!(
        run.children,
        vec![ContentChild::TextSpan("Green".into()), ContentChild::Tab]
    );
}

#[test]
fn test_scope_boundary_ends_run_without_reading_siblings() {
    let mut cursor = ReplayCursor::new(vec![
        start("w:r", &[]),
        start("w:t", &[]),
        text("first"),
        end("t"),
        end("r"),
        start("w:r", &[]),
        end("r"),
    ]);

    let run_start = open_run(&mut cursor);
    let decoded = RunDecoder::new()
        .decode_cursor(&mut cursor, &run_start)
        .unwrap();

    assert_eq!(decoded.value.plain_text(), "first");
    // The sibling run is still waiting in the stream.
    assert!(matches!(
        cursor.next_token().unwrap(),
        Some(Token::Start(tag)) if tag.local_name() == "r"
    ));
}

#[test]
fn test_stream_error_from_cursor_propagates() {
    let mut cursor = ReplayCursor::new(vec![
        start("w:r", &[]),
        start("w:t", &[]),
        text("cut"),
    ]);

    let run_start = open_run(&mut cursor);
    let err = RunDecoder::new()
        .decode_cursor(&mut cursor, &run_start)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Stream);
}
