//! # unrun
//!
//! Decoder for WordprocessingML runs.
//!
//! A run (`w:r`) is the smallest styled piece of inline content in a
//! paragraph. This library turns run markup into a strongly-typed [`Run`]:
//! optional [`RunProperties`], an optional field instruction, and the
//! ordered content children (text spans, drawings, tabs).
//!
//! ## Quick Start
//!
//! ```
//! use unrun::{parse_run, ContentChild};
//!
//! fn main() -> unrun::Result<()> {
//!     let run = parse_run(
//!         r#"<w:r><w:rPr><w:sz w:val="24"/></w:rPr><w:t>Hello</w:t><w:tab/></w:r>"#,
//!     )?;
//!
//!     assert_eq!(run.children[0], ContentChild::TextSpan("Hello".into()));
//!     assert_eq!(run.plain_text(), "Hello\t");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Order preserving**: content children come back in document order
//! - **Tolerant**: unknown elements are skipped, malformed metadata is
//!   dropped with a [`Diagnostic`] instead of failing the run
//! - **Strict mode**: every shape mismatch becomes an error on request
//! - **Parallel batches**: independent fragments decode on Rayon

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_markup, InputFormat};
pub use error::{Error, ErrorKind, Result};
pub use model::{
    Alignment, Color, ContentChild, Drawing, Extent, FontSize, Justification, ParagraphStyleRef,
    Run, RunProperties, RunStyleRef, XmlAttribute, XmlElement, XmlNode,
};
pub use parser::{
    DecodeContext, DecodeOptions, Decoded, Diagnostic, ErrorMode, FromMarkup, MarkupCursor,
    RunDecoder, StartTag, Token, XmlCursor,
};
pub use render::JsonFormat;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
pub struct ReadmeDoctests;

use std::path::Path;

/// Decode a fragment whose first element is a run.
///
/// Uses lenient defaults: unknown children are skipped and malformed
/// metadata is left absent.
///
/// # Example
///
/// ```
/// let run = unrun::parse_run("<w:r><w:t>Hi</w:t></w:r>").unwrap();
/// assert_eq!(run.plain_text(), "Hi");
/// ```
pub fn parse_run(xml: &str) -> Result<Run> {
    parse_run_with_options(xml, DecodeOptions::default())
}

/// Decode a run fragment with custom options.
///
/// # Example
///
/// ```
/// use unrun::{parse_run_with_options, DecodeOptions};
///
/// let options = DecodeOptions::new().strict();
/// let result = parse_run_with_options("<w:r><w:t>a<w:b/></w:t></w:r>", options);
/// assert!(result.is_err());
/// ```
pub fn parse_run_with_options(xml: &str, options: DecodeOptions) -> Result<Run> {
    RunDecoder::with_options(options)
        .decode(xml)
        .map(Decoded::into_value)
}

/// Decode every run found in a document part.
///
/// # Example
///
/// ```
/// let xml = r#"<w:p><w:r><w:t>a</w:t></w:r><w:hyperlink><w:r><w:t>b</w:t></w:r></w:hyperlink></w:p>"#;
/// let runs = unrun::scan_runs(xml).unwrap();
/// assert_eq!(runs.len(), 2);
/// ```
pub fn scan_runs(xml: &str) -> Result<Vec<Run>> {
    scan_runs_with_options(xml, DecodeOptions::default())
}

/// Decode every run found in a document part with custom options.
pub fn scan_runs_with_options(xml: &str, options: DecodeOptions) -> Result<Vec<Run>> {
    RunDecoder::with_options(options)
        .scan(xml)
        .map(Decoded::into_value)
}

/// Read a markup file and decode every run in it.
///
/// # Example
///
/// ```no_run
/// let runs = unrun::parse_file("word/document.xml").unwrap();
/// println!("{}", unrun::render::to_text(&runs));
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Run>> {
    parse_file_with_options(path, DecodeOptions::default()).map(Decoded::into_value)
}

/// Read a markup file and decode every run in it, keeping diagnostics.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: DecodeOptions,
) -> Result<Decoded<Vec<Run>>> {
    let data = std::fs::read(path)?;
    RunDecoder::with_options(options).scan_bytes(&data)
}

/// Extract plain text from a markup file.
///
/// # Example
///
/// ```no_run
/// let text = unrun::extract_text("word/document.xml").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let runs = parse_file(path)?;
    Ok(render::to_text(&runs))
}

/// Convert a markup file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let runs = parse_file(path)?;
    render::to_json(&runs, format)
}
