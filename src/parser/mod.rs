//! Run markup decoding.
//!
//! [`XmlCursor`] tokenizes markup and scopes reads to one element at a time.
//! Each model type implements [`FromMarkup`] and is decoded through
//! [`MarkupCursor::decode_subtree`], which guarantees the subtree is consumed
//! whether or not decoding succeeded.

mod content;
mod context;
mod cursor;
mod decoder;
mod options;
mod properties;
mod run;
mod token;

pub use context::{DecodeContext, Decoded, Diagnostic};
pub use cursor::{FromMarkup, MarkupCursor, XmlCursor};
pub use decoder::RunDecoder;
pub use options::{DecodeOptions, ErrorMode};
pub use token::{StartTag, Token};
