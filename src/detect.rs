//! Input format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// What a byte stream looks like before tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// UTF-8 markup
    Xml {
        /// Whether a UTF-8 byte order mark precedes the markup
        bom: bool,
    },
    /// A ZIP container (an unextracted .docx package)
    Zip,
    /// UTF-16 encoded text
    Utf16,
    /// Anything else
    Unknown,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputFormat::Xml { .. } => write!(f, "XML"),
            InputFormat::Zip => write!(f, "ZIP container"),
            InputFormat::Utf16 => write!(f, "UTF-16 text"),
            InputFormat::Unknown => write!(f, "unknown"),
        }
    }
}

const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
const UTF16_LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16_BE_BOM: &[u8] = b"\xFE\xFF";

/// Detect the input format from a file path.
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut header = Vec::with_capacity(64);
    reader.take(64).read_to_end(&mut header)?;
    Ok(detect_format_from_bytes(&header))
}

/// Detect the input format from the leading bytes.
pub fn detect_format_from_bytes(data: &[u8]) -> InputFormat {
    if data.starts_with(ZIP_MAGIC) {
        return InputFormat::Zip;
    }
    if data.starts_with(UTF16_LE_BOM) || data.starts_with(UTF16_BE_BOM) {
        return InputFormat::Utf16;
    }

    let (bom, body) = match data.strip_prefix(UTF8_BOM) {
        Some(rest) => (true, rest),
        None => (false, data),
    };

    match body.iter().copied().find(|b| !b.is_ascii_whitespace()) {
        Some(b'<') => InputFormat::Xml { bom },
        _ => InputFormat::Unknown,
    }
}

/// Check if bytes look like markup this library can decode.
pub fn is_markup(data: &[u8]) -> bool {
    matches!(detect_format_from_bytes(data), InputFormat::Xml { .. })
}

/// Validate raw input and return the markup text without its BOM.
pub fn markup_text(data: &[u8]) -> Result<&str> {
    match detect_format_from_bytes(data) {
        InputFormat::Xml { bom } => {
            let body = if bom { &data[UTF8_BOM.len()..] } else { data };
            std::str::from_utf8(body)
                .map_err(|e| Error::UnsupportedInput(format!("markup is not valid UTF-8: {}", e)))
        }
        InputFormat::Zip => Err(Error::UnsupportedInput(
            "ZIP container; extract word/document.xml first".to_string(),
        )),
        other => Err(Error::UnsupportedInput(format!(
            "expected UTF-8 markup, found {}",
            other
        ))),
    }
}
