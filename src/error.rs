//! Error types for unrun library.

use std::io;
use thiserror::Error;

/// Result type alias for unrun operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding run markup.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The token stream is malformed or truncated.
    #[error("Malformed markup at byte {position}: {message}")]
    Stream {
        /// Byte offset into the input where the tokenizer stopped
        position: usize,
        /// Tokenizer message
        message: String,
    },

    /// A subtree does not match the shape of the requested target.
    #[error("Shape mismatch in <{element}>: expected {expected}")]
    ShapeMismatch {
        /// Local name of the offending element
        element: String,
        /// Description of what the target accepts
        expected: String,
    },

    /// The input is not markup this library can tokenize.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Error during rendering (JSON, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

/// Coarse classification of an [`Error`].
///
/// Decoders branch on this instead of on error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File system failure
    Io,
    /// Malformed or truncated token stream
    Stream,
    /// Subtree did not fit the target type
    ShapeMismatch,
    /// Input rejected before tokenizing
    Input,
    /// Output rendering failure
    Render,
    /// Anything else
    Other,
}

impl Error {
    /// Build a shape mismatch for the given element.
    pub fn shape_mismatch(element: impl Into<String>, expected: impl Into<String>) -> Self {
        Error::ShapeMismatch {
            element: element.into(),
            expected: expected.into(),
        }
    }

    /// Build a stream error at the given byte position.
    pub fn stream(position: usize, message: impl Into<String>) -> Self {
        Error::Stream {
            position,
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::Stream { .. } => ErrorKind::Stream,
            Error::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            Error::UnsupportedInput(_) => ErrorKind::Input,
            Error::Render(_) => ErrorKind::Render,
            Error::Other(_) => ErrorKind::Other,
        }
    }

    /// Whether a decoder may absorb this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        self.kind() == ErrorKind::ShapeMismatch
    }
}
