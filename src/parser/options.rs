//! Decoding options and configuration.

use super::cursor::XmlCursor;

/// Options for decoding run markup.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Keep unrecognized run children as opaque subtrees
    pub keep_unrecognized: bool,

    /// Whether batch decoding may use parallel processing
    pub parallel: bool,

    /// Deepest element nesting accepted before the input is rejected
    pub max_depth: usize,
}

impl DecodeOptions {
    /// Create new decode options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Absorb shape mismatches and keep decoding (the default).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Fail on any shape mismatch.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Keep or drop unrecognized run children.
    pub fn with_unrecognized(mut self, keep: bool) -> Self {
        self.keep_unrecognized = keep;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Set the maximum element nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            keep_unrecognized: false,
            parallel: true,
            max_depth: XmlCursor::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Error handling mode during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    Strict,
    /// Treat mismatched subtrees as absent and continue
    #[default]
    Lenient,
}
