//! Per-decode state: options and the diagnostics of absorbed mismatches.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::options::{DecodeOptions, ErrorMode};

/// A shape mismatch that was absorbed instead of aborting the decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Local name of the element that was dropped
    pub element: String,
    /// Why it was dropped
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}> dropped: {}", self.element, self.message)
    }
}

/// A decoded value together with the diagnostics collected while decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    /// The decoded value
    pub value: T,
    /// Absorbed mismatches, in the order they were met
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Decoded<T> {
    /// Discard diagnostics and keep the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Check if anything was dropped.
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// State threaded through every [`FromMarkup`](super::FromMarkup) call.
#[derive(Debug, Clone, Default)]
pub struct DecodeContext {
    options: DecodeOptions,
    diagnostics: Vec<Diagnostic>,
}

impl DecodeContext {
    /// Create a context for one decode pass.
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            options,
            diagnostics: Vec::new(),
        }
    }

    /// Options in effect.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Wrap a value with the collected diagnostics, resetting the context.
    pub fn finish<T>(&mut self, value: T) -> Decoded<T> {
        Decoded {
            value,
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }

    /// Turn a recoverable failure into absence when the error mode allows it.
    ///
    /// Stream errors always propagate. Shape mismatches become `Ok(None)` in
    /// lenient mode and are recorded as a [`Diagnostic`].
    pub fn absorb<T>(&mut self, element: &str, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_recoverable() && self.options.error_mode == ErrorMode::Lenient => {
                self.note(element, err.to_string());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Record something dropped from `element` without failing the decode.
    pub fn note(&mut self, element: &str, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Ignoring malformed <{}>: {}", element, message);
        self.diagnostics.push(Diagnostic {
            element: element.to_string(),
            message,
        });
    }
}
