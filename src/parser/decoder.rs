//! Entry points that own a cursor and a decode context.

use rayon::prelude::*;

use crate::detect::markup_text;
use crate::error::{Error, Result};
use crate::model::Run;

use super::context::{DecodeContext, Decoded};
use super::cursor::{MarkupCursor, XmlCursor};
use super::options::DecodeOptions;
use super::token::StartTag;

/// Run decoder.
#[derive(Debug, Clone, Default)]
pub struct RunDecoder {
    options: DecodeOptions,
}

impl RunDecoder {
    /// Create a decoder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with custom options.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    fn cursor<'a>(&self, xml: &'a str) -> XmlCursor<'a> {
        XmlCursor::new(xml).with_max_depth(self.options.max_depth)
    }

    /// Decode a fragment whose first element is a run.
    pub fn decode(&self, xml: &str) -> Result<Decoded<Run>> {
        let mut cursor = self.cursor(xml);
        let start = cursor
            .next_start()?
            .ok_or_else(|| Error::UnsupportedInput("input contains no elements".to_string()))?;
        self.decode_cursor(&mut cursor, &start)
    }

    /// Decode the run opened by `start`, using a cursor the caller already
    /// positioned just after that start tag.
    pub fn decode_cursor<C: MarkupCursor>(
        &self,
        cursor: &mut C,
        start: &StartTag,
    ) -> Result<Decoded<Run>> {
        let mut ctx = DecodeContext::new(self.options.clone());
        let run = cursor.decode_subtree::<Run>(start, &mut ctx)?;
        log::debug!(
            "Decoded run with {} children ({} diagnostics)",
            run.children.len(),
            ctx.diagnostics().len()
        );
        Ok(ctx.finish(run))
    }

    /// Decode every run in a document part, at any depth, in document order.
    ///
    /// Runs are not searched for inside runs that were already decoded.
    pub fn scan(&self, xml: &str) -> Result<Decoded<Vec<Run>>> {
        let mut cursor = self.cursor(xml);
        let mut ctx = DecodeContext::new(self.options.clone());
        let mut runs = Vec::new();

        while let Some(tag) = cursor.next_start()? {
            if tag.local_name() == "r" {
                runs.push(cursor.decode_subtree::<Run>(&tag, &mut ctx)?);
            }
        }

        log::debug!("Scanned {} runs", runs.len());
        Ok(ctx.finish(runs))
    }

    /// Sniff raw bytes and scan them for runs.
    pub fn scan_bytes(&self, data: &[u8]) -> Result<Decoded<Vec<Run>>> {
        self.scan(markup_text(data)?)
    }

    /// Decode independent run fragments; results keep input order.
    pub fn decode_many<S>(&self, fragments: &[S]) -> Vec<Result<Decoded<Run>>>
    where
        S: AsRef<str> + Sync,
    {
        if self.options.parallel {
            fragments
                .par_iter()
                .map(|fragment| self.decode(fragment.as_ref()))
                .collect()
        } else {
            fragments
                .iter()
                .map(|fragment| self.decode(fragment.as_ref()))
                .collect()
        }
    }
}
