//! Line ingestion and rendering.
//!
//! Responsibilities:
//! - decode each raw line and build its shape through the factory
//! - collect shapes in input order; rejected lines never become entries
//! - report every rejected line through the diagnostic channel and carry on

mod diagnostic;
mod list;

use std::io::{self, Write};

use shapedraw_format::decode;

pub use diagnostic::{Diagnostic, IngestReport};
pub use list::ShapeList;

use crate::error::ShapeError;
use crate::factory::ShapeFactory;
use crate::shape::Shape;

/// Decodes lines into shapes and renders them.
///
/// Ingestion needs `&mut self` and rendering `&self`, so a render pass can
/// never observe a half-ingested batch.
#[derive(Debug, Default)]
pub struct ShapeDrawer {
    factory: ShapeFactory,
    shapes: ShapeList,
    /// Lines ingested so far, across all calls.
    lines_seen: usize,
}

impl ShapeDrawer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_factory(factory: ShapeFactory) -> Self {
        Self { factory, ..Self::default() }
    }

    /// Ingests `lines`, handing each rejected line to `on_diagnostic`.
    ///
    /// Returns the number of shapes appended by this call.
    pub fn ingest_with<I, S, F>(&mut self, lines: I, mut on_diagnostic: F) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(Diagnostic),
    {
        let mut accepted = 0;
        for line in lines {
            let line = line.as_ref();
            self.lines_seen += 1;

            match self.build(line) {
                Ok(shape) => {
                    log::debug!("line {}: {}", self.lines_seen, shape);
                    self.shapes.push(shape);
                    accepted += 1;
                }
                Err(error) => {
                    log::debug!("line {} rejected: {}", self.lines_seen, error);
                    on_diagnostic(Diagnostic {
                        line_number: self.lines_seen,
                        line: line.to_string(),
                        error,
                    });
                }
            }
        }
        accepted
    }

    /// Ingests `lines`, collecting diagnostics into the returned report.
    pub fn ingest<I, S>(&mut self, lines: I) -> IngestReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut diagnostics = Vec::new();
        let accepted = self.ingest_with(lines, |d| diagnostics.push(d));
        log::info!("ingested {} shape(s), rejected {} line(s)", accepted, diagnostics.len());
        IngestReport { accepted, diagnostics }
    }

    fn build(&self, line: &str) -> Result<Shape, ShapeError> {
        let record = decode(line)?;
        self.factory.construct_record(record)
    }

    /// Writes every collected shape to `out` in input order.
    #[inline]
    pub fn render_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.shapes.render_all(out)
    }

    /// Render text of every collected shape, in input order.
    #[inline]
    pub fn rendered(&self) -> impl Iterator<Item = String> + '_ {
        self.shapes.rendered()
    }

    #[inline]
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
